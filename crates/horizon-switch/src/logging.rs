//! Tracing targets for the switch element.
//!
//! Use these with `tracing` directives to filter logs by subsystem, for
//! example `RUST_LOG=horizon_switch::switch=debug`.

/// Target names for log filtering.
pub mod targets {
    /// Switch state, interaction and lifecycle.
    pub const SWITCH: &str = "horizon_switch::switch";
    /// Attribute-change dispatch.
    pub const ATTRIBUTES: &str = "horizon_switch::attributes";
    /// Stylesheet and custom properties.
    pub const STYLE: &str = "horizon_switch::style";
    /// Declarative configuration loading.
    pub const CONFIG: &str = "horizon_switch::config";
}
