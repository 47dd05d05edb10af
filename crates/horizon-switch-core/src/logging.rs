//! Tracing targets and spans.
//!
//! Nothing here installs a subscriber. Applications pick one and filter by
//! the targets below, for example:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_switch=debug,horizon_switch_core=trace")
//!     .init();
//! ```
//!
//! Rejected inputs (no-op state assignments, disabled activations, unknown
//! properties) are reported at `debug`; signal emission and attribute
//! reflection at `trace`.

/// Names given to [`PerfSpan`]s.
pub mod span_names {
    /// Attach and detach.
    pub const LIFECYCLE: &str = "horizon_switch::lifecycle";
}

/// Per-module `tracing` targets of the core crate.
pub mod targets {
    pub const CORE: &str = "horizon_switch_core";
    /// Slot connection and emission.
    pub const SIGNAL: &str = "horizon_switch_core::signal";
    /// Element host (attributes and focus) target.
    pub const ELEMENT: &str = "horizon_switch_core::element";
    /// Element lifecycle target.
    pub const LIFECYCLE: &str = "horizon_switch_core::lifecycle";
    /// Element registry target.
    pub const REGISTRY: &str = "horizon_switch_core::registry";
}

/// Keeps a `debug` span on the `horizon_switch::perf` target entered while
/// it lives, so a subscriber with span timings reports how long the guarded
/// operation took.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "horizon_switch::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span_without_subscriber() {
        let _span = PerfSpan::new(span_names::LIFECYCLE);
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [
            targets::SIGNAL,
            targets::ELEMENT,
            targets::LIFECYCLE,
            targets::REGISTRY,
        ] {
            assert!(target.starts_with(targets::CORE));
        }
    }
}
