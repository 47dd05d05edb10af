//! Horizon Switch - a two-position toggle switch element.
//!
//! This is the main crate; it re-exports the element model from
//! `horizon-switch-core` and adds the switch itself.
//!
//! # Example
//!
//! ```
//! use horizon_switch::prelude::*;
//!
//! horizon_switch::define().ok();
//!
//! let mut element = registry::create(horizon_switch::TAG_NAME).unwrap();
//! element.set_attribute("on-label", "Yes");
//! element.set_attribute("off-label", "No");
//! element.connected();
//!
//! let switch = element_cast_mut::<ToggleSwitch>(&mut *element).unwrap();
//! assert_eq!(switch.state(), "No");
//! switch.click();
//! assert_eq!(switch.state(), "Yes");
//! ```
//!
//! # Features
//!
//! - `accessibility` (default): build AccessKit nodes from a switch.

pub use horizon_switch_core::*;

pub mod accessibility;
pub mod config;
pub mod events;
pub mod logging;
pub mod prelude;
pub mod shadow;
pub mod style;
pub mod switch;

pub use accessibility::{Accessible, AccessibleRole};
pub use config::{ConfigError, SwitchConfig};
pub use events::{ChangeEvent, InputEvent, Key};
pub use style::{StyleError, SwitchStyle, TextDirection};
pub use switch::{PendingProperties, ToggleSwitch, VisualState};

/// The tag name the switch registers under.
pub const TAG_NAME: &str = "switch-component";

/// Register [`ToggleSwitch`] in the global element registry under
/// [`TAG_NAME`].
///
/// Fails if the tag is already defined.
pub fn define() -> Result<()> {
    registry::define(ElementDefinition::new::<ToggleSwitch, _>(TAG_NAME, || {
        Box::new(ToggleSwitch::new())
    }))?;
    Ok(())
}
