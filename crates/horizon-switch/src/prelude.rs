//! Commonly used types, for glob import.
//!
//! ```
//! use horizon_switch::prelude::*;
//! ```

pub use horizon_switch_core::{
    CustomElement, LifecycleState, PropertyValue, Signal, element_cast, element_cast_mut, registry,
};

pub use crate::accessibility::{Accessible, AccessibleRole};
pub use crate::config::{ConfigError, SwitchConfig};
pub use crate::events::{ChangeEvent, InputEvent, Key};
pub use crate::style::TextDirection;
pub use crate::switch::{ToggleSwitch, VisualState};
