//! Core systems for Horizon Switch.
//!
//! Elements are built from a handful of small pieces:
//!
//! - [`Signal`] for synchronous notifications and [`Property`] for state
//!   cells that report changes.
//! - [`ElementHost`] for reflected attributes and focus, and the
//!   [`CustomElement`] trait that routes attribute writes to an element.
//! - [`Lifecycle`] for the `Constructed`, `Attached` and `Detached` states.
//! - [`registry`] for the process-wide tag name table.
//!
//! ```
//! use horizon_switch_core::{ElementHost, Signal};
//!
//! let mut host = ElementHost::new("switch-component");
//! let reflected = Signal::<String>::new();
//! reflected.connect(|name| assert_eq!(name, "role"));
//!
//! host.set_attribute("role", "switch");
//! reflected.emit("role".to_string());
//! assert_eq!(host.attribute("role"), Some("switch"));
//! ```
//!
//! # Registry Example
//!
//! ```
//! use horizon_switch_core::registry;
//!
//! assert!(registry::validate_tag_name("switch-component").is_ok());
//! assert!(registry::validate_tag_name("switch").is_err());
//! ```

pub mod element;
mod error;
pub mod lifecycle;
pub mod logging;
pub mod property;
pub mod registry;
pub mod signal;

pub use element::{
    AttributeChange, ClassList, CustomElement, ElementHost, element_cast, element_cast_mut,
};
pub use error::{CoreError, RegistryError, Result};
pub use lifecycle::{Lifecycle, LifecycleState};
pub use logging::PerfSpan;
pub use property::{Property, PropertyValue};
pub use registry::{ElementDefinition, ElementRegistry};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
