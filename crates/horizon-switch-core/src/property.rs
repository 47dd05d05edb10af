//! Change-detecting value cells and the dynamic property value.
//!
//! [`Property`] holds one piece of element state behind a lock; its
//! [`Property::set`] reports whether the stored value moved, which is the
//! point at which an element decides to notify. [`PropertyValue`] carries
//! values through the by-name property surface of elements.
//!
//! ```
//! use horizon_switch_core::{Property, Signal};
//!
//! struct Flag {
//!     on: Property<bool>,
//!     toggled: Signal<bool>,
//! }
//!
//! impl Flag {
//!     fn set_on(&self, on: bool) {
//!         if self.on.set(on) {
//!             self.toggled.emit(on);
//!         }
//!     }
//! }
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value cell whose setter reports changes.
///
/// ```
/// use horizon_switch_core::Property;
///
/// let checked = Property::new(false);
/// assert!(!checked.set(false));
/// assert!(checked.set(true));
/// assert!(checked.get());
/// ```
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// A clone of the stored value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Store `value`. Returns `false`, leaving the cell untouched, when it
    /// equals the stored value.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current == value {
            return false;
        }
        *current = value;
        true
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&self.get()).finish()
    }
}

/// A dynamically typed property value.
///
/// Elements accept these through their by-name property surface. Setters
/// that expect one variant ignore the others instead of coercing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// A boolean flag.
    Bool(bool),
    /// A text value.
    Text(String),
}

impl PropertyValue {
    /// The boolean payload, if this is a [`PropertyValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// The text payload, if this is a [`PropertyValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Bool(_) => None,
        }
    }

    /// Name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Text(_) => "text",
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
        }
    }
}

static_assertions::assert_impl_all!(Property<String>: Send, Sync);
