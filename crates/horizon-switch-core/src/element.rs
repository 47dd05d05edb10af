//! Element model for Horizon Switch.
//!
//! Provides the pieces a custom element is built from:
//! - [`ElementHost`]: the host-visible side of an element (tag, attributes, focus)
//! - [`ClassList`]: an ordered set of style classes for internal nodes
//! - [`AttributeChange`]: the record passed to attribute-change reactions
//! - [`CustomElement`]: the lifecycle trait implemented by element types
//!
//! # Related Modules
//!
//! - [`crate::registry`] - Maps tag names to element constructors
//! - [`crate::lifecycle`] - The attach/detach state machine

use std::any::Any;
use std::fmt;

use crate::lifecycle::LifecycleState;
use crate::logging::targets;

/// A single attribute mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeChange {
    /// The attribute name.
    pub name: String,
    /// The value before the mutation, `None` if the attribute was absent.
    pub old_value: Option<String>,
    /// The value after the mutation, `None` if the attribute was removed.
    pub new_value: Option<String>,
}

impl AttributeChange {
    /// Whether the mutation actually changed the stored value.
    pub fn is_change(&self) -> bool {
        self.old_value != self.new_value
    }
}

/// The host-visible side of an element.
///
/// Attributes keep their insertion order, like a DOM element's attribute list.
/// Attribute names are case-sensitive and stored exactly as given.
#[derive(Debug, Clone, Default)]
pub struct ElementHost {
    tag: String,
    attributes: Vec<(String, String)>,
    focused: bool,
}

impl ElementHost {
    /// Create a host for an element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            focused: false,
        }
    }

    /// The element's tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Check whether an attribute is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(key, _)| key == name)
    }

    /// Set an attribute, returning the resulting change record.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> AttributeChange {
        let value = value.into();
        tracing::trace!(target: targets::ELEMENT, tag = %self.tag, name, value = %value, "set attribute");

        let old_value = match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, current)) => Some(std::mem::replace(current, value.clone())),
            None => {
                self.attributes.push((name.to_string(), value.clone()));
                None
            }
        };

        AttributeChange {
            name: name.to_string(),
            old_value,
            new_value: Some(value),
        }
    }

    /// Remove an attribute, returning the resulting change record.
    pub fn remove_attribute(&mut self, name: &str) -> AttributeChange {
        tracing::trace!(target: targets::ELEMENT, tag = %self.tag, name, "remove attribute");

        let old_value = self
            .attributes
            .iter()
            .position(|(key, _)| key == name)
            .map(|index| self.attributes.remove(index).1);

        AttributeChange {
            name: name.to_string(),
            old_value,
            new_value: None,
        }
    }

    /// Add or remove a presence-flag attribute.
    pub fn toggle_attribute(&mut self, name: &str, present: bool) -> AttributeChange {
        if present {
            self.set_attribute(name, "")
        } else {
            self.remove_attribute(name)
        }
    }

    /// Iterate over attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Whether the element currently has focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Give the element focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Remove focus from the element.
    pub fn blur(&mut self) {
        if self.focused {
            tracing::trace!(target: targets::ELEMENT, tag = %self.tag, "blur");
        }
        self.focused = false;
    }
}

/// An ordered set of class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Create an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a class list from a whitespace-separated string.
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        for class in classes.split_whitespace() {
            list.add(class);
        }
        list
    }

    /// Add a class. Returns `false` if it was already present.
    pub fn add(&mut self, class: &str) -> bool {
        if self.contains(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove a class. Returns `false` if it was absent.
    pub fn remove(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Add or remove a class depending on `present`.
    pub fn set(&mut self, class: &str, present: bool) -> bool {
        if present {
            self.add(class)
        } else {
            self.remove(class)
        }
    }

    /// Check whether a class is present.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Iterate over the classes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

/// Trait implemented by custom element types.
///
/// The hooks mirror host-driven lifecycle transitions. Implementations must
/// keep them idempotent: a host may attach, detach and mutate attributes in
/// any order.
///
/// # Example
///
/// ```
/// use std::any::Any;
/// use horizon_switch_core::{AttributeChange, CustomElement, ElementHost, Lifecycle, LifecycleState};
///
/// struct Badge {
///     host: ElementHost,
///     lifecycle: Lifecycle,
///     text: String,
/// }
///
/// impl CustomElement for Badge {
///     fn observed_attributes(&self) -> &'static [&'static str] {
///         &["text"]
///     }
///     fn host(&self) -> &ElementHost { &self.host }
///     fn host_mut(&mut self) -> &mut ElementHost { &mut self.host }
///     fn lifecycle_state(&self) -> LifecycleState { self.lifecycle.state() }
///     fn connected(&mut self) { self.lifecycle.attach(); }
///     fn disconnected(&mut self) { self.lifecycle.detach(); }
///     fn attribute_changed(&mut self, change: &AttributeChange) {
///         self.text = change.new_value.clone().unwrap_or_default();
///     }
///     fn as_any(&self) -> &dyn Any { self }
///     fn as_any_mut(&mut self) -> &mut dyn Any { self }
/// }
///
/// let mut badge = Badge { host: ElementHost::new("x-badge"), lifecycle: Lifecycle::new(), text: String::new() };
/// badge.set_attribute("text", "new");
/// assert_eq!(badge.text, "new");
/// ```
pub trait CustomElement: Send + Sync {
    /// Attribute names whose mutations are routed to
    /// [`attribute_changed`](Self::attribute_changed).
    fn observed_attributes(&self) -> &'static [&'static str];

    /// The host side of the element.
    fn host(&self) -> &ElementHost;

    /// Mutable access to the host side of the element.
    fn host_mut(&mut self) -> &mut ElementHost;

    /// The element's current lifecycle state.
    fn lifecycle_state(&self) -> LifecycleState;

    /// Lifecycle entry: the element was attached to a host document.
    fn connected(&mut self);

    /// Lifecycle exit: the element was detached from its host document.
    fn disconnected(&mut self);

    /// Reaction to a mutation of an observed attribute.
    fn attribute_changed(&mut self, change: &AttributeChange);

    /// Upcast for downcasting to the concrete element type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to the concrete element type.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Set an attribute on the host, notifying the element if it is observed.
    fn set_attribute(&mut self, name: &str, value: &str) {
        let change = self.host_mut().set_attribute(name, value);
        if self.observed_attributes().contains(&name) {
            self.attribute_changed(&change);
        }
    }

    /// Remove an attribute from the host, notifying the element if it is
    /// observed and was present.
    fn remove_attribute(&mut self, name: &str) {
        let change = self.host_mut().remove_attribute(name);
        if change.is_change() && self.observed_attributes().contains(&name) {
            self.attribute_changed(&change);
        }
    }
}

/// Downcast a dynamic element to its concrete type.
pub fn element_cast<T: CustomElement + 'static>(element: &dyn CustomElement) -> Option<&T> {
    element.as_any().downcast_ref::<T>()
}

/// Mutably downcast a dynamic element to its concrete type.
pub fn element_cast_mut<T: CustomElement + 'static>(
    element: &mut dyn CustomElement,
) -> Option<&mut T> {
    element.as_any_mut().downcast_mut::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_attributes_keep_order() {
        let mut host = ElementHost::new("switch-component");
        host.set_attribute("on-label", "Yes");
        host.set_attribute("off-label", "No");
        host.set_attribute("on-label", "Ja");

        let attrs: Vec<_> = host.attributes().collect();
        assert_eq!(attrs, vec![("on-label", "Ja"), ("off-label", "No")]);
    }

    #[test]
    fn test_set_attribute_reports_old_value() {
        let mut host = ElementHost::new("switch-component");
        let first = host.set_attribute("state", "off");
        assert_eq!(first.old_value, None);
        assert!(first.is_change());

        let second = host.set_attribute("state", "off");
        assert_eq!(second.old_value.as_deref(), Some("off"));
        assert!(!second.is_change());
    }

    #[test]
    fn test_remove_and_toggle_attribute() {
        let mut host = ElementHost::new("switch-component");
        assert!(!host.remove_attribute("disabled").is_change());

        host.toggle_attribute("disabled", true);
        assert_eq!(host.attribute("disabled"), Some(""));

        let change = host.toggle_attribute("disabled", false);
        assert_eq!(change.old_value.as_deref(), Some(""));
        assert!(!host.has_attribute("disabled"));
    }

    #[test]
    fn test_focus() {
        let mut host = ElementHost::new("switch-component");
        assert!(!host.has_focus());
        host.focus();
        assert!(host.has_focus());
        host.blur();
        assert!(!host.has_focus());
    }

    #[test]
    fn test_class_list() {
        let mut classes = ClassList::parse("switch  jsSwitcher");
        assert_eq!(classes.len(), 2);
        assert!(!classes.add("switch"));
        assert!(classes.add("switch--elastic"));
        assert_eq!(classes.to_string(), "switch jsSwitcher switch--elastic");

        assert!(classes.set("switch--elastic", false));
        assert!(!classes.contains("switch--elastic"));
        assert!(!classes.remove("missing"));
    }
}
