//! Accessibility support for the switch element.
//!
//! The switch exposes its role and state to assistive technology in two
//! ways:
//!
//! - As reflected ARIA attributes on the host element (`role`,
//!   `aria-checked`, `aria-disabled`), kept current by the switch itself.
//! - Through the [`Accessible`] trait, from which an
//!   [AccessKit](https://accesskit.dev/) node can be built when the
//!   `accessibility` feature is enabled.

#[cfg(feature = "accessibility")]
use accesskit::{Action, Node, Toggled};

/// ARIA attribute names.
pub mod aria {
    /// The role attribute.
    pub const ROLE: &str = "role";
    /// Checked state, `"true"` or `"false"`.
    pub const CHECKED: &str = "aria-checked";
    /// Disabled state, present only while disabled.
    pub const DISABLED: &str = "aria-disabled";
    /// Accessible label.
    pub const LABEL: &str = "aria-label";
    /// Hides a node from assistive technology.
    pub const HIDDEN: &str = "aria-hidden";
}

/// Render a boolean the way ARIA attributes expect it.
pub fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// The accessibility role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AccessibleRole {
    /// A generic element with no specific role.
    #[default]
    Unknown,
    /// A checkbox that can be checked or unchecked.
    CheckBox,
    /// An on/off switch.
    Switch,
}

impl AccessibleRole {
    /// The ARIA role name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "generic",
            Self::CheckBox => "checkbox",
            Self::Switch => "switch",
        }
    }

    /// Parse an ARIA role name.
    pub fn from_aria(role: &str) -> Self {
        match role.trim() {
            "switch" => Self::Switch,
            "checkbox" => Self::CheckBox,
            _ => Self::Unknown,
        }
    }

    /// Convert to the AccessKit role.
    #[cfg(feature = "accessibility")]
    pub fn to_accesskit_role(self) -> accesskit::Role {
        match self {
            Self::Unknown => accesskit::Role::GenericContainer,
            Self::CheckBox => accesskit::Role::CheckBox,
            Self::Switch => accesskit::Role::Switch,
        }
    }
}

/// Trait for elements that provide accessibility information.
///
/// Every method has a default so that elements only override what applies.
pub trait Accessible {
    /// The accessibility role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Unknown
    }

    /// The label announced by screen readers.
    fn accessible_name(&self) -> Option<String> {
        None
    }

    /// The current value as text.
    fn accessible_value(&self) -> Option<String> {
        None
    }

    /// Checked state for checkable elements, `None` otherwise.
    fn is_accessible_checked(&self) -> Option<bool> {
        None
    }

    /// Whether the element is disabled.
    fn is_accessible_disabled(&self) -> bool {
        false
    }

    /// Whether the element can take keyboard focus.
    fn is_accessible_focusable(&self) -> bool {
        false
    }

    /// Actions assistive technology may perform.
    #[cfg(feature = "accessibility")]
    fn accessible_actions(&self) -> Vec<Action> {
        Vec::new()
    }

    /// Build an AccessKit node describing the element.
    #[cfg(feature = "accessibility")]
    fn build_accessible_node(&self) -> Node {
        let mut node = Node::new(self.accessible_role().to_accesskit_role());

        if let Some(name) = self.accessible_name() {
            node.set_label(name);
        }
        if let Some(value) = self.accessible_value() {
            node.set_value(value);
        }
        if let Some(checked) = self.is_accessible_checked() {
            node.set_toggled(if checked { Toggled::True } else { Toggled::False });
        }
        if self.is_accessible_disabled() {
            node.set_disabled();
        }
        for action in self.accessible_actions() {
            node.add_action(action);
        }

        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Minimal;
    impl Accessible for Minimal {}

    #[test]
    fn test_trait_defaults() {
        let element = Minimal;
        assert_eq!(element.accessible_role(), AccessibleRole::Unknown);
        assert!(element.accessible_name().is_none());
        assert!(element.is_accessible_checked().is_none());
        assert!(!element.is_accessible_disabled());
    }

    #[test]
    fn test_role_names() {
        assert_eq!(AccessibleRole::Switch.as_str(), "switch");
        assert_eq!(AccessibleRole::from_aria(" switch "), AccessibleRole::Switch);
        assert_eq!(AccessibleRole::from_aria("button"), AccessibleRole::Unknown);
        assert_eq!(aria_bool(true), "true");
        assert_eq!(aria_bool(false), "false");
    }

    #[cfg(feature = "accessibility")]
    #[test]
    fn test_build_node_from_defaults() {
        let node = Minimal.build_accessible_node();
        assert_eq!(node.role(), accesskit::Role::GenericContainer);
        assert!(node.toggled().is_none());
        assert!(!node.is_disabled());
    }
}
