//! The switch's encapsulated rendering structure.
//!
//! ```text
//! <style>…</style>
//! <label class="switch jsSwitcher" id="switchContainer" role="switch">
//!   <input type="checkbox" class="off-screen" id="switcher" aria-hidden="true">
//!   <span class="switch__off-text">off</span>
//!   <span class="switch__lever" id="switchLever" aria-hidden="true"></span>
//!   <span class="switch__on-text">on</span>
//! </label>
//! ```
//!
//! Nodes are typed fields of [`ShadowTree`] rather than the result of a
//! query, so a missing node cannot be observed.

use std::fmt::Write as _;

use horizon_switch_core::{ClassList, ElementHost, Property};

use crate::accessibility::aria;
use crate::style::SwitchStyle;

/// Element ids inside the shadow tree.
pub mod ids {
    /// The `<label>` wrapping the control.
    pub const CONTAINER: &str = "switchContainer";
    /// The checkbox input.
    pub const SWITCHER: &str = "switcher";
    /// The lever span.
    pub const LEVER: &str = "switchLever";
}

/// Class names used by the shadow tree and its stylesheet.
pub mod classes {
    /// Container base class.
    pub const SWITCH: &str = "switch";
    /// Container hook class.
    pub const JS_SWITCHER: &str = "jsSwitcher";
    /// Container class enabling the stretch animation.
    pub const ELASTIC: &str = "switch--elastic";
    /// Lever class.
    pub const LEVER: &str = "switch__lever";
    /// Lever class while the activation key is held.
    pub const ACTIVE: &str = "is-active";
    /// On-label span class.
    pub const ON_TEXT: &str = "switch__on-text";
    /// Off-label span class.
    pub const OFF_TEXT: &str = "switch__off-text";
    /// Visually hidden but focusable.
    pub const OFF_SCREEN: &str = "off-screen";
}

/// Label shown for the on position until configured.
pub const DEFAULT_ON_LABEL: &str = "on";
/// Label shown for the off position until configured.
pub const DEFAULT_OFF_LABEL: &str = "off";

/// A node of the shadow tree.
#[derive(Debug, Clone)]
pub struct ShadowNode {
    element: ElementHost,
    id: Option<&'static str>,
    classes: ClassList,
    text: String,
}

impl ShadowNode {
    fn new(tag: &str, id: Option<&'static str>, classes: &str) -> Self {
        Self {
            element: ElementHost::new(tag),
            id,
            classes: ClassList::parse(classes),
            text: String::new(),
        }
    }

    fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.element.set_attribute(name, value);
        self
    }

    fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// The node's tag name.
    pub fn tag(&self) -> &str {
        self.element.tag()
    }

    /// The node's id, if any.
    pub fn id(&self) -> Option<&'static str> {
        self.id
    }

    /// The node's class list.
    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub(crate) fn classes_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }

    /// An attribute of the node.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.element.attribute(name)
    }

    /// The node's text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn write_markup(&self, out: &mut String, extra: &str) {
        let _ = write!(out, "<{}", self.tag());
        if let Some(id) = self.id {
            let _ = write!(out, " id=\"{id}\"");
        }
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", self.classes);
        }
        for (name, value) in self.element.attributes() {
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
        out.push_str(extra);
        out.push('>');
        out.push_str(&escape(&self.text));
    }
}

/// The checkbox input that carries the switch's checked flag.
#[derive(Debug)]
pub struct CheckboxInput {
    node: ShadowNode,
    checked: Property<bool>,
    disabled: bool,
    focused: bool,
}

impl CheckboxInput {
    fn new() -> Self {
        Self {
            node: ShadowNode::new("input", Some(ids::SWITCHER), classes::OFF_SCREEN)
                .with_attribute("type", "checkbox")
                .with_attribute("name", ids::SWITCHER)
                .with_attribute(aria::HIDDEN, "true"),
            checked: Property::new(false),
            disabled: false,
            focused: false,
        }
    }

    /// The underlying node.
    pub fn node(&self) -> &ShadowNode {
        &self.node
    }

    /// Whether the input is checked.
    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    /// Set the checked flag, returning `true` if it changed.
    pub(crate) fn set_checked(&mut self, checked: bool) -> bool {
        self.checked.set(checked)
    }

    /// Whether the input is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Activate the input. A disabled input ignores activation.
    ///
    /// Returns `true` if the checked flag flipped.
    pub(crate) fn click(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        let checked = !self.checked.get();
        self.checked.set(checked)
    }

    /// Whether the input has focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub(crate) fn focus(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.focused = true;
        true
    }

    pub(crate) fn blur(&mut self) {
        self.focused = false;
    }
}

/// The switch's shadow tree.
#[derive(Debug)]
pub struct ShadowTree {
    style: SwitchStyle,
    container: ShadowNode,
    input: CheckboxInput,
    off_text: ShadowNode,
    lever: ShadowNode,
    on_text: ShadowNode,
}

impl ShadowTree {
    /// Build the tree with default labels and style.
    pub fn new() -> Self {
        Self {
            style: SwitchStyle::new(),
            container: ShadowNode::new(
                "label",
                Some(ids::CONTAINER),
                &format!("{} {}", classes::SWITCH, classes::JS_SWITCHER),
            )
            .with_attribute(aria::ROLE, "switch")
            .with_attribute(aria::LABEL, "regular switch"),
            input: CheckboxInput::new(),
            off_text: ShadowNode::new("span", None, classes::OFF_TEXT).with_text(DEFAULT_OFF_LABEL),
            lever: ShadowNode::new("span", Some(ids::LEVER), classes::LEVER)
                .with_attribute(aria::HIDDEN, "true"),
            on_text: ShadowNode::new("span", None, classes::ON_TEXT).with_text(DEFAULT_ON_LABEL),
        }
    }

    /// The encapsulated style.
    pub fn style(&self) -> &SwitchStyle {
        &self.style
    }

    pub(crate) fn style_mut(&mut self) -> &mut SwitchStyle {
        &mut self.style
    }

    /// The `<label>` container.
    pub fn container(&self) -> &ShadowNode {
        &self.container
    }

    pub(crate) fn container_mut(&mut self) -> &mut ShadowNode {
        &mut self.container
    }

    /// The checkbox input.
    pub fn input(&self) -> &CheckboxInput {
        &self.input
    }

    pub(crate) fn input_mut(&mut self) -> &mut CheckboxInput {
        &mut self.input
    }

    /// The lever.
    pub fn lever(&self) -> &ShadowNode {
        &self.lever
    }

    pub(crate) fn lever_mut(&mut self) -> &mut ShadowNode {
        &mut self.lever
    }

    /// The on-label span.
    pub fn on_text(&self) -> &ShadowNode {
        &self.on_text
    }

    pub(crate) fn on_text_mut(&mut self) -> &mut ShadowNode {
        &mut self.on_text
    }

    /// The off-label span.
    pub fn off_text(&self) -> &ShadowNode {
        &self.off_text
    }

    pub(crate) fn off_text_mut(&mut self) -> &mut ShadowNode {
        &mut self.off_text
    }

    /// Serialize the tree as markup, stylesheet included.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        out.push_str("<style>\n");
        out.push_str(&self.style.stylesheet());
        out.push_str("</style>\n");

        self.container.write_markup(&mut out, "");
        out.push('\n');

        let mut input_state = String::new();
        if self.input.is_checked() {
            input_state.push_str(" checked");
        }
        if self.input.is_disabled() {
            input_state.push_str(" disabled");
        }
        for (node, extra, closed) in [
            (&self.input.node, input_state.as_str(), false),
            (&self.off_text, "", true),
            (&self.lever, "", true),
            (&self.on_text, "", true),
        ] {
            out.push_str("  ");
            node.write_markup(&mut out, extra);
            if closed {
                let _ = write!(out, "</{}>", node.tag());
            }
            out.push('\n');
        }
        out.push_str("</label>\n");
        out
    }
}

impl Default for ShadowTree {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}
