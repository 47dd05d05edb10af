//! The toggle switch element.
//!
//! [`ToggleSwitch`] is a two-position control whose positions carry
//! configurable text labels. It keeps an attribute surface (what a host
//! document declares) and a property surface (what code assigns) in sync,
//! reflects its state for assistive technology, and reports every completed
//! toggle through its [`changed`](ToggleSwitch::changed) signal.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use horizon_switch::prelude::*;
//!
//! let mut switch = ToggleSwitch::with_attributes([("on-label", "Yes"), ("off-label", "No")]);
//! switch.attach();
//! assert_eq!(switch.state(), "No");
//!
//! let count = Arc::new(AtomicU32::new(0));
//! let count_clone = count.clone();
//! switch.changed.connect(move |event| {
//!     assert_eq!(event.state, "Yes");
//!     count_clone.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! switch.click();
//! assert_eq!(switch.state(), "Yes");
//! assert_eq!(switch.host().attribute("aria-checked"), Some("true"));
//! assert_eq!(count.load(Ordering::SeqCst), 1);
//! ```
//!
//! # Lifecycle
//!
//! Construction builds the shadow tree. [`attach`](ToggleSwitch::attach)
//! binds the interaction listeners, applies accessibility defaults and
//! flushes any [`PendingProperties`] staged before the first attach.
//! [`detach`](ToggleSwitch::detach) unbinds the listeners; a detached switch
//! ignores activation until it is attached again.

pub mod attributes;
mod upgrade;

use std::any::Any;
use std::fmt;

use horizon_switch_core::{
    AttributeChange, CustomElement, ElementHost, Lifecycle, LifecycleState, PerfSpan,
    PropertyValue, Signal, logging::span_names,
};

use crate::accessibility::{Accessible, AccessibleRole, aria, aria_bool};
use crate::events::{ChangeEvent, InputEvent, Key};
use crate::logging::targets;
use crate::shadow::{ShadowTree, classes};
use crate::style::{StyleError, TextDirection};

pub use attributes::OBSERVED_ATTRIBUTES;
pub use upgrade::PendingProperties;

/// Names accepted by [`ToggleSwitch::set_property`] and
/// [`ToggleSwitch::property`].
pub const PROPERTY_NAMES: &[&str] = &[
    "state",
    "checked",
    "disabled",
    "elastic",
    "onLabel",
    "offLabel",
    "name",
    "initState",
];

/// Handlers bound while the switch is attached.
#[derive(Debug, Clone, Copy)]
struct Listeners {
    input_change: fn(&mut ToggleSwitch),
    key_down: fn(&mut ToggleSwitch, Key),
    key_up: fn(&mut ToggleSwitch, Key),
}

impl Listeners {
    const SWITCH: Self = Self {
        input_change: ToggleSwitch::on_input_change,
        key_down: ToggleSwitch::on_key_down,
        key_up: ToggleSwitch::on_key_up,
    };
}

/// A snapshot of everything a renderer needs to draw the switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualState {
    /// The lever is in the on position.
    pub checked: bool,
    /// Interaction is disabled.
    pub disabled: bool,
    /// The stretch animation is enabled.
    pub elastic: bool,
    /// The activation key is held down.
    pub lever_pressed: bool,
    /// The switch has keyboard focus.
    pub focused: bool,
    /// Layout direction of the host.
    pub direction: TextDirection,
    /// Text of the on position.
    pub on_label: String,
    /// Text of the off position.
    pub off_label: String,
}

/// A two-position toggle switch with text labels.
///
/// # Signals
///
/// - `changed(ChangeEvent)`: emitted once per completed toggle, after the
///   reflected `state` and `aria-checked` attributes are updated
pub struct ToggleSwitch {
    host: ElementHost,
    shadow: ShadowTree,
    lifecycle: Lifecycle,
    listeners: Option<Listeners>,
    pending: PendingProperties,

    /// Signal emitted after the switch changes position.
    pub changed: Signal<ChangeEvent>,
}

static_assertions::assert_impl_all!(ToggleSwitch: Send, Sync);

impl ToggleSwitch {
    /// Create a switch with default labels.
    pub fn new() -> Self {
        Self {
            host: ElementHost::new(crate::TAG_NAME),
            shadow: ShadowTree::new(),
            lifecycle: Lifecycle::new(),
            listeners: None,
            pending: PendingProperties::default(),
            changed: Signal::new(),
        }
    }

    /// Create a switch and apply declarative attributes in order, as a host
    /// document parser would.
    pub fn with_attributes<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut switch = Self::new();
        for (name, value) in attributes {
            switch.set_attribute(name.as_ref(), value.as_ref());
        }
        switch
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// The current state: the on-label or the off-label.
    pub fn state(&self) -> &str {
        if let Some(staged) = self.pending.state.as_deref() {
            if staged == self.on_label() || staged == self.off_label() {
                return staged;
            }
        }
        self.current_state()
    }

    /// Move the switch to the position named by `value`.
    ///
    /// Empty values and the current state are no-ops. A value that names
    /// neither label is rejected. The move emits [`changed`](Self::changed)
    /// even while disabled, since only user activation is blocked.
    pub fn set_state(&mut self, value: &str) {
        if !self.is_upgraded() {
            tracing::trace!(target: targets::SWITCH, value, "state staged");
            self.pending.state = Some(value.to_string());
            return;
        }
        if value.is_empty() || value == self.current_state() {
            tracing::debug!(target: targets::SWITCH, value, "state unchanged");
            return;
        }
        if value == self.on_label() {
            self.apply_checked(true);
        } else if value == self.off_label() {
            self.apply_checked(false);
        } else {
            tracing::debug!(
                target: targets::SWITCH,
                value,
                on = self.on_label(),
                off = self.off_label(),
                "state rejected, not a label"
            );
        }
    }

    /// Whether the switch is in the on position.
    ///
    /// Read from the input once upgraded, so it agrees with `aria-checked`
    /// even when both labels carry the same text.
    pub fn checked(&self) -> bool {
        match self.pending.state.as_deref() {
            Some(staged) if staged == self.on_label() => true,
            Some(staged) if staged == self.off_label() => false,
            _ => self.shadow.input().is_checked(),
        }
    }

    /// Text of the on position.
    pub fn on_label(&self) -> &str {
        self.pending
            .on_label
            .as_deref()
            .unwrap_or_else(|| self.shadow.on_text().text())
    }

    /// Set the text of the on position. Empty values are ignored.
    pub fn set_on_label(&mut self, label: &str) {
        if !self.is_upgraded() {
            if !label.is_empty() {
                self.pending.on_label = Some(label.to_string());
            }
            return;
        }
        if label.is_empty() {
            tracing::debug!(target: targets::SWITCH, "empty on-label ignored");
            return;
        }
        self.set_attribute(attributes::ON_LABEL, label);
    }

    /// Text of the off position.
    pub fn off_label(&self) -> &str {
        self.pending
            .off_label
            .as_deref()
            .unwrap_or_else(|| self.shadow.off_text().text())
    }

    /// Set the text of the off position. Empty values are ignored.
    pub fn set_off_label(&mut self, label: &str) {
        if !self.is_upgraded() {
            if !label.is_empty() {
                self.pending.off_label = Some(label.to_string());
            }
            return;
        }
        if label.is_empty() {
            tracing::debug!(target: targets::SWITCH, "empty off-label ignored");
            return;
        }
        self.set_attribute(attributes::OFF_LABEL, label);
    }

    /// Whether user interaction is disabled.
    pub fn disabled(&self) -> bool {
        self.pending
            .disabled
            .unwrap_or_else(|| self.host.has_attribute(attributes::DISABLED))
    }

    /// Enable or disable user interaction.
    pub fn set_disabled(&mut self, disabled: bool) {
        if !self.is_upgraded() {
            self.pending.disabled = Some(disabled);
            return;
        }
        self.set_flag_attribute(attributes::DISABLED, disabled);
    }

    /// Whether the stretch animation is enabled.
    pub fn elastic(&self) -> bool {
        self.pending
            .elastic
            .unwrap_or_else(|| self.host.has_attribute(attributes::ELASTIC))
    }

    /// Enable or disable the stretch animation.
    pub fn set_elastic(&mut self, elastic: bool) {
        if !self.is_upgraded() {
            self.pending.elastic = Some(elastic);
            return;
        }
        self.set_flag_attribute(attributes::ELASTIC, elastic);
    }

    /// The `name` attribute.
    pub fn name(&self) -> Option<&str> {
        self.host.attribute(attributes::NAME)
    }

    /// The `init-state` attribute.
    pub fn init_state(&self) -> Option<&str> {
        self.host.attribute(attributes::INIT_STATE)
    }

    /// Text direction from the host `dir` attribute.
    pub fn direction(&self) -> TextDirection {
        TextDirection::from_attribute(self.host.attribute(attributes::DIR))
    }

    /// Properties staged before the first attach.
    pub fn pending_properties(&self) -> &PendingProperties {
        &self.pending
    }

    /// Whether the switch has been attached at least once.
    pub fn is_upgraded(&self) -> bool {
        self.lifecycle.attach_count() > 0
    }

    /// Set a property by name.
    ///
    /// Read-only properties, unknown names and values of the wrong type are
    /// ignored.
    pub fn set_property(&mut self, name: &str, value: impl Into<PropertyValue>) {
        let value = value.into();
        match (name, &value) {
            ("state", PropertyValue::Text(text)) => self.set_state(text),
            ("disabled", PropertyValue::Bool(flag)) => self.set_disabled(*flag),
            ("elastic", PropertyValue::Bool(flag)) => self.set_elastic(*flag),
            ("onLabel", PropertyValue::Text(text)) => self.set_on_label(text),
            ("offLabel", PropertyValue::Text(text)) => self.set_off_label(text),
            ("checked" | "name" | "initState", _) => {
                tracing::debug!(target: targets::SWITCH, name, "read-only property");
            }
            _ if PROPERTY_NAMES.contains(&name) => {
                tracing::debug!(
                    target: targets::SWITCH,
                    name,
                    kind = value.kind(),
                    "property value of wrong type ignored"
                );
            }
            _ => tracing::debug!(target: targets::SWITCH, name, "unknown property"),
        }
    }

    /// Read a property by name.
    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        let value: PropertyValue = match name {
            "state" => self.state().into(),
            "checked" => self.checked().into(),
            "disabled" => self.disabled().into(),
            "elastic" => self.elastic().into(),
            "onLabel" => self.on_label().into(),
            "offLabel" => self.off_label().into(),
            "name" => self.name()?.into(),
            "initState" => self.init_state()?.into(),
            _ => return None,
        };
        Some(value)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach the switch to a host document.
    ///
    /// Attaching an attached switch is a no-op.
    pub fn attach(&mut self) {
        let _span = PerfSpan::new(span_names::LIFECYCLE);
        let first = self.lifecycle.is_first_attach();
        if !self.lifecycle.attach() {
            return;
        }

        if !self.host.has_attribute(aria::ROLE) {
            self.host
                .set_attribute(aria::ROLE, AccessibleRole::Switch.as_str());
        }
        if !self.host.has_attribute(aria::CHECKED) {
            let checked = self.shadow.input().is_checked();
            self.host.set_attribute(aria::CHECKED, aria_bool(checked));
        }

        self.listeners = Some(Listeners::SWITCH);
        self.reflect_state();
        self.flush_pending();

        if first {
            let init_on = self.init_state().is_some_and(|init| init == self.on_label());
            if init_on && !self.shadow.input().is_checked() {
                tracing::debug!(target: targets::SWITCH, "initial state on");
                self.click();
            }
        }
        tracing::debug!(target: targets::SWITCH, first, state = self.state(), "attached");
    }

    /// Detach the switch from its host document.
    ///
    /// Detaching a switch that is not attached is a no-op.
    pub fn detach(&mut self) {
        let _span = PerfSpan::new(span_names::LIFECYCLE);
        if !self.lifecycle.detach() {
            return;
        }
        self.listeners = None;
        self.blur();
        tracing::debug!(target: targets::SWITCH, "detached");
    }

    /// The lifecycle state.
    pub fn lifecycle(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    fn flush_pending(&mut self) {
        let pending = self.pending.take();
        if pending.is_empty() {
            return;
        }
        tracing::debug!(target: targets::SWITCH, count = pending.len(), "upgrading staged properties");

        if let Some(disabled) = pending.disabled {
            self.set_disabled(disabled);
        }
        if let Some(elastic) = pending.elastic {
            self.set_elastic(elastic);
        }
        if let Some(label) = pending.on_label {
            self.set_on_label(&label);
        }
        if let Some(label) = pending.off_label {
            self.set_off_label(&label);
        }
        if let Some(state) = pending.state {
            self.set_state(&state);
        }
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Deliver an input event. Returns `true` if the switch handled it.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        let Some(listeners) = self.listeners else {
            tracing::trace!(target: targets::SWITCH, ?event, "ignored while detached");
            return false;
        };
        match event {
            InputEvent::Click => self.click(),
            InputEvent::KeyDown(key) => {
                if !self.has_focus() {
                    return false;
                }
                (listeners.key_down)(self, key);
                key.is_activation_key()
            }
            InputEvent::KeyUp(key) => {
                if !self.has_focus() {
                    return false;
                }
                (listeners.key_up)(self, key);
                key.is_activation_key() && self.click()
            }
            InputEvent::Focus => self.focus(),
            InputEvent::Blur => {
                self.blur();
                true
            }
        }
    }

    /// Activate the switch as a user would.
    ///
    /// Returns `true` if the switch toggled. Activation is ignored while
    /// detached or disabled.
    pub fn click(&mut self) -> bool {
        let Some(listeners) = self.listeners else {
            tracing::trace!(target: targets::SWITCH, "activation ignored while detached");
            return false;
        };
        if !self.shadow.input_mut().click() {
            tracing::debug!(target: targets::SWITCH, "activation ignored while disabled");
            return false;
        }
        (listeners.input_change)(self);
        true
    }

    /// Give the switch keyboard focus. Refused while detached or disabled.
    pub fn focus(&mut self) -> bool {
        if self.listeners.is_none() || self.shadow.input().is_disabled() {
            return false;
        }
        self.host.focus();
        self.shadow.input_mut().focus()
    }

    /// Remove keyboard focus, releasing a held lever.
    pub fn blur(&mut self) {
        self.host.blur();
        self.shadow.input_mut().blur();
        self.release_lever();
    }

    /// Whether the switch has keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.host.has_focus()
    }

    fn on_input_change(&mut self) {
        self.commit_state_change();
    }

    fn on_key_down(&mut self, key: Key) {
        if key.is_activation_key() {
            self.shadow
                .lever_mut()
                .classes_mut()
                .add(classes::ACTIVE);
        }
    }

    fn on_key_up(&mut self, key: Key) {
        if key.is_activation_key() {
            self.release_lever();
        }
    }

    pub(crate) fn release_lever(&mut self) {
        self.shadow
            .lever_mut()
            .classes_mut()
            .remove(classes::ACTIVE);
    }

    // =========================================================================
    // State propagation
    // =========================================================================

    fn current_state(&self) -> &str {
        if self.shadow.input().is_checked() {
            self.shadow.on_text().text()
        } else {
            self.shadow.off_text().text()
        }
    }

    fn apply_checked(&mut self, checked: bool) {
        if self.shadow.input_mut().set_checked(checked) {
            self.commit_state_change();
        }
    }

    /// Propagate a flipped input: reflected state, then `aria-checked`,
    /// then the notification.
    fn commit_state_change(&mut self) {
        let state = self.current_state().to_string();
        let checked = self.shadow.input().is_checked();

        self.host.set_attribute(attributes::STATE, state.clone());
        self.host.set_attribute(aria::CHECKED, aria_bool(checked));

        tracing::debug!(target: targets::SWITCH, state = %state, checked, "state changed");
        self.changed.emit(ChangeEvent::new(state));
    }

    /// Write the `state` attribute after a label or lifecycle change.
    pub(crate) fn reflect_state(&mut self) {
        if !self.is_upgraded() {
            return;
        }
        let state = self.current_state().to_string();
        self.host.set_attribute(attributes::STATE, state);
    }

    fn set_flag_attribute(&mut self, name: &str, present: bool) {
        if present {
            self.set_attribute(name, "");
        } else {
            self.remove_attribute(name);
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Override one of the stylesheet's custom properties.
    pub fn set_style_variable(&mut self, name: &str, value: &str) -> Result<(), StyleError> {
        self.shadow.style_mut().set_variable(name, value)
    }

    /// Restore a custom property to its default.
    pub fn reset_style_variable(&mut self, name: &str) -> bool {
        self.shadow.style_mut().reset_variable(name)
    }

    /// Snapshot of the visual state.
    pub fn visual_state(&self) -> VisualState {
        VisualState {
            checked: self.shadow.input().is_checked(),
            disabled: self.shadow.input().is_disabled(),
            elastic: self
                .shadow
                .container()
                .classes()
                .contains(classes::ELASTIC),
            lever_pressed: self.shadow.lever().classes().contains(classes::ACTIVE),
            focused: self.has_focus(),
            direction: self.direction(),
            on_label: self.shadow.on_text().text().to_string(),
            off_label: self.shadow.off_text().text().to_string(),
        }
    }

    /// The shadow tree.
    pub fn shadow(&self) -> &ShadowTree {
        &self.shadow
    }
}

impl Default for ToggleSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToggleSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleSwitch")
            .field("state", &self.state())
            .field("lifecycle", &self.lifecycle.state())
            .field("disabled", &self.disabled())
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl CustomElement for ToggleSwitch {
    fn observed_attributes(&self) -> &'static [&'static str] {
        OBSERVED_ATTRIBUTES
    }

    fn host(&self) -> &ElementHost {
        &self.host
    }

    fn host_mut(&mut self) -> &mut ElementHost {
        &mut self.host
    }

    fn lifecycle_state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    fn connected(&mut self) {
        self.attach();
    }

    fn disconnected(&mut self) {
        self.detach();
    }

    fn attribute_changed(&mut self, change: &AttributeChange) {
        attributes::dispatch(self, change);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        // `state` is owned by the switch; assignments go through the setter.
        if name == attributes::STATE {
            self.set_state(value);
            return;
        }
        let change = self.host.set_attribute(name, value);
        if OBSERVED_ATTRIBUTES.contains(&name) {
            self.attribute_changed(&change);
        }
    }

    fn remove_attribute(&mut self, name: &str) {
        if name == attributes::STATE {
            tracing::debug!(target: targets::SWITCH, "state attribute is reflected, removal ignored");
            return;
        }
        let change = self.host.remove_attribute(name);
        if change.is_change() && OBSERVED_ATTRIBUTES.contains(&name) {
            self.attribute_changed(&change);
        }
    }
}

impl Accessible for ToggleSwitch {
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn accessible_name(&self) -> Option<String> {
        self.host
            .attribute(aria::LABEL)
            .map(str::to_string)
            .or_else(|| Some(self.state().to_string()))
    }

    fn accessible_value(&self) -> Option<String> {
        Some(self.state().to_string())
    }

    fn is_accessible_checked(&self) -> Option<bool> {
        Some(self.checked())
    }

    fn is_accessible_disabled(&self) -> bool {
        self.disabled()
    }

    fn is_accessible_focusable(&self) -> bool {
        self.lifecycle.state().is_attached() && !self.disabled()
    }

    #[cfg(feature = "accessibility")]
    fn accessible_actions(&self) -> Vec<accesskit::Action> {
        if self.is_accessible_focusable() {
            vec![accesskit::Action::Click, accesskit::Action::Focus]
        } else {
            Vec::new()
        }
    }
}
