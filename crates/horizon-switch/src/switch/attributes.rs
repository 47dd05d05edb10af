//! Attribute names and the attribute-change dispatch table.

use horizon_switch_core::AttributeChange;

use super::ToggleSwitch;
use crate::accessibility::aria;
use crate::logging::targets;
use crate::shadow::classes;

/// `state`: the current label, reflected by the switch.
pub const STATE: &str = "state";
/// `elastic`: presence flag enabling the stretch animation.
pub const ELASTIC: &str = "elastic";
/// `disabled`: presence flag rejecting user interaction.
pub const DISABLED: &str = "disabled";
/// `on-label`: text of the on position.
pub const ON_LABEL: &str = "on-label";
/// `off-label`: text of the off position.
pub const OFF_LABEL: &str = "off-label";
/// `init-state`: declarative initial position, read on the first attach.
pub const INIT_STATE: &str = "init-state";
/// `name`: passthrough form name.
pub const NAME: &str = "name";
/// `dir`: text direction of the host.
pub const DIR: &str = "dir";

/// Attributes whose mutations reach the dispatch table.
pub const OBSERVED_ATTRIBUTES: &[&str] = &[ELASTIC, DISABLED, ON_LABEL, OFF_LABEL];

type AttributeHandler = fn(&mut ToggleSwitch, Option<&str>);

const ATTRIBUTE_HANDLERS: &[(&str, AttributeHandler)] = &[
    (ELASTIC, elastic_changed),
    (DISABLED, disabled_changed),
    (ON_LABEL, on_label_changed),
    (OFF_LABEL, off_label_changed),
];

/// Apply the effect of an observed attribute mutation.
pub(super) fn dispatch(switch: &mut ToggleSwitch, change: &AttributeChange) {
    let Some((_, handler)) = ATTRIBUTE_HANDLERS
        .iter()
        .find(|(name, _)| *name == change.name)
    else {
        tracing::trace!(target: targets::ATTRIBUTES, name = %change.name, "no handler");
        return;
    };
    tracing::debug!(
        target: targets::ATTRIBUTES,
        name = %change.name,
        old = ?change.old_value,
        new = ?change.new_value,
        "attribute changed"
    );
    handler(switch, change.new_value.as_deref());
}

fn elastic_changed(switch: &mut ToggleSwitch, value: Option<&str>) {
    switch
        .shadow
        .container_mut()
        .classes_mut()
        .set(classes::ELASTIC, value.is_some());
}

fn disabled_changed(switch: &mut ToggleSwitch, value: Option<&str>) {
    let disabled = value.is_some();
    if disabled {
        switch.host.set_attribute(aria::DISABLED, "true");
    } else {
        switch.host.remove_attribute(aria::DISABLED);
    }

    let input = switch.shadow.input_mut();
    input.set_disabled(disabled);
    if disabled {
        input.blur();
        switch.host.blur();
        switch.release_lever();
    }
}

fn on_label_changed(switch: &mut ToggleSwitch, value: Option<&str>) {
    if let Some(text) = value.filter(|v| !v.is_empty()) {
        switch.shadow.on_text_mut().set_text(text);
        switch.reflect_state();
    }
}

fn off_label_changed(switch: &mut ToggleSwitch, value: Option<&str>) {
    if let Some(text) = value.filter(|v| !v.is_empty()) {
        switch.shadow.off_text_mut().set_text(text);
        switch.reflect_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_observed_attribute_has_a_handler() {
        for name in OBSERVED_ATTRIBUTES {
            assert!(ATTRIBUTE_HANDLERS.iter().any(|(n, _)| n == name), "{name}");
        }
        assert_eq!(OBSERVED_ATTRIBUTES.len(), ATTRIBUTE_HANDLERS.len());
        assert!(!OBSERVED_ATTRIBUTES.contains(&STATE));
    }
}
