//! Lifecycle, reflection and notification behavior of the switch element.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use horizon_switch::prelude::*;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Record every change notification's state.
fn record_changes(switch: &ToggleSwitch) -> Arc<Mutex<Vec<String>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();
    switch.changed.connect(move |event| {
        assert!(event.bubbles);
        assert!(!event.cancelable);
        events_clone.lock().push(event.state.clone());
    });
    events
}

fn labelled(on: &str, off: &str) -> ToggleSwitch {
    let mut switch = ToggleSwitch::with_attributes([("on-label", on), ("off-label", off)]);
    switch.attach();
    switch
}

#[test]
fn state_is_always_a_label() {
    init_tracing();
    let mut switch = labelled("Yes", "No");
    let labels = |s: &ToggleSwitch| [s.on_label().to_string(), s.off_label().to_string()];

    switch.click();
    assert!(labels(&switch).contains(&switch.state().to_string()));

    switch.set_state("sometimes");
    assert!(labels(&switch).contains(&switch.state().to_string()));

    switch.set_attribute("on-label", "Oui");
    assert_eq!(switch.state(), "Oui");

    switch.set_attribute("off-label", "");
    switch.set_disabled(true);
    switch.click();
    switch.detach();
    switch.set_on_label("Ja");
    switch.attach();
    switch.set_state("No");
    assert_eq!(switch.state(), "No");
    assert_eq!(switch.host().attribute("state"), Some("No"));
    assert!(labels(&switch).contains(&switch.state().to_string()));
}

#[test]
fn setting_current_state_does_not_notify() {
    init_tracing();
    let mut switch = labelled("Yes", "No");
    let events = record_changes(&switch);

    switch.set_state("No");
    switch.set_property("state", "No");
    assert!(events.lock().is_empty());

    switch.set_state("Yes");
    switch.set_state("Yes");
    assert_eq!(*events.lock(), vec!["Yes".to_string()]);
}

#[test]
fn activation_while_disabled_is_ignored() {
    init_tracing();
    let mut switch = labelled("Yes", "No");
    switch.set_attribute("disabled", "");
    let events = record_changes(&switch);

    assert!(!switch.click());
    assert!(!switch.handle_event(InputEvent::Click));
    assert!(!switch.handle_event(InputEvent::Focus));
    assert!(!switch.handle_event(InputEvent::KeyUp(Key::Space)));

    assert_eq!(switch.state(), "No");
    assert_eq!(switch.host().attribute("aria-checked"), Some("false"));
    assert!(events.lock().is_empty());
}

#[test]
fn disabled_reflects_aria_and_drops_focus() {
    init_tracing();
    let mut switch = labelled("Yes", "No");
    assert!(switch.focus());
    assert!(switch.has_focus());

    switch.set_disabled(true);
    assert!(switch.disabled());
    assert_eq!(switch.host().attribute("aria-disabled"), Some("true"));
    assert!(switch.host().has_attribute("disabled"));
    assert!(!switch.has_focus());
    assert!(switch.shadow().input().is_disabled());

    switch.set_disabled(false);
    assert!(!switch.disabled());
    assert!(!switch.host().has_attribute("aria-disabled"));
    assert!(!switch.host().has_attribute("disabled"));
    assert!(switch.focus());
}

#[test]
fn init_state_on_label_starts_checked() {
    init_tracing();
    let mut switch = ToggleSwitch::with_attributes([
        ("on-label", "Yes"),
        ("off-label", "No"),
        ("init-state", "Yes"),
    ]);
    let events = record_changes(&switch);
    assert_eq!(switch.state(), "No");

    switch.attach();
    assert_eq!(switch.state(), "Yes");
    assert!(switch.checked());
    assert_eq!(switch.host().attribute("aria-checked"), Some("true"));
    assert_eq!(*events.lock(), vec!["Yes".to_string()]);

    // The initial state only applies on the first attach.
    switch.set_state("No");
    switch.detach();
    switch.attach();
    assert_eq!(switch.state(), "No");
    assert_eq!(events.lock().len(), 2);
}

#[test]
fn init_state_off_label_stays_unchecked() {
    init_tracing();
    let mut switch = ToggleSwitch::with_attributes([("init-state", "off")]);
    let events = record_changes(&switch);
    switch.attach();

    assert!(!switch.checked());
    assert!(events.lock().is_empty());
}

#[test]
fn init_state_is_ignored_while_disabled() {
    init_tracing();
    let mut switch = ToggleSwitch::with_attributes([
        ("on-label", "Yes"),
        ("off-label", "No"),
        ("init-state", "Yes"),
        ("disabled", ""),
    ]);
    let events = record_changes(&switch);
    switch.attach();

    assert_eq!(switch.state(), "No");
    assert!(!switch.checked());
    assert_eq!(switch.host().attribute("aria-checked"), Some("false"));
    assert!(events.lock().is_empty());

    let mut staged = ToggleSwitch::with_attributes([("init-state", "on")]);
    staged.set_disabled(true);
    staged.attach();
    assert_eq!(staged.state(), "off");
}

#[test]
fn custom_labels_click_cycle() {
    init_tracing();
    let mut switch = labelled("Yes", "No");
    let events = record_changes(&switch);
    assert_eq!(switch.state(), "No");
    assert_eq!(switch.host().attribute("state"), Some("No"));

    assert!(switch.click());
    assert_eq!(switch.state(), "Yes");
    assert_eq!(switch.host().attribute("state"), Some("Yes"));
    assert_eq!(switch.host().attribute("aria-checked"), Some("true"));
    assert_eq!(*events.lock(), vec!["Yes".to_string()]);

    assert!(switch.click());
    assert_eq!(switch.state(), "No");
    assert_eq!(switch.host().attribute("aria-checked"), Some("false"));
    assert_eq!(events.lock().len(), 2);
}

#[test]
fn elastic_attribute_toggles_class() {
    init_tracing();
    let mut switch = labelled("on", "off");
    let container = |s: &ToggleSwitch| s.shadow().container().classes().contains("switch--elastic");

    switch.set_attribute("elastic", "");
    assert!(container(&switch));
    assert!(switch.elastic());

    switch.remove_attribute("elastic");
    assert!(!container(&switch));
    assert!(!switch.elastic());

    switch.set_elastic(true);
    assert!(container(&switch));
    assert_eq!(switch.host().attribute("elastic"), Some(""));
}

#[test]
fn reattach_keeps_single_notification() {
    init_tracing();
    let mut switch = labelled("Yes", "No");
    let count = Arc::new(AtomicU32::new(0));
    let count_clone = count.clone();
    switch.changed.connect(move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });

    switch.detach();
    assert!(!switch.click());
    assert_eq!(count.load(Ordering::SeqCst), 0);

    switch.attach();
    switch.attach();
    assert_eq!(switch.lifecycle(), LifecycleState::Attached);

    assert!(switch.click());
    assert_eq!(switch.state(), "Yes");
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn registered_element_round_trip() {
    init_tracing();
    horizon_switch::define().ok();
    assert!(registry::is_defined(horizon_switch::TAG_NAME));
    assert!(matches!(
        horizon_switch::define(),
        Err(horizon_switch::CoreError::Registry(
            horizon_switch::RegistryError::DuplicateDefinition { .. }
        ))
    ));

    let mut element = registry::create(horizon_switch::TAG_NAME).unwrap();
    element.set_attribute("elastic", "");
    element.connected();
    assert_eq!(element.lifecycle_state(), LifecycleState::Attached);
    assert_eq!(element.host().attribute("role"), Some("switch"));

    let switch = element_cast_mut::<ToggleSwitch>(&mut *element).unwrap();
    assert!(switch.elastic());
    switch.set_state("on");
    assert!(switch.checked());

    element.disconnected();
    assert_eq!(element.lifecycle_state(), LifecycleState::Detached);
}
