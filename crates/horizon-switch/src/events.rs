//! Input and notification events for the switch element.
//!
//! Hosts translate their platform input into [`InputEvent`]s and feed them to
//! [`ToggleSwitch::handle_event`](crate::ToggleSwitch::handle_event). The
//! switch reports completed toggles through [`ChangeEvent`].

/// A keyboard key, reduced to what the switch distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// The space bar, the switch's activation key.
    Space,
    /// Enter / Return.
    Enter,
    /// Tab.
    Tab,
    /// Escape.
    Escape,
    /// A letter or digit key, as its legacy key code character.
    Character(char),
    /// Any other key, identified by its legacy key code.
    Other(u32),
}

impl Key {
    /// Map a legacy DOM `keyCode` to a key.
    pub fn from_key_code(code: u32) -> Self {
        match code {
            32 => Self::Space,
            13 => Self::Enter,
            9 => Self::Tab,
            27 => Self::Escape,
            other => char::from_u32(other)
                .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
                .map(Self::Character)
                .unwrap_or(Self::Other(other)),
        }
    }

    /// Whether this key activates the switch.
    pub fn is_activation_key(self) -> bool {
        matches!(self, Self::Space)
    }
}

/// Input delivered to the switch by its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A pointer click on the switch.
    Click,
    /// A key was pressed while the switch had focus.
    KeyDown(Key),
    /// A key was released while the switch had focus.
    KeyUp(Key),
    /// The host moved focus to the switch.
    Focus,
    /// The host moved focus away from the switch.
    Blur,
}

/// Notification emitted after the switch changes position.
///
/// The event bubbles out of the element and has no default action, so it
/// cannot be canceled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// The new state: the on-label or the off-label.
    pub state: String,
    /// Always `true`.
    pub bubbles: bool,
    /// Always `false`.
    pub cancelable: bool,
}

impl ChangeEvent {
    /// The event type name.
    pub const TYPE: &'static str = "change";

    /// Create a change event carrying `state`.
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            bubbles: true,
            cancelable: false,
        }
    }
}
