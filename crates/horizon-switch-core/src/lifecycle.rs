//! Element lifecycle state machine.
//!
//! An element is constructed once, then attached to and detached from a host
//! document any number of times:
//!
//! ```text
//! Constructed ──attach──▶ Attached ──detach──▶ Detached
//!                             ▲                    │
//!                             └───────attach───────┘
//! ```
//!
//! Transition methods return `false` when the transition does not apply,
//! which lets callers make their entry/exit handlers idempotent.

use std::fmt;

use crate::logging::targets;

/// The lifecycle state of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LifecycleState {
    /// Built, never attached.
    #[default]
    Constructed,
    /// Attached to a host document.
    Attached,
    /// Previously attached, currently detached.
    Detached,
}

impl LifecycleState {
    /// Whether the element is currently attached.
    pub fn is_attached(self) -> bool {
        matches!(self, Self::Attached)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Constructed => "constructed",
            Self::Attached => "attached",
            Self::Detached => "detached",
        };
        f.write_str(name)
    }
}

/// Tracks an element's lifecycle state and how often it has been attached.
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    state: LifecycleState,
    attach_count: u32,
}

impl Lifecycle {
    /// Create a lifecycle in the [`LifecycleState::Constructed`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Number of completed attach transitions.
    pub fn attach_count(&self) -> u32 {
        self.attach_count
    }

    /// Whether the next attach is the first one.
    pub fn is_first_attach(&self) -> bool {
        self.attach_count == 0
    }

    /// Transition to [`LifecycleState::Attached`].
    ///
    /// Returns `false` if already attached.
    pub fn attach(&mut self) -> bool {
        if self.state.is_attached() {
            tracing::trace!(target: targets::LIFECYCLE, "already attached");
            return false;
        }
        tracing::trace!(target: targets::LIFECYCLE, from = %self.state, "attach");
        self.state = LifecycleState::Attached;
        self.attach_count += 1;
        true
    }

    /// Transition to [`LifecycleState::Detached`].
    ///
    /// Returns `false` if not currently attached.
    pub fn detach(&mut self) -> bool {
        if !self.state.is_attached() {
            tracing::trace!(target: targets::LIFECYCLE, state = %self.state, "detach ignored");
            return false;
        }
        tracing::trace!(target: targets::LIFECYCLE, "detach");
        self.state = LifecycleState::Detached;
        true
    }
}
