//! Change notification through signals and slots.
//!
//! An element owns one [`Signal`] per notification it publishes. Listeners
//! register closures ("slots") with [`Signal::connect`]; [`Signal::emit`]
//! runs every slot on the calling thread and returns once they are done, so
//! a notification is always observed before the operation that caused it
//! returns to its caller.
//!
//! ```
//! use horizon_switch_core::Signal;
//!
//! let state_changed = Signal::<String>::new();
//! let id = state_changed.connect(|state| println!("now {state}"));
//!
//! state_changed.emit("on".to_string());
//! state_changed.disconnect(id);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Handle to one slot connected to a [`Signal`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A notification channel with any number of connected slots.
///
/// `Args` is the payload handed to every slot by reference.
///
/// Slots are invoked in connection order. The slot table is copied before
/// invocation, so a slot may connect, disconnect or emit on the same signal;
/// slots connected during an emission first run on the next one.
pub struct Signal<Args> {
    slots: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// A signal with nothing connected.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect `slot`, returning the handle that disconnects it.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.slots.lock().insert(Arc::new(slot));
        tracing::trace!(target: targets::SIGNAL, ?id, "slot connected");
        id
    }

    /// Disconnect a slot. Returns `false` if `id` was not connected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Run every connected slot with `args`.
    #[tracing::instrument(skip_all, target = "horizon_switch_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        let snapshot: Vec<Slot<Args>> = self.slots.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, slots = snapshot.len(), "emit");
        for slot in &snapshot {
            slot(&args);
        }
    }

    /// Connect `slot` for as long as the returned guard lives.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use horizon_switch_core::Signal;
    ///
    /// let toggled = Signal::<bool>::new();
    /// let seen = Arc::new(AtomicUsize::new(0));
    ///
    /// let seen_in_slot = seen.clone();
    /// let guard = toggled.connect_scoped(move |_| {
    ///     seen_in_slot.fetch_add(1, Ordering::SeqCst);
    /// });
    /// toggled.emit(true);
    /// drop(guard);
    /// toggled.emit(false);
    ///
    /// assert_eq!(seen.load(Ordering::SeqCst), 1);
    /// ```
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            id: self.connect(slot),
            signal: self,
        }
    }
}

/// Disconnects its slot when dropped. Borrows the signal, so it cannot
/// outlive it.
pub struct ConnectionGuard<'a, Args: 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: 'static> ConnectionGuard<'_, Args> {
    /// Handle of the guarded slot.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::Key;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn recorder(signal: &Signal<&'static str>) -> (ConnectionId, Arc<Mutex<Vec<&'static str>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let id = signal.connect(move |state| sink.lock().push(*state));
        (id, log)
    }

    #[test]
    fn test_slots_run_in_connection_order() {
        let signal = Signal::<&'static str>::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second"] {
            let order = order.clone();
            signal.connect(move |state| order.lock().push(format!("{tag}:{state}")));
        }

        signal.emit("on");
        assert_eq!(*order.lock(), vec!["first:on", "second:on"]);
    }

    #[test]
    fn test_disconnected_slot_is_skipped() {
        let signal = Signal::<&'static str>::new();
        let (id, log) = recorder(&signal);

        signal.emit("on");
        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        signal.emit("off");

        assert_eq!(*log.lock(), vec!["on"]);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_guard_scopes_connection() {
        let signal = Signal::<&'static str>::new();
        let hits = Arc::new(AtomicU32::new(0));
        {
            let hits = hits.clone();
            let guard = signal.connect_scoped(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            });
            assert_eq!(signal.connection_count(), 1);
            assert!(!guard.id().is_null());
            signal.emit("on");
        }

        signal.emit("off");
        assert_eq!(signal.connection_count(), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_slot_may_disconnect_itself_during_emit() {
        let signal = Arc::new(Signal::<&'static str>::new());
        let (_, log) = recorder(&signal);

        let own_id = Arc::new(Mutex::new(None::<ConnectionId>));
        let weak = Arc::downgrade(&signal);
        let own_id_in_slot = own_id.clone();
        let id = signal.connect(move |_| {
            if let (Some(signal), Some(id)) = (weak.upgrade(), *own_id_in_slot.lock()) {
                signal.disconnect(id);
            }
        });
        *own_id.lock() = Some(id);

        signal.emit("on");
        signal.emit("off");
        assert_eq!(*log.lock(), vec!["on", "off"]);
        assert_eq!(signal.connection_count(), 1);
    }

    #[test]
    fn test_slot_may_emit_reentrantly() {
        let signal = Arc::new(Signal::<u32>::new());
        let depths = Arc::new(Mutex::new(Vec::new()));

        let weak = Arc::downgrade(&signal);
        let sink = depths.clone();
        signal.connect(move |&depth| {
            sink.lock().push(depth);
            if depth == 0 {
                if let Some(signal) = weak.upgrade() {
                    signal.emit(1);
                }
            }
        });

        signal.emit(0);
        assert_eq!(*depths.lock(), vec![0, 1]);
    }
}
