//! Indexed event channel for Horizon Passage.
//!
//! This module provides a single-slot publish/subscribe mechanism for
//! position-tagged activation events. A widget that renders a list of
//! activatable things (tabs, option rows, buttons in a bar) reports
//! "item N was activated" through an [`IndexedChannel`]; the one listener
//! registered on the channel (typically the host screen) receives the
//! event synchronously.
//!
//! # Key Types
//!
//! - [`IndexedEvent<T>`] - The position-tagged event, with an optional payload
//! - [`IndexedChannel<T>`] - The channel itself, holding at most one listener
//!
//! # Single-slot registration
//!
//! Unlike a general multicast signal, an indexed channel holds exactly one
//! listener slot. [`register`](IndexedChannel::register) replaces whatever
//! listener was there before; the replaced listener never receives another
//! event. Emitting with no listener registered silently drops the event:
//! "nobody was interested" is an expected outcome, not an error.
//!
//! # Reentrancy
//!
//! Delivery is a direct synchronous call on the emitting thread. A listener
//! may emit on *another* channel freely. An emit issued on the *same* channel
//! from inside its own listener is queued and replayed after the in-flight
//! delivery returns, so the listener slot is never re-entered while a
//! delivery is still on the stack.
//!
//! # Example
//!
//! ```
//! use horizon_passage_core::IndexedChannel;
//!
//! // A channel whose events carry no payload
//! let clicks = IndexedChannel::<()>::new();
//!
//! clicks.register(|event| {
//!     println!("item {} activated", event.index);
//! });
//!
//! clicks.emit(2, None);
//! ```

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

/// A transient, position-tagged activation notification.
///
/// Events are not persisted anywhere: they exist only for the duration of the
/// synchronous delivery to the channel's listener.
///
/// # Related
///
/// - [`IndexedChannel::emit`] - Creates and delivers an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedEvent<T> {
    /// The position of the activated item within its emitting widget.
    pub index: usize,
    /// Optional event payload. Widgets that only care about position
    /// (tab bars, option lists) emit `None`.
    pub payload: Option<T>,
}

/// The listener slot type: invoked with a reference to the delivered event.
type Listener<T> = Arc<dyn Fn(&IndexedEvent<T>) + Send + Sync>;

/// A single-slot channel for [`IndexedEvent`]s.
///
/// The channel connects one emitting widget instance to at most one
/// interested receiver. Registration replaces; emission is synchronous and
/// same-thread; there is no error path and no return value.
///
/// # Type Parameter
///
/// - `T`: The payload type carried by events. Use `()` for channels whose
///   events are pure position notifications.
///
/// # Thread Safety
///
/// The whole navigation model runs on a single logical thread, but the
/// channel itself is `Send + Sync` so it can be shared behind an `Arc` the
/// same way the rest of the toolkit's state is.
pub struct IndexedChannel<T> {
    /// The single listener slot.
    listener: Mutex<Option<Listener<T>>>,
    /// Whether a delivery is currently on the stack.
    delivering: AtomicBool,
    /// Events emitted reentrantly during an in-flight delivery.
    pending: Mutex<VecDeque<IndexedEvent<T>>>,
}

impl<T> Default for IndexedChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IndexedChannel<T> {
    /// Create a new channel with an empty listener slot.
    pub fn new() -> Self {
        Self {
            listener: Mutex::new(None),
            delivering: AtomicBool::new(false),
            pending: Mutex::new(VecDeque::new()),
        }
    }

    /// Register the channel's listener, replacing any prior one.
    ///
    /// The replaced listener stops receiving events immediately. A listener
    /// registered from inside an in-flight delivery takes effect for the
    /// next delivered event (including queued reentrant ones).
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_passage_core::IndexedChannel;
    ///
    /// let channel = IndexedChannel::<String>::new();
    /// channel.register(|event| {
    ///     println!("{}: {:?}", event.index, event.payload);
    /// });
    /// ```
    pub fn register<F>(&self, listener: F)
    where
        F: Fn(&IndexedEvent<T>) + Send + Sync + 'static,
    {
        *self.listener.lock() = Some(Arc::new(listener));
    }

    /// Clear the listener slot.
    ///
    /// Returns `true` if a listener was registered, `false` otherwise.
    pub fn unregister(&self) -> bool {
        self.listener.lock().take().is_some()
    }

    /// Check whether a listener is currently registered.
    pub fn has_listener(&self) -> bool {
        self.listener.lock().is_some()
    }

    /// Emit an event, synchronously invoking the registered listener.
    ///
    /// With no listener registered the event is silently dropped. An emit
    /// issued from inside this channel's own listener is queued and replayed
    /// after the in-flight delivery returns, in emission order.
    #[tracing::instrument(skip_all, target = "horizon_passage_core::channel", level = "trace")]
    pub fn emit(&self, index: usize, payload: Option<T>) {
        let event = IndexedEvent { index, payload };

        if self.delivering.swap(true, Ordering::SeqCst) {
            // Reentrant emit: the listener that is currently running caused
            // this one. Replay it once the outer delivery unwinds.
            tracing::trace!(
                target: "horizon_passage_core::channel",
                index,
                "reentrant emit queued"
            );
            self.pending.lock().push_back(event);
            return;
        }

        self.deliver(event);

        // Drain anything the listener emitted while it was running.
        loop {
            let next = self.pending.lock().pop_front();
            match next {
                Some(queued) => self.deliver(queued),
                None => break,
            }
        }

        self.delivering.store(false, Ordering::SeqCst);
    }

    /// Invoke the current listener with a single event.
    fn deliver(&self, event: IndexedEvent<T>) {
        // Clone the slot out so the listener can register/unregister without
        // deadlocking against the slot lock.
        let listener = self.listener.lock().clone();
        match listener {
            Some(listener) => listener(&event),
            None => {
                tracing::trace!(
                    target: "horizon_passage_core::channel",
                    index = event.index,
                    "no listener registered, event dropped"
                );
            }
        }
    }
}

// An indexed channel is shareable whenever its payload is.
static_assertions::assert_impl_all!(IndexedChannel<()>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_emit() {
        let channel = IndexedChannel::<()>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        channel.register(move |event| {
            received_clone.lock().push(event.index);
        });

        channel.emit(0, None);
        channel.emit(2, None);

        assert_eq!(*received.lock(), vec![0, 2]);
    }

    #[test]
    fn test_emit_with_payload() {
        let channel = IndexedChannel::<String>::new();
        let received = Arc::new(Mutex::new(None));

        let received_clone = received.clone();
        channel.register(move |event| {
            *received_clone.lock() = Some((event.index, event.payload.clone()));
        });

        channel.emit(1, Some("server-a".to_string()));

        let value = received.lock().clone();
        assert_eq!(value, Some((1, Some("server-a".to_string()))));
    }

    #[test]
    fn test_no_listener_is_silent() {
        let channel = IndexedChannel::<()>::new();
        // Nothing registered: emitting must be a no-op, not a panic.
        channel.emit(0, None);
        assert!(!channel.has_listener());
    }

    #[test]
    fn test_registration_replaces() {
        let channel = IndexedChannel::<()>::new();
        let first = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::new(Mutex::new(Vec::new()));

        let first_clone = first.clone();
        channel.register(move |event| {
            first_clone.lock().push(event.index);
        });
        channel.emit(0, None);

        let second_clone = second.clone();
        channel.register(move |event| {
            second_clone.lock().push(event.index);
        });
        channel.emit(1, None);
        channel.emit(2, None);

        // The replaced listener saw only the event emitted before
        // replacement.
        assert_eq!(*first.lock(), vec![0]);
        assert_eq!(*second.lock(), vec![1, 2]);
    }

    #[test]
    fn test_unregister() {
        let channel = IndexedChannel::<()>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        channel.register(move |event| {
            received_clone.lock().push(event.index);
        });

        channel.emit(0, None);
        assert!(channel.unregister());
        assert!(!channel.unregister());
        channel.emit(1, None);

        assert_eq!(*received.lock(), vec![0]);
    }

    #[test]
    fn test_reentrant_emit_is_replayed_in_order() {
        let channel = Arc::new(IndexedChannel::<()>::new());
        let received = Arc::new(Mutex::new(Vec::new()));

        let channel_clone = channel.clone();
        let received_clone = received.clone();
        channel.register(move |event| {
            received_clone.lock().push(event.index);
            // First delivery triggers two more on the same channel. They
            // must not be delivered recursively while this call is on the
            // stack.
            if event.index == 0 {
                channel_clone.emit(1, None);
                channel_clone.emit(2, None);
                assert_eq!(*received_clone.lock(), vec![0]);
            }
        });

        channel.emit(0, None);

        assert_eq!(*received.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_listener_replaced_during_delivery_gets_queued_events() {
        let channel = Arc::new(IndexedChannel::<()>::new());
        let outer = Arc::new(Mutex::new(Vec::new()));
        let inner = Arc::new(Mutex::new(Vec::new()));

        let channel_clone = channel.clone();
        let outer_clone = outer.clone();
        let inner_clone = inner.clone();
        channel.register(move |event| {
            outer_clone.lock().push(event.index);
            // Replace the listener and queue a reentrant event: the new
            // listener must receive the replayed event.
            let inner_clone = inner_clone.clone();
            channel_clone.register(move |event| {
                inner_clone.lock().push(event.index);
            });
            channel_clone.emit(9, None);
        });

        channel.emit(0, None);

        assert_eq!(*outer.lock(), vec![0]);
        assert_eq!(*inner.lock(), vec![9]);
    }

    #[test]
    fn test_emit_after_delivery_completes_is_direct_again() {
        let channel = Arc::new(IndexedChannel::<()>::new());
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        channel.register(move |event| {
            received_clone.lock().push(event.index);
        });

        channel.emit(0, None);
        channel.emit(1, None);

        assert_eq!(*received.lock(), vec![0, 1]);
    }
}
