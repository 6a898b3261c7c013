//! Unbounded, thread-safe FIFO of pending key events.
//!
//! The queue is the only structure in the harness touched by more than one
//! thread: any number of producers append from the host's input-delivery
//! context while exactly one consumer drains once per engine cycle.

use crate::keyboard::KeyEvent;

use parking_lot::Mutex;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Events removed by one [`EventQueue::drain_all`] call, in arrival order.
///
/// Per-cycle batches are almost always a handful of key events, so the
/// batch stays inline rather than allocating.
pub type DrainedEvents = SmallVec<[KeyEvent; 8]>;

/// An unbounded, ordered, thread-safe container of [`KeyEvent`]s.
///
/// # Ordering
///
/// Delivery order equals arrival order. Each producer's own events keep
/// their relative order; interleaving between concurrent producers is
/// whatever order their pushes won the lock in. Every event is drained
/// exactly once.
///
/// # Examples
///
/// ```
/// use lumen_input::{EventQueue, KeyCode, KeyEvent};
///
/// let queue = EventQueue::new();
/// queue.push(KeyEvent::press(KeyCode::Char('a')));
/// queue.push(KeyEvent::release(KeyCode::Char('a')));
///
/// let events = queue.drain_all();
/// assert_eq!(events.len(), 2);
/// assert!(queue.drain_all().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Mutex<VecDeque<KeyEvent>>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Mutex::new(VecDeque::new()),
        }
    }

    /// Appends an event at the tail of the queue.
    ///
    /// Callable from any thread; never blocks beyond the queue's own
    /// append lock and never fails.
    pub fn push(&self, event: KeyEvent) {
        self.events.lock().push_back(event);
    }

    /// Atomically removes and returns all queued events in arrival order.
    ///
    /// Intended for exactly one consumer context per cycle. Returns an
    /// empty batch if nothing is pending; a second drain with no
    /// intervening push is always empty.
    pub fn drain_all(&self) -> DrainedEvents {
        let mut events = self.events.lock();
        events.drain(..).collect()
    }

    /// Returns the number of pending events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns true if no events are pending.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}
