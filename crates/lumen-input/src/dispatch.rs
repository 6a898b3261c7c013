//! Per-cycle input dispatch.
//!
//! The dispatcher decouples *when input physically arrived* from *when it
//! is safe to mutate control state*: producers push into the queue at any
//! time, and the engine invokes [`InputDispatch::dispatch`] exactly once
//! per cycle, on the single thread it reserves for that purpose. Handlers
//! therefore mutate shared control state without additional locking.

use crate::keyboard::KeyEvent;
use crate::queue::EventQueue;

use parking_lot::Mutex;
use std::sync::Arc;

/// A subscriber to dispatched key events.
///
/// Handlers run on the engine-cycle thread and must not block or push
/// back into the queue synchronously; doing so risks starving the cycle.
pub trait KeyHandler: Send {
    /// Called once for every drained event, in arrival order.
    fn on_key(&mut self, event: &KeyEvent);
}

impl<F> KeyHandler for F
where
    F: FnMut(&KeyEvent) + Send,
{
    fn on_key(&mut self, event: &KeyEvent) {
        self(event);
    }
}

/// Drains the event queue once per engine cycle and fans each event out
/// to registered handlers in registration order.
///
/// Every drained event is delivered to every handler before the next
/// event is delivered. The handler list is shared behind a mutex so the
/// dispatcher can live in an [`Arc`] alongside producer handles; the lock
/// is uncontended in practice because only the engine-cycle thread
/// dispatches.
///
/// # Examples
///
/// ```
/// use lumen_input::{InputDispatch, KeyCode, KeyEvent};
/// use std::sync::Arc;
///
/// let dispatch = Arc::new(InputDispatch::new());
/// dispatch.add_handler(|event: &KeyEvent| println!("saw {event}"));
///
/// dispatch.push(KeyEvent::press(KeyCode::Char('q')));
/// dispatch.dispatch();
/// ```
#[derive(Default)]
pub struct InputDispatch {
    queue: EventQueue,
    handlers: Mutex<Vec<Box<dyn KeyHandler>>>,
}

impl InputDispatch {
    /// Creates a dispatcher with an empty queue and no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: EventQueue::new(),
            handlers: Mutex::new(Vec::new()),
        }
    }

    /// Returns the underlying event queue.
    #[inline]
    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    /// Appends an event at the tail of the queue. Callable from any thread.
    pub fn push(&self, event: KeyEvent) {
        self.queue.push(event);
    }

    /// Registers a handler at the end of the registry.
    ///
    /// Handlers fire in registration order for each dispatched event.
    pub fn add_handler<H>(&self, handler: H)
    where
        H: KeyHandler + 'static,
    {
        self.handlers.lock().push(Box::new(handler));
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.lock().len()
    }

    /// Drains all pending events and delivers each one to every registered
    /// handler, in registration order, event by event.
    ///
    /// Invoked by the engine once per cycle, never by the host draw call
    /// directly.
    pub fn dispatch(&self) {
        let events = self.queue.drain_all();
        if events.is_empty() {
            return;
        }

        let mut handlers = self.handlers.lock();
        for event in &events {
            for handler in handlers.iter_mut() {
                handler.on_key(event);
            }
        }
    }

    /// Creates a cloneable producer handle for this dispatcher.
    #[must_use]
    pub fn sender(this: &Arc<Self>) -> InputSender {
        InputSender {
            dispatch: Arc::clone(this),
        }
    }
}

/// A cheap cloneable handle for pushing events from producer threads.
#[derive(Clone)]
pub struct InputSender {
    dispatch: Arc<InputDispatch>,
}

impl InputSender {
    /// Appends an event at the tail of the dispatcher's queue.
    pub fn send(&self, event: KeyEvent) {
        self.dispatch.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::{KeyCode, KeyEvent};
    use pretty_assertions::assert_eq;

    /// Log of (handler id, key char) pairs shared across handlers.
    type Log = Arc<Mutex<Vec<(u8, char)>>>;

    fn logging_handler(id: u8, log: &Log) -> impl FnMut(&KeyEvent) + Send {
        let log = Arc::clone(log);
        move |event: &KeyEvent| {
            if let Some(c) = event.character() {
                log.lock().push((id, c));
            }
        }
    }

    #[test]
    fn test_handlers_fire_in_registration_order_per_event() {
        let dispatch = InputDispatch::new();
        let log: Log = Arc::default();

        dispatch.add_handler(logging_handler(1, &log));
        dispatch.add_handler(logging_handler(2, &log));
        dispatch.add_handler(logging_handler(3, &log));

        dispatch.push(KeyEvent::press(KeyCode::Char('a')));
        dispatch.push(KeyEvent::press(KeyCode::Char('b')));
        dispatch.dispatch();

        // All handlers see event 'a' before any handler sees event 'b'.
        let entries = log.lock().clone();
        assert_eq!(
            entries,
            vec![
                (1, 'a'),
                (2, 'a'),
                (3, 'a'),
                (1, 'b'),
                (2, 'b'),
                (3, 'b'),
            ]
        );
    }

    #[test]
    fn test_dispatch_with_empty_queue_is_a_no_op() {
        let dispatch = InputDispatch::new();
        let log: Log = Arc::default();
        dispatch.add_handler(logging_handler(1, &log));

        dispatch.dispatch();
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_dispatch_consumes_the_queue() {
        let dispatch = InputDispatch::new();
        let log: Log = Arc::default();
        dispatch.add_handler(logging_handler(1, &log));

        dispatch.push(KeyEvent::press(KeyCode::Char('x')));
        dispatch.dispatch();
        dispatch.dispatch();

        assert_eq!(log.lock().len(), 1);
        assert!(dispatch.queue().is_empty());
    }

    #[test]
    fn test_handler_registered_mid_stream_sees_later_events_only() {
        let dispatch = InputDispatch::new();
        let log: Log = Arc::default();
        dispatch.add_handler(logging_handler(1, &log));

        dispatch.push(KeyEvent::press(KeyCode::Char('a')));
        dispatch.dispatch();

        dispatch.add_handler(logging_handler(2, &log));
        dispatch.push(KeyEvent::press(KeyCode::Char('b')));
        dispatch.dispatch();

        let entries = log.lock().clone();
        assert_eq!(entries, vec![(1, 'a'), (1, 'b'), (2, 'b')]);
    }

    #[test]
    fn test_sender_feeds_the_queue() {
        let dispatch = Arc::new(InputDispatch::new());
        let sender = InputDispatch::sender(&dispatch);

        let producer = {
            let sender = sender.clone();
            std::thread::spawn(move || {
                sender.send(KeyEvent::press(KeyCode::Char('z')));
            })
        };
        producer.join().unwrap();

        assert_eq!(dispatch.queue().len(), 1);
    }
}
