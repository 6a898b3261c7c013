//! Input handling for `lumen-harness`.
//!
//! Raw key events arrive from the host's input subsystem on an arbitrary
//! thread and at arbitrary times, but control state may only be mutated at
//! one well-defined point in the engine cycle. This crate provides the two
//! pieces that bridge that gap:
//!
//! - [`queue`]: an unbounded, thread-safe FIFO of pending [`KeyEvent`]s
//! - [`dispatch`]: a per-cycle dispatcher that drains the queue and fans
//!   each event out to registered handlers in registration order
//!
//! # Examples
//!
//! ```
//! use lumen_input::{InputDispatch, KeyCode, KeyEvent};
//! use std::sync::Arc;
//!
//! let dispatch = Arc::new(InputDispatch::new());
//! dispatch.add_handler(|event: &KeyEvent| {
//!     println!("key: {event}");
//! });
//!
//! // Producer side, any thread:
//! let sender = InputDispatch::sender(&dispatch);
//! sender.send(KeyEvent::press(KeyCode::Char('f')));
//!
//! // Consumer side, once per engine cycle:
//! dispatch.dispatch();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod dispatch;
pub mod keyboard;
pub mod queue;

pub use dispatch::{InputDispatch, InputSender, KeyHandler};
pub use keyboard::{KeyAction, KeyCode, KeyEvent, KeyModifiers};
pub use queue::{DrainedEvents, EventQueue};
