//! Engine-to-host synchronization for `lumen-harness`.
//!
//! This crate contains the harness proper:
//!
//! - [`engine`]: traits for the external collaborators (render engine,
//!   tempo estimator, effects) and the per-cycle dispatch hook
//! - [`harness`]: the frame-buffer bridge and draw cycle
//! - [`commands`]: the built-in key-command handler
//! - [`flags`]: harness-owned control flags
//! - [`timer`]: per-cycle frame timing
//!
//! The harness's job is narrow: once per host frame, either drive the
//! engine inline (non-threaded mode) or snapshot its buffer (threaded
//! mode), expose the result by reference, and hand queued input to the
//! engine's cycle at the one point where control mutation is safe.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod commands;
pub mod engine;
pub mod flags;
pub mod harness;
pub mod timer;

#[cfg(test)]
mod fixtures;

pub use commands::KeyCommands;
pub use engine::{Dispatch, Effect, Engine, Tempo};
pub use flags::ControlFlags;
pub use harness::{Harness, HarnessBuilder, HostDriver};
pub use timer::{FrameTimer, TimerStats};
