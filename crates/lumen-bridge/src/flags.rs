//! Harness-owned control flags.

use std::sync::atomic::{AtomicBool, Ordering};

/// Mutable control state owned by the harness instance.
///
/// The flags are written by the key-command handler on the engine-cycle
/// thread and read by the draw cycle on the host thread, which differ
/// when the engine is threaded; atomics keep the reads tear-free without
/// a lock. Both flags default to off.
#[derive(Debug, Default)]
pub struct ControlFlags {
    show_framerate: AtomicBool,
    keyboard_tempo: AtomicBool,
}

impl ControlFlags {
    /// Creates flags with both options off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the per-cycle framerate display is on.
    #[inline]
    pub fn show_framerate(&self) -> bool {
        self.show_framerate.load(Ordering::Relaxed)
    }

    /// Turns the per-cycle framerate display on or off.
    #[inline]
    pub fn set_show_framerate(&self, on: bool) {
        self.show_framerate.store(on, Ordering::Relaxed);
    }

    /// Returns true if keyboard tempo control is enabled.
    #[inline]
    pub fn keyboard_tempo(&self) -> bool {
        self.keyboard_tempo.load(Ordering::Relaxed)
    }

    /// Enables or disables keyboard tempo control.
    #[inline]
    pub fn set_keyboard_tempo(&self, on: bool) {
        self.keyboard_tempo.store(on, Ordering::Relaxed);
    }
}
