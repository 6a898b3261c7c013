//! Collaborator doubles shared by the crate's tests.

use crate::engine::{Dispatch, Effect, Engine, Tempo};

use lumen_core::{ColorBuffer, PackedColor, Result};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// An engine double.
///
/// The front buffer is the stable engine-owned render buffer; the shared
/// frame is what snapshot copies read in threaded mode, standing in for a
/// real engine's copy-under-lock back buffer.
pub(crate) struct FakeEngine {
    threaded: AtomicBool,
    front: ColorBuffer,
    shared_frame: Mutex<ColorBuffer>,
    cycles: AtomicUsize,
    prev_count: AtomicUsize,
    next_count: AtomicUsize,
    dispatch: Mutex<Option<Arc<dyn Dispatch>>>,
}

impl FakeEngine {
    pub(crate) fn new(len: usize) -> Self {
        let mut front = ColorBuffer::new(len);
        for point in 0..len {
            front.set(point, PackedColor::from_rgb(point as u8, 0, 0));
        }
        Self {
            threaded: AtomicBool::new(false),
            front,
            shared_frame: Mutex::new(ColorBuffer::new(len)),
            cycles: AtomicUsize::new(0),
            prev_count: AtomicUsize::new(0),
            next_count: AtomicUsize::new(0),
            dispatch: Mutex::new(None),
        }
    }

    pub(crate) fn set_threaded(&self, on: bool) {
        self.threaded.store(on, Ordering::Relaxed);
    }

    /// Overwrites the frame served to snapshot copies.
    pub(crate) fn set_frame(&self, color_at: impl Fn(usize) -> PackedColor) {
        let mut frame = self.shared_frame.lock();
        for point in 0..frame.len() {
            frame.set(point, color_at(point));
        }
    }

    pub(crate) fn frame_snapshot(&self) -> ColorBuffer {
        self.shared_frame.lock().clone()
    }

    pub(crate) fn cycles(&self) -> usize {
        self.cycles.load(Ordering::Relaxed)
    }

    pub(crate) fn prev_count(&self) -> usize {
        self.prev_count.load(Ordering::Relaxed)
    }

    pub(crate) fn next_count(&self) -> usize {
        self.next_count.load(Ordering::Relaxed)
    }
}

impl Engine for FakeEngine {
    fn is_threaded(&self) -> bool {
        self.threaded.load(Ordering::Relaxed)
    }

    fn run_cycle(&self) {
        self.cycles.fetch_add(1, Ordering::Relaxed);
        let dispatch = self.dispatch.lock();
        if let Some(dispatch) = dispatch.as_ref() {
            dispatch.dispatch();
        }
    }

    fn render_buffer(&self) -> &ColorBuffer {
        &self.front
    }

    fn copy_buffer(&self, dst: &mut ColorBuffer) -> Result<()> {
        dst.copy_from(&self.shared_frame.lock())
    }

    fn go_prev(&self) {
        self.prev_count.fetch_add(1, Ordering::Relaxed);
    }

    fn go_next(&self) {
        self.next_count.fetch_add(1, Ordering::Relaxed);
    }

    fn frame_rate(&self) -> f32 {
        60.0
    }

    fn set_dispatch(&self, dispatch: Arc<dyn Dispatch>) {
        *self.dispatch.lock() = Some(dispatch);
    }
}

/// A tempo double recording taps and the last BPM set.
#[derive(Default)]
pub(crate) struct FakeTempo {
    taps: AtomicUsize,
    bpm: Mutex<f64>,
}

impl FakeTempo {
    pub(crate) fn with_bpm(bpm: f64) -> Self {
        Self {
            taps: AtomicUsize::new(0),
            bpm: Mutex::new(bpm),
        }
    }

    pub(crate) fn taps(&self) -> usize {
        self.taps.load(Ordering::Relaxed)
    }
}

impl Tempo for FakeTempo {
    fn tap(&self) {
        self.taps.fetch_add(1, Ordering::Relaxed);
    }

    fn bpm(&self) -> f64 {
        *self.bpm.lock()
    }

    fn set_bpm(&self, bpm: f64) {
        *self.bpm.lock() = bpm;
    }
}

/// An effect double tracking its armed state and trigger count.
#[derive(Default)]
pub(crate) struct FakeEffect {
    enabled: AtomicBool,
    triggers: AtomicUsize,
}

impl FakeEffect {
    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub(crate) fn triggers(&self) -> usize {
        self.triggers.load(Ordering::Relaxed)
    }
}

impl Effect for FakeEffect {
    fn enable(&self) {
        self.enabled.store(true, Ordering::Relaxed);
    }

    fn disable(&self) {
        self.enabled.store(false, Ordering::Relaxed);
    }

    fn trigger(&self) {
        self.triggers.fetch_add(1, Ordering::Relaxed);
    }
}
