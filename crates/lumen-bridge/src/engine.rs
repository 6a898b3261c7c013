//! Collaborator traits for the render engine, tempo and effects.
//!
//! The engine, tempo estimator and effects are external collaborators:
//! the harness controls them but knows nothing about their internals.
//! All methods take `&self` because the engine may invoke the dispatch
//! hook from its own thread while the host thread calls control methods;
//! implementations manage their own interior synchronization.

use lumen_core::{ColorBuffer, Result};
use lumen_input::InputDispatch;

use std::sync::Arc;

/// Per-cycle dispatch hook registered with the engine.
///
/// The engine invokes this exactly once per computation cycle, on the
/// single thread it reserves for control mutation. That fixed point is
/// what lets handlers mutate control state without locking.
pub trait Dispatch: Send + Sync {
    /// Called by the engine once per cycle.
    fn dispatch(&self);
}

impl Dispatch for InputDispatch {
    fn dispatch(&self) {
        InputDispatch::dispatch(self);
    }
}

/// The rendering/compute engine.
///
/// One computation cycle produces one color buffer snapshot. The engine
/// is either *non-threaded* (the harness drives cycles synchronously via
/// [`run_cycle`](Engine::run_cycle)) or *threaded* (the engine runs
/// continuously on its own thread and the harness takes snapshot copies).
/// The threading state may change between cycles; the harness re-reads
/// it every cycle.
///
/// # Buffer contract
///
/// [`render_buffer`](Engine::render_buffer) must return a reference that
/// is stable for the duration of the borrow; an engine that renders
/// concurrently must double-buffer internally and serve snapshot reads
/// through [`copy_buffer`](Engine::copy_buffer), which is required to be
/// torn-read-free with respect to in-progress writes.
pub trait Engine: Send + Sync {
    /// Returns true if the engine is currently running on its own thread.
    fn is_threaded(&self) -> bool;

    /// Drives one full synchronous computation cycle.
    ///
    /// Must invoke the registered dispatch hook exactly once during the
    /// cycle. Only called when [`is_threaded`](Engine::is_threaded) is
    /// false; a threaded engine runs its own cycles.
    fn run_cycle(&self);

    /// Returns the engine-owned render buffer.
    fn render_buffer(&self) -> &ColorBuffer;

    /// Copies a consistent snapshot of the current frame into `dst`.
    ///
    /// Safe to call while the engine is rendering on its own thread;
    /// readers never observe a torn frame. Fails if `dst` was sized
    /// against a different output model.
    fn copy_buffer(&self, dst: &mut ColorBuffer) -> Result<()>;

    /// Retreats the engine's active cue.
    fn go_prev(&self);

    /// Advances the engine's active cue.
    fn go_next(&self);

    /// Returns the engine's measured cycle rate in frames per second.
    fn frame_rate(&self) -> f32;

    /// Registers the per-cycle dispatch hook.
    ///
    /// Called once at harness construction, before any cycle runs.
    fn set_dispatch(&self, dispatch: Arc<dyn Dispatch>);
}

/// A controllable tempo estimator.
pub trait Tempo: Send + Sync {
    /// Registers one tap of the tempo.
    fn tap(&self);

    /// Returns the current tempo in beats per minute.
    fn bpm(&self) -> f64;

    /// Sets the tempo in beats per minute.
    ///
    /// No clamping is applied here; bounds, if any, are the tempo
    /// component's concern.
    fn set_bpm(&self, bpm: f64);
}

/// A controllable visual effect.
pub trait Effect: Send + Sync {
    /// Arms the effect.
    fn enable(&self);

    /// Disarms the effect.
    fn disable(&self);

    /// Fires the effect once.
    fn trigger(&self);
}
