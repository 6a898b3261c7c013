//! The synchronization harness.
//!
//! [`Harness`] bridges a possibly-threaded render engine to a
//! single-threaded host draw loop. Once per host frame, [`Harness::draw`]
//! decides whether to drive the engine inline or to snapshot an
//! already-running engine thread, and [`Harness::colors`] exposes the
//! resulting buffer to the host by reference.

use crate::commands::KeyCommands;
use crate::engine::{Dispatch, Effect, Engine, Tempo};
use crate::flags::ControlFlags;
use crate::timer::{FrameTimer, TimerStats};

use lumen_core::{ColorBuffer, Result};
use lumen_input::{InputDispatch, InputSender, KeyEvent, KeyHandler};

use std::sync::Arc;
use std::time::Instant;

/// Selects which of the two pre-allocated buffers is current.
///
/// An explicit selector instead of reference reassignment: ownership of
/// both buffers never moves, only the selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CurrentBuffer {
    /// The engine-owned render buffer (non-threaded mode; no concurrent
    /// writer, so the buffer is shared rather than copied).
    Engine,
    /// The harness-owned scratch buffer holding the latest snapshot copy
    /// (threaded mode).
    Scratch,
}

/// Host-framework lifecycle surface.
///
/// Adapters for a concrete host framework live outside this crate and
/// forward their callbacks here, keeping the core free of any host
/// dependency. [`Harness`] implements this trait directly.
pub trait HostDriver {
    /// Called once per host frame.
    fn on_frame(&mut self) -> Result<()>;

    /// Called from the host's input-delivery context, at arbitrary times.
    fn on_input(&mut self, event: KeyEvent);

    /// Called once when the host tears down.
    fn on_shutdown(&mut self);
}

/// Bridges the render engine to the host draw loop.
///
/// # Draw cycle
///
/// Each [`draw`](Harness::draw) re-reads the engine's threading state:
///
/// - **Non-threaded**: the harness drives one engine cycle synchronously
///   and exposes the engine's own render buffer. The engine invokes the
///   input dispatch hook during that cycle.
/// - **Threaded**: the engine is running itself; the harness requests a
///   torn-read-free snapshot into its scratch buffer and exposes that.
///   The engine invokes the dispatch hook from its own cycle thread.
///
/// The snapshot copy completes before `draw` returns, so the host's draw
/// call is the synchronization barrier: a subsequent
/// [`colors`](Harness::colors) read never observes a partial frame.
///
/// # Examples
///
/// ```no_run
/// use lumen_bridge::Harness;
/// use std::sync::Arc;
///
/// # fn engine() -> Arc<dyn lumen_bridge::Engine> { unimplemented!() }
/// # fn main() -> lumen_core::Result<()> {
/// let mut harness = Harness::builder(engine()).keyboard_tempo(true).build();
///
/// // Host loop, once per frame:
/// harness.draw()?;
/// let colors = harness.colors();
/// # Ok(())
/// # }
/// ```
pub struct Harness {
    engine: Arc<dyn Engine>,
    dispatch: Arc<InputDispatch>,
    flags: Arc<ControlFlags>,
    flash: Option<Arc<dyn Effect>>,
    scratch: ColorBuffer,
    current: CurrentBuffer,
    timer: FrameTimer,
}

impl Harness {
    /// Starts building a harness around `engine`.
    #[must_use]
    pub fn builder(engine: Arc<dyn Engine>) -> HarnessBuilder {
        HarnessBuilder::new(engine)
    }

    /// Creates a harness with no tempo or effect collaborators.
    #[must_use]
    pub fn new(engine: Arc<dyn Engine>) -> Self {
        HarnessBuilder::new(engine).build()
    }

    /// Runs one draw cycle, updating the exposed buffer and timer stats.
    ///
    /// Must be called from the host's single draw thread, once per frame.
    /// A snapshot-copy failure is an invariant violation and fatal to the
    /// cycle; the error is returned untouched for the host to abort on.
    pub fn draw(&mut self) -> Result<()> {
        let draw_start = Instant::now();

        // Re-read threading state every cycle; a stale decision would
        // read a buffer no longer being written.
        let threaded = self.engine.is_threaded();

        let engine_start = Instant::now();
        if threaded {
            // The engine is running itself; copy its current frame into
            // our scratch buffer in a thread-safe manner.
            self.engine.copy_buffer(&mut self.scratch)?;
            self.current = CurrentBuffer::Scratch;
        } else {
            // The engine is not threaded: run it ourselves and share its
            // buffer, as there is no thread contention.
            self.engine.run_cycle();
            self.current = CurrentBuffer::Engine;
        }
        let engine_time = engine_start.elapsed();

        self.timer.tick();
        if self.flags.show_framerate() {
            if threaded {
                tracing::info!(
                    engine_fps = self.engine.frame_rate(),
                    render_fps = self.timer.frame_rate(),
                    "framerate"
                );
            } else {
                tracing::info!(render_fps = self.timer.frame_rate(), "framerate");
            }
        }

        self.timer.record(engine_time, draw_start.elapsed());
        Ok(())
    }

    /// Returns the current frame's colors.
    ///
    /// A reference to whichever buffer is current, never a copy: the
    /// engine's render buffer after a non-threaded cycle, the harness
    /// scratch buffer after a threaded one.
    #[inline]
    pub fn colors(&self) -> &ColorBuffer {
        match self.current {
            CurrentBuffer::Engine => self.engine.render_buffer(),
            CurrentBuffer::Scratch => &self.scratch,
        }
    }

    /// Queues a raw key event for the next engine cycle.
    ///
    /// Callable from the host's input-delivery context at arbitrary
    /// times; the event is held until the engine dispatches.
    pub fn key_event(&self, event: KeyEvent) {
        self.dispatch.push(event);
    }

    /// Creates a cloneable producer handle for input threads.
    #[must_use]
    pub fn input_sender(&self) -> InputSender {
        InputDispatch::sender(&self.dispatch)
    }

    /// Registers an additional input subscriber.
    ///
    /// Handlers fire in registration order; the built-in command handler
    /// is always first.
    pub fn add_key_handler<H>(&self, handler: H)
    where
        H: KeyHandler + 'static,
    {
        self.dispatch.add_handler(handler);
    }

    /// Returns the harness's control flags.
    #[inline]
    pub fn flags(&self) -> &ControlFlags {
        &self.flags
    }

    /// Enables tempo control from the keyboard.
    ///
    /// Left and right arrows change the tempo by 0.1 BPM and the space
    /// bar taps it.
    pub fn enable_keyboard_tempo(&self) {
        self.flags.set_keyboard_tempo(true);
    }

    /// Fires the global flash effect, if one is wired.
    pub fn flash(&self) {
        if let Some(flash) = &self.flash {
            flash.trigger();
        }
    }

    /// Returns the most recent cycle's timings.
    #[inline]
    pub fn timer_stats(&self) -> TimerStats {
        self.timer.stats()
    }

    /// Returns the measured draw rate in frames per second.
    #[inline]
    pub fn frame_rate(&self) -> f32 {
        self.timer.frame_rate()
    }
}

impl HostDriver for Harness {
    fn on_frame(&mut self) -> Result<()> {
        self.draw()
    }

    fn on_input(&mut self, event: KeyEvent) {
        self.key_event(event);
    }

    fn on_shutdown(&mut self) {
        tracing::debug!("harness shutting down");
    }
}

/// Builder for wiring a [`Harness`] to its collaborators.
///
/// The engine is required; the tempo and effects are optional, and key
/// bindings whose collaborator is absent do nothing.
pub struct HarnessBuilder {
    engine: Arc<dyn Engine>,
    tempo: Option<Arc<dyn Tempo>>,
    flash: Option<Arc<dyn Effect>>,
    desaturation: Option<Arc<dyn Effect>>,
    keyboard_tempo: bool,
    show_framerate: bool,
}

impl HarnessBuilder {
    /// Creates a builder around `engine`.
    #[must_use]
    pub fn new(engine: Arc<dyn Engine>) -> Self {
        Self {
            engine,
            tempo: None,
            flash: None,
            desaturation: None,
            keyboard_tempo: false,
            show_framerate: false,
        }
    }

    /// Wires the tempo estimator.
    #[must_use]
    pub fn tempo(mut self, tempo: Arc<dyn Tempo>) -> Self {
        self.tempo = Some(tempo);
        self
    }

    /// Wires the global flash effect.
    #[must_use]
    pub fn flash(mut self, flash: Arc<dyn Effect>) -> Self {
        self.flash = Some(flash);
        self
    }

    /// Wires the global desaturation effect.
    #[must_use]
    pub fn desaturation(mut self, desaturation: Arc<dyn Effect>) -> Self {
        self.desaturation = Some(desaturation);
        self
    }

    /// Sets the initial keyboard-tempo-control flag.
    #[must_use]
    pub fn keyboard_tempo(mut self, on: bool) -> Self {
        self.keyboard_tempo = on;
        self
    }

    /// Sets the initial framerate-display flag.
    #[must_use]
    pub fn show_framerate(mut self, on: bool) -> Self {
        self.show_framerate = on;
        self
    }

    /// Builds the harness.
    ///
    /// Allocates the scratch buffer to the engine's output length,
    /// registers the input dispatch hook with the engine and installs
    /// the built-in key-command handler as the first subscriber.
    #[must_use]
    pub fn build(self) -> Harness {
        let dispatch = Arc::new(InputDispatch::new());
        self.engine
            .set_dispatch(Arc::clone(&dispatch) as Arc<dyn Dispatch>);

        let flags = Arc::new(ControlFlags::new());
        flags.set_keyboard_tempo(self.keyboard_tempo);
        flags.set_show_framerate(self.show_framerate);

        dispatch.add_handler(KeyCommands::new(
            Arc::clone(&self.engine),
            Arc::clone(&flags),
            self.tempo,
            self.flash.clone(),
            self.desaturation,
        ));

        let scratch = ColorBuffer::new(self.engine.render_buffer().len());

        Harness {
            engine: self.engine,
            dispatch,
            flags,
            flash: self.flash,
            scratch,
            current: CurrentBuffer::Engine,
            timer: FrameTimer::new(),
        }
    }
}
