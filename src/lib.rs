//! lumen-harness: a synchronization harness bridging a possibly-threaded
//! rendering/compute engine to a single-threaded host draw loop.
//!
//! The harness owns the frame-buffer hand-off protocol and the input
//! dispatch queue between the two worlds:
//!
//! - Once per host frame, the draw cycle either drives the engine inline
//!   or snapshots an engine running on its own thread, and exposes the
//!   resulting color buffer by reference.
//! - Key events arrive from the host at arbitrary times, queue up
//!   thread-safely, and are dispatched to subscribers once per engine
//!   cycle, at the one point where control mutation is safe.
//!
//! # Example
//!
//! ```no_run
//! use lumen_harness::prelude::*;
//! use std::sync::Arc;
//!
//! # fn wire() -> (Arc<dyn Engine>, Arc<dyn Tempo>) { unimplemented!() }
//! # fn main() -> lumen_core::Result<()> {
//! let (engine, tempo) = wire();
//! let mut harness = Harness::builder(engine)
//!     .tempo(tempo)
//!     .keyboard_tempo(true)
//!     .build();
//!
//! // Host draw loop:
//! harness.draw()?;
//! let frame = harness.colors();
//! # Ok(())
//! # }
//! ```

pub use lumen_bridge as bridge;
pub use lumen_core as core;
pub use lumen_input as input;

pub mod prelude {
    //! Commonly used types.
    pub use lumen_bridge::{
        ControlFlags, Effect, Engine, Harness, HarnessBuilder, HostDriver, Tempo, TimerStats,
    };
    pub use lumen_core::{ColorBuffer, PackedColor};
    pub use lumen_input::{InputSender, KeyAction, KeyCode, KeyEvent, KeyModifiers};
}
