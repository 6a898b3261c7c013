//! The built-in key-command handler.
//!
//! Maps raw key events to control actions: cue navigation, framerate
//! display, tempo control and the basic effects. The press/release
//! asymmetry is deliberate and load-bearing: the framerate display and
//! the effects arm on press and disarm on release, the reverse of usual
//! toggle semantics. Unrecognized keys are silently ignored.

use crate::engine::{Effect, Engine, Tempo};
use crate::flags::ControlFlags;

use lumen_input::{KeyAction, KeyCode, KeyEvent, KeyHandler};

use std::sync::Arc;

/// Tempo step applied per arrow-key event, in beats per minute.
const BPM_STEP: f64 = 0.1;

/// The harness's built-in input subscriber.
///
/// Registered first at harness construction, ahead of any host-supplied
/// handlers. The mapping is stateless; all state it touches lives in the
/// shared [`ControlFlags`] and the collaborators.
///
/// # Bindings
///
/// | Key | Press | Release |
/// |-----|-------|---------|
/// | `[` / `]` | — | previous / next cue |
/// | meta+Up / meta+Down | previous / next cue | — |
/// | `f` | framerate display on | framerate display off |
/// | `s` | desaturation on | desaturation off |
/// | `/` | flash on | flash off |
/// | space | — | tempo tap (keyboard tempo only) |
/// | Left / Right | BPM −0.1 / +0.1 (keyboard tempo only) | — |
pub struct KeyCommands {
    engine: Arc<dyn Engine>,
    flags: Arc<ControlFlags>,
    tempo: Option<Arc<dyn Tempo>>,
    flash: Option<Arc<dyn Effect>>,
    desaturation: Option<Arc<dyn Effect>>,
}

impl KeyCommands {
    /// Creates the handler over the harness's collaborators.
    ///
    /// Bindings whose collaborator is absent do nothing.
    #[must_use]
    pub fn new(
        engine: Arc<dyn Engine>,
        flags: Arc<ControlFlags>,
        tempo: Option<Arc<dyn Tempo>>,
        flash: Option<Arc<dyn Effect>>,
        desaturation: Option<Arc<dyn Effect>>,
    ) -> Self {
        Self {
            engine,
            flags,
            tempo,
            flash,
            desaturation,
        }
    }

    fn on_release(&self, event: &KeyEvent) {
        let Some(c) = event.character() else {
            return;
        };
        match c.to_ascii_lowercase() {
            '[' => self.engine.go_prev(),
            ']' => self.engine.go_next(),
            'f' => self.flags.set_show_framerate(false),
            ' ' => {
                if self.flags.keyboard_tempo() {
                    if let Some(tempo) = &self.tempo {
                        tempo.tap();
                    }
                }
            }
            's' => {
                if let Some(desaturation) = &self.desaturation {
                    desaturation.disable();
                }
            }
            '/' => {
                if let Some(flash) = &self.flash {
                    flash.disable();
                }
            }
            _ => {}
        }
    }

    fn on_press(&self, event: &KeyEvent) {
        match event.code {
            KeyCode::Up if event.modifiers.has_meta() => self.engine.go_prev(),
            KeyCode::Down if event.modifiers.has_meta() => self.engine.go_next(),
            KeyCode::Left if self.flags.keyboard_tempo() => self.nudge_bpm(-BPM_STEP),
            KeyCode::Right if self.flags.keyboard_tempo() => self.nudge_bpm(BPM_STEP),
            _ => {}
        }
        // Toggle keys match the character as delivered, not lowercased.
        match event.character() {
            Some('f') => self.flags.set_show_framerate(true),
            Some('s') => {
                if let Some(desaturation) = &self.desaturation {
                    desaturation.enable();
                }
            }
            Some('/') => {
                if let Some(flash) = &self.flash {
                    flash.enable();
                }
            }
            _ => {}
        }
    }

    fn nudge_bpm(&self, step: f64) {
        if let Some(tempo) = &self.tempo {
            // Unbounded on purpose; clamping is the tempo component's call.
            tempo.set_bpm(tempo.bpm() + step);
        }
    }
}

impl KeyHandler for KeyCommands {
    fn on_key(&mut self, event: &KeyEvent) {
        match event.action {
            KeyAction::Release => self.on_release(event),
            KeyAction::Press => self.on_press(event),
        }
    }
}
