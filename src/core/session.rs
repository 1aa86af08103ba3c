//! Process-wide mutable state, held by exactly one owner.
//!
//! Pointer, color mode and power flag are only ever changed through
//! `&mut SessionState`, which keeps a single writer even when callbacks are
//! wired from several event sources.

use super::audio::AudioCue;
use super::color::ColorMode;
use super::interaction::InteractionState;
use super::power::PowerController;
use super::prefs::{save_color_mode, PreferenceStore};
use glam::DVec2;

pub struct SessionState {
    pub interaction: InteractionState,
    pub power: PowerController,
    mode: ColorMode,
}

impl SessionState {
    pub fn new(center: DVec2, mode: ColorMode, now_ms: f64) -> Self {
        Self {
            interaction: InteractionState::new(center, now_ms),
            power: PowerController::default(),
            mode,
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Apply a user selection and persist it.
    pub fn set_mode<P: PreferenceStore + ?Sized>(&mut self, mode: ColorMode, store: &mut P) {
        if mode != self.mode {
            log::info!("[mode] {} -> {}", self.mode.name(), mode.name());
        }
        self.mode = mode;
        save_color_mode(store, mode);
    }

    pub fn pointer_moved<A: AudioCue + ?Sized>(&mut self, pos: DVec2, now_ms: f64, audio: &mut A) {
        let on = self.power.is_on();
        self.interaction.on_pointer_move(pos, now_ms, on, audio);
    }
}
