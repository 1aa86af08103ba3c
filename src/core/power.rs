use super::audio::AudioCue;
use super::constants::{POWER_LABEL_OFF, POWER_LABEL_ON};
use super::surface::DrawingSurface;

/// Running/paused switch. Always starts on; never persisted.
#[derive(Clone, Copy, Debug)]
pub struct PowerController {
    on: bool,
}

impl Default for PowerController {
    fn default() -> Self {
        Self { on: true }
    }
}

impl PowerController {
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Flip the state and apply its side effects. Powering off blanks the
    /// surface immediately rather than letting the trails fade.
    pub fn toggle<A, S>(&mut self, audio: &mut A, surface: &mut S) -> bool
    where
        A: AudioCue + ?Sized,
        S: DrawingSurface + ?Sized,
    {
        self.on = !self.on;
        if self.on {
            audio.play_hum();
        } else {
            audio.pause_hum();
            surface.clear();
        }
        log::info!("[power] {}", if self.on { "on" } else { "off" });
        self.on
    }

    pub fn label(&self) -> &'static str {
        if self.on {
            POWER_LABEL_ON
        } else {
            POWER_LABEL_OFF
        }
    }
}
