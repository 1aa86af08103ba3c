use super::audio::AudioCue;
use super::constants::{IDLE_AFTER_MS, IDLE_ORBIT_RADIUS, IDLE_ORBIT_TIME_DIVISOR};
use glam::DVec2;

/// Last pointer position and when it arrived.
#[derive(Clone, Copy, Debug)]
pub struct InteractionState {
    pointer: DVec2,
    last_input_at: f64,
}

impl InteractionState {
    /// Pointer starts at the field center, stamped at `now_ms`.
    pub fn new(center: DVec2, now_ms: f64) -> Self {
        Self {
            pointer: center,
            last_input_at: now_ms,
        }
    }

    pub fn on_pointer_move<A: AudioCue + ?Sized>(
        &mut self,
        pos: DVec2,
        now_ms: f64,
        powered_on: bool,
        audio: &mut A,
    ) {
        self.pointer = pos;
        self.last_input_at = now_ms;
        if powered_on {
            audio.play_zap();
        }
    }

    #[inline]
    pub fn is_idle(&self, now_ms: f64) -> bool {
        now_ms - self.last_input_at >= IDLE_AFTER_MS
    }

    /// Where the tendrils should steer at `now_ms`. Does not touch `pointer`.
    pub fn current_target(&self, now_ms: f64, center: DVec2) -> DVec2 {
        if self.is_idle(now_ms) {
            idle_orbit(now_ms, center)
        } else {
            self.pointer
        }
    }

    pub fn pointer(&self) -> DVec2 {
        self.pointer
    }

    pub fn last_input_at(&self) -> f64 {
        self.last_input_at
    }
}

/// Slow circular drift around the center used while input is stale.
#[inline]
pub fn idle_orbit(now_ms: f64, center: DVec2) -> DVec2 {
    let t = now_ms / IDLE_ORBIT_TIME_DIVISOR;
    center + DVec2::new(t.sin(), t.cos()) * IDLE_ORBIT_RADIUS
}
