/// Fire-and-forget audio cues. Implementations must swallow playback failures;
/// nothing here may interrupt the render loop.
pub trait AudioCue {
    /// Short zap played on pointer movement while powered on.
    fn play_zap(&mut self);
    /// Start or resume the looping ambient hum.
    fn play_hum(&mut self);
    fn pause_hum(&mut self);
    fn set_hum_volume(&mut self, volume: f64);
}

/// Silent implementation for headless use.
#[derive(Default, Clone, Copy, Debug)]
pub struct Mute;

impl AudioCue for Mute {
    fn play_zap(&mut self) {}
    fn play_hum(&mut self) {}
    fn pause_hum(&mut self) {}
    fn set_hum_volume(&mut self, _volume: f64) {}
}
