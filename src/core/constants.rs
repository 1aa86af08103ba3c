// Shared tuning constants for the tendril field and its interaction model.

// Field
pub const TENDRIL_COUNT: usize = 40;

// Per-tendril randomized ranges, sampled once in `Tendril::reset`
pub const LENGTH_MIN: f64 = 100.0;
pub const LENGTH_MAX: f64 = 300.0;
pub const SPEED_MIN: f64 = 0.02;
pub const SPEED_MAX: f64 = 0.05;
pub const PHASE_MAX: f64 = 1000.0;

// Heading filter: angle += (desired - angle) * ANGLE_SMOOTHING each tick
pub const ANGLE_SMOOTHING: f64 = 0.05;

// Idle behavior
pub const IDLE_AFTER_MS: f64 = 4000.0; // pointer considered stale at or past this age
pub const IDLE_ORBIT_TIME_DIVISOR: f64 = 500.0; // ms per radian of orbit
pub const IDLE_ORBIT_RADIUS: f64 = 100.0;

// Strokes
pub const STROKE_WIDTH: f64 = 2.0;
pub const GLOW_BLUR: f64 = 15.0;
pub const TRAIL_ALPHA: f64 = 0.1; // black overlay per frame, leaves fading trails

// Color policy
pub const SATURATION_PCT: f64 = 100.0;
pub const LIGHTNESS_PCT: f64 = 70.0;
pub const HUE_BLUE: f64 = 210.0;
pub const HUE_RED: f64 = 0.0;
pub const HUE_GREEN: f64 = 130.0;

// Audio
pub const AMBIENT_VOLUME: f64 = 0.4;

// Persistence
pub const MODE_PREF_KEY: &str = "plasmaMode";

// Power button labels
pub const POWER_LABEL_ON: &str = "⏻ ON";
pub const POWER_LABEL_OFF: &str = "⏻ OFF";
