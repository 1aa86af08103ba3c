use super::color::{color_for, ColorMode};
use super::constants::{
    ANGLE_SMOOTHING, GLOW_BLUR, LENGTH_MAX, LENGTH_MIN, PHASE_MAX, SPEED_MAX, SPEED_MIN,
    STROKE_WIDTH,
};
use super::surface::{DrawingSurface, Stroke};
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// One light tendril anchored at the field center.
///
/// `length` and `speed` are fixed for the tendril's lifetime; only `angle` and
/// `phase` carry over between ticks. `position` is derived on every update.
#[derive(Clone, Debug)]
pub struct Tendril {
    angle: f64,
    length: f64,
    speed: f64,
    phase: f64,
    position: DVec2,
}

impl Tendril {
    pub fn new<R: Rng + ?Sized>(center: DVec2, rng: &mut R) -> Self {
        let mut t = Self {
            angle: 0.0,
            length: LENGTH_MIN,
            speed: SPEED_MIN,
            phase: 0.0,
            position: center,
        };
        t.reset(rng);
        t
    }

    /// Build a tendril from known motion state, e.g. to replay a recorded
    /// frame. `position` starts at `center` until the first update.
    pub fn from_parts(angle: f64, length: f64, speed: f64, phase: f64, center: DVec2) -> Self {
        Self {
            angle,
            length,
            speed,
            phase,
            position: center,
        }
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.angle = rng.gen_range(0.0..TAU);
        self.length = rng.gen_range(LENGTH_MIN..LENGTH_MAX);
        self.speed = rng.gen_range(SPEED_MIN..SPEED_MAX);
        self.phase = rng.gen_range(0.0..PHASE_MAX);
    }

    /// Heading the tendril is steering toward for a given target.
    #[inline]
    pub fn desired_angle(target: DVec2, center: DVec2) -> f64 {
        let d = target - center;
        d.y.atan2(d.x)
    }

    pub fn update(&mut self, target: DVec2, center: DVec2) {
        let desired = Self::desired_angle(target, center);
        // exponential heading filter, unwrapped: never overshoots
        self.angle += (desired - self.angle) * ANGLE_SMOOTHING;
        self.phase += self.speed;

        let reach = self.length * self.phase.sin();
        self.position = center + DVec2::new(self.angle.cos(), self.angle.sin()) * reach;
    }

    pub fn draw<S, R>(&self, surface: &mut S, center: DVec2, mode: ColorMode, rng: &mut R)
    where
        S: DrawingSurface + ?Sized,
        R: Rng + ?Sized,
    {
        let stroke = Stroke {
            color: color_for(mode, rng),
            width: STROKE_WIDTH,
            glow_blur: GLOW_BLUR,
        };
        surface.stroke_line(center, self.position, &stroke);
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }
    pub fn length(&self) -> f64 {
        self.length
    }
    pub fn speed(&self) -> f64 {
        self.speed
    }
    pub fn phase(&self) -> f64 {
        self.phase
    }
    pub fn position(&self) -> DVec2 {
        self.position
    }
}
