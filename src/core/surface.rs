use super::color::{Hsl, Rgba};
use glam::DVec2;

/// Line style for a tendril. The glow (shadow) always uses the stroke color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Hsl,
    pub width: f64,
    pub glow_blur: f64,
}

/// The subset of a 2D drawing API the effect needs.
///
/// Implemented by the browser canvas in the wasm build and by recording fakes
/// in tests.
pub trait DrawingSurface {
    /// Surface size in pixels.
    fn size(&self) -> DVec2;
    /// Reset every pixel to blank.
    fn clear(&mut self);
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Rgba);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, stroke: &Stroke);
}
