//! Color modes and the per-draw color policy.
//!
//! Fixed modes always produce the same hue. Rainbow draws a fresh hue from the
//! injected RNG on every call, so each stroke in a frame gets its own color.

use super::constants::{HUE_BLUE, HUE_GREEN, HUE_RED, LIGHTNESS_PCT, SATURATION_PCT};
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    #[default]
    Rainbow,
    Blue,
    Red,
    Green,
}

impl ColorMode {
    pub const ALL: [ColorMode; 4] = [
        ColorMode::Rainbow,
        ColorMode::Blue,
        ColorMode::Red,
        ColorMode::Green,
    ];

    /// Parse a persisted or selector value. Unknown names fall back to rainbow.
    pub fn from_name(name: &str) -> Self {
        match name {
            "blue" => ColorMode::Blue,
            "red" => ColorMode::Red,
            "green" => ColorMode::Green,
            _ => ColorMode::Rainbow,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorMode::Rainbow => "rainbow",
            ColorMode::Blue => "blue",
            ColorMode::Red => "red",
            ColorMode::Green => "green",
        }
    }

    /// Fixed hue for the mode, or `None` for rainbow.
    pub fn fixed_hue(self) -> Option<f64> {
        match self {
            ColorMode::Blue => Some(HUE_BLUE),
            ColorMode::Red => Some(HUE_RED),
            ColorMode::Green => Some(HUE_GREEN),
            ColorMode::Rainbow => None,
        }
    }
}

/// Stroke color in HSL space (hue in degrees, saturation/lightness in percent).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub fn to_css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Fill color with straight alpha in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn black(a: f64) -> Self {
        Self { r: 0, g: 0, b: 0, a }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub fn color_for<R: Rng + ?Sized>(mode: ColorMode, rng: &mut R) -> Hsl {
    let hue = match mode.fixed_hue() {
        Some(h) => h,
        None => rng.gen_range(0.0..360.0),
    };
    Hsl {
        hue,
        saturation: SATURATION_PCT,
        lightness: LIGHTNESS_PCT,
    }
}

/// Keyboard shortcut: digits 1-4 pick a mode in selector order.
#[inline]
pub fn mode_for_key(key: &str) -> Option<ColorMode> {
    match key {
        "1" => Some(ColorMode::Rainbow),
        "2" => Some(ColorMode::Blue),
        "3" => Some(ColorMode::Red),
        "4" => Some(ColorMode::Green),
        _ => None,
    }
}
