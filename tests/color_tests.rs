// Host-side tests for color modes, the color policy and mode shortcuts.

use plasma_web::core::{color_for, mode_for_key, ColorMode, Hsl, Rgba};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn fixed_modes_return_constant_hues() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        assert_eq!(color_for(ColorMode::Blue, &mut rng).hue, 210.0);
        assert_eq!(color_for(ColorMode::Red, &mut rng).hue, 0.0);
        assert_eq!(color_for(ColorMode::Green, &mut rng).hue, 130.0);
    }
}

#[test]
fn every_mode_uses_full_saturation_and_seventy_percent_lightness() {
    let mut rng = StdRng::seed_from_u64(12);
    for mode in ColorMode::ALL {
        let c = color_for(mode, &mut rng);
        assert_eq!(c.saturation, 100.0);
        assert_eq!(c.lightness, 70.0);
    }
}

#[test]
fn rainbow_hues_span_the_wheel() {
    let mut rng = StdRng::seed_from_u64(13);
    let hues: Vec<f64> = (0..2000)
        .map(|_| color_for(ColorMode::Rainbow, &mut rng).hue)
        .collect();
    assert!(hues.iter().all(|h| (0.0..360.0).contains(h)));
    let min = hues.iter().cloned().fold(f64::MAX, f64::min);
    let max = hues.iter().cloned().fold(f64::MIN, f64::max);
    assert!(min < 10.0, "min hue {min}");
    assert!(max > 350.0, "max hue {max}");

    // every 30 degree bucket gets hit
    let mut buckets = [0usize; 12];
    for h in &hues {
        buckets[(*h / 30.0) as usize] += 1;
    }
    assert!(buckets.iter().all(|&n| n > 0), "{buckets:?}");
}

#[test]
fn rainbow_varies_between_calls() {
    let mut rng = StdRng::seed_from_u64(14);
    let a = color_for(ColorMode::Rainbow, &mut rng);
    let b = color_for(ColorMode::Rainbow, &mut rng);
    assert_ne!(a.hue, b.hue);
}

#[test]
fn mode_names_round_trip() {
    for mode in ColorMode::ALL {
        assert_eq!(ColorMode::from_name(mode.name()), mode);
    }
}

#[test]
fn unknown_mode_names_fall_back_to_rainbow() {
    assert_eq!(ColorMode::from_name(""), ColorMode::Rainbow);
    assert_eq!(ColorMode::from_name("purple"), ColorMode::Rainbow);
    assert_eq!(ColorMode::from_name("Blue"), ColorMode::Rainbow);
    assert_eq!(ColorMode::from_name("rainbow"), ColorMode::Rainbow);
    assert_eq!(ColorMode::default(), ColorMode::Rainbow);
    assert_eq!(ColorMode::Rainbow.fixed_hue(), None);
}

#[test]
fn css_formatting() {
    let blue = Hsl {
        hue: 210.0,
        saturation: 100.0,
        lightness: 70.0,
    };
    assert_eq!(blue.to_css(), "hsl(210, 100%, 70%)");
    assert_eq!(Rgba::black(0.1).to_css(), "rgba(0, 0, 0, 0.1)");
}

#[test]
fn mode_for_key_digits() {
    assert_eq!(mode_for_key("1"), Some(ColorMode::Rainbow));
    assert_eq!(mode_for_key("2"), Some(ColorMode::Blue));
    assert_eq!(mode_for_key("3"), Some(ColorMode::Red));
    assert_eq!(mode_for_key("4"), Some(ColorMode::Green));
}

#[test]
fn mode_for_key_rejects_everything_else() {
    for key in ["0", "5", "9", "b", "p", "", "12", " "] {
        assert_eq!(mode_for_key(key), None, "key {key:?}");
    }
}
