// Host-side tests for tuning constants and their relationships.

use plasma_web::core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn tendril_ranges_are_well_formed() {
    assert_eq!(TENDRIL_COUNT, 40);
    assert!(LENGTH_MIN > 0.0 && LENGTH_MIN < LENGTH_MAX);
    assert!(SPEED_MIN > 0.0 && SPEED_MIN < SPEED_MAX);
    assert!(PHASE_MAX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_and_alpha_are_fractions() {
    // A factor of 1 would snap, above 1 would overshoot
    assert!(ANGLE_SMOOTHING > 0.0 && ANGLE_SMOOTHING < 1.0);
    assert!(TRAIL_ALPHA > 0.0 && TRAIL_ALPHA < 1.0);
    assert!(AMBIENT_VOLUME >= 0.0 && AMBIENT_VOLUME <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn idle_orbit_stays_inside_smallest_tendril_reach() {
    assert!(IDLE_AFTER_MS > 0.0);
    assert!(IDLE_ORBIT_TIME_DIVISOR > 0.0);
    assert!(IDLE_ORBIT_RADIUS > 0.0 && IDLE_ORBIT_RADIUS <= LENGTH_MIN);
}

#[test]
fn fixed_hues_are_distinct_and_in_range() {
    let hues = [HUE_BLUE, HUE_RED, HUE_GREEN];
    for h in hues {
        assert!((0.0..360.0).contains(&h));
    }
    assert_ne!(HUE_BLUE, HUE_RED);
    assert_ne!(HUE_RED, HUE_GREEN);
    assert_ne!(HUE_GREEN, HUE_BLUE);
}

#[test]
fn pref_key_and_labels() {
    assert_eq!(MODE_PREF_KEY, "plasmaMode");
    assert_eq!(POWER_LABEL_ON, "⏻ ON");
    assert_eq!(POWER_LABEL_OFF, "⏻ OFF");
}
