//! Assertion helpers for tests.

use colorwheel::Rgb;

/// Assert every channel of `actual` is within `tolerance` of `expected`.
pub fn assert_rgb_close(actual: Rgb, expected: Rgb, tolerance: u8) {
    let worst = actual
        .to_bytes()
        .iter()
        .zip(expected.to_bytes())
        .map(|(&a, e)| a.abs_diff(e))
        .max()
        .unwrap_or(0);
    assert!(
        worst <= tolerance,
        "Expected {:?} within ±{} of {:?}, worst channel off by {}",
        actual,
        tolerance,
        expected,
        worst
    );
}

/// Shortest distance between two angles in degrees.
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Assert two hues are within `tolerance` degrees on the color wheel.
pub fn assert_hue_close(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let distance = hue_distance(actual, expected);
    assert!(
        distance <= tolerance,
        "{}: hue {} differs from {} by {} degrees (tolerance {})",
        context,
        actual,
        expected,
        distance,
        tolerance
    );
}
