//! Rounding helpers shared by both conversion directions.
//!
//! Forward conversions round (half to even) while inverse conversions
//! truncate. The asymmetry is part of the contract: `hsl_to_rgb(0, 0, 50)`
//! is `(127, 127, 127)`, not `(128, 128, 128)`.

/// Round to one decimal place, ties to even.
#[inline]
pub(crate) fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round_ties_even() / 10.0
}

/// Express a `0.0..=1.0` fraction as a percentage with one decimal.
#[inline]
pub(crate) fn percentage(fraction: f64) -> f64 {
    round_tenth(fraction * 100.0)
}

/// Normalize an angle into `0.0..360.0`.
///
/// `rem_euclid` can return exactly 360.0 for tiny negative inputs, which is
/// folded back to 0.0.
#[inline]
pub(crate) fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Round a raw hue to whole degrees inside `0.0..360.0`.
///
/// A red-dominant hue just below 360 (e.g. 359.76 for RGB (255, 0, 1))
/// rounds up to 360 and is reported as 0.
#[inline]
pub(crate) fn round_degrees(raw: f64) -> f64 {
    wrap_degrees(raw.round_ties_even())
}

/// Scale a `0.0..=1.0` channel to 8 bits, truncating toward zero.
///
/// Float undershoot below zero saturates to 0 and overshoot to 255.
#[inline]
pub(crate) fn channel(fraction: f64) -> u8 {
    (fraction * 255.0) as u8
}
