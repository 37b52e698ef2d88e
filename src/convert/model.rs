//! The HSL and HSV models as two small implementations of one trait.
//!
//! Both models share normalization, hue derivation and sextant selection.
//! They differ only in how brightness, saturation, chroma and the final
//! channel offset are computed.

use super::forward::Extrema;
use crate::error::Component;

/// The formulas in which HSL and HSV diverge.
pub(crate) trait Model {
    /// Component reported for the third slot (lightness or value).
    const BRIGHTNESS: Component;

    /// Third component as a `0.0..=1.0` fraction.
    fn brightness(extrema: &Extrema) -> f64;

    /// Saturation as a `0.0..=1.0` fraction. `brightness` is the unrounded
    /// result of [`Model::brightness`].
    fn saturation(extrema: &Extrema, brightness: f64) -> f64;

    /// Chroma from scaled saturation and brightness.
    fn chroma(saturation: f64, brightness: f64) -> f64;

    /// Amount added to every channel after sextant selection.
    fn offset(brightness: f64, chroma: f64) -> f64;
}

/// Hue, saturation, lightness.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HslModel;

/// Hue, saturation, value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HsvModel;

impl Model for HslModel {
    const BRIGHTNESS: Component = Component::Lightness;

    #[inline]
    fn brightness(extrema: &Extrema) -> f64 {
        (extrema.max + extrema.min) / 2.0
    }

    fn saturation(extrema: &Extrema, lightness: f64) -> f64 {
        if extrema.delta == 0.0 {
            return 0.0;
        }
        // Only zero for pure black or white, where delta is zero as well
        let denominator = 1.0 - (2.0 * lightness - 1.0).abs();
        if denominator == 0.0 {
            return 0.0;
        }
        extrema.delta / denominator
    }

    #[inline]
    fn chroma(saturation: f64, lightness: f64) -> f64 {
        (1.0 - (2.0 * lightness - 1.0).abs()) * saturation
    }

    #[inline]
    fn offset(lightness: f64, chroma: f64) -> f64 {
        lightness - chroma / 2.0
    }
}

impl Model for HsvModel {
    const BRIGHTNESS: Component = Component::Value;

    #[inline]
    fn brightness(extrema: &Extrema) -> f64 {
        extrema.max
    }

    fn saturation(extrema: &Extrema, _value: f64) -> f64 {
        if extrema.delta == 0.0 {
            0.0
        } else {
            extrema.delta / extrema.max
        }
    }

    #[inline]
    fn chroma(saturation: f64, value: f64) -> f64 {
        value * saturation
    }

    #[inline]
    fn offset(value: f64, chroma: f64) -> f64 {
        value - chroma
    }
}
