//! RGB to HSL/HSV.

use super::model::Model;
use super::numeric::{percentage, round_degrees};
use crate::color::Rgb;

/// Scratch values for a single forward conversion.
///
/// Built fresh from each input and dropped when the conversion returns.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Extrema {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub max: f64,
    pub min: f64,
    pub delta: f64,
}

impl Extrema {
    pub(crate) fn of(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        Self {
            r,
            g,
            b,
            max,
            min,
            delta: max - min,
        }
    }

    /// Hue in whole degrees, `0.0..360.0`. Achromatic input has hue 0.
    pub(crate) fn hue(&self) -> f64 {
        if self.delta == 0.0 {
            return 0.0;
        }

        let sector = if self.max == self.r {
            // Euclidean remainder keeps magenta-ish reds positive
            ((self.g - self.b) / self.delta).rem_euclid(6.0)
        } else if self.max == self.g {
            (self.b - self.r) / self.delta + 2.0
        } else {
            (self.r - self.g) / self.delta + 4.0
        };

        round_degrees(60.0 * sector)
    }
}

/// Convert to `(hue, saturation, brightness)` under model `M`.
///
/// Saturation and brightness are percentages rounded to one decimal.
pub(crate) fn forward<M: Model>(rgb: Rgb) -> (f64, f64, f64) {
    let extrema = Extrema::of(rgb);
    let hue = extrema.hue();
    let brightness = M::brightness(&extrema);
    let saturation = M::saturation(&extrema, brightness);
    (hue, percentage(saturation), percentage(brightness))
}
