//! HSV (hue, saturation, value) color type

use serde::{Deserialize, Serialize};

use super::range::{check_finite, check_percentage};
use super::rgb::Rgb;
use crate::config::HueMode;
use crate::convert::{self, HsvModel};
use crate::error::{ColorError, Component};

/// A color in the HSV cylindrical model.
///
/// Shares the hue of [`Hsl`](super::Hsl) for the same RGB input; saturation
/// is measured against the brightest channel instead of lightness, and
/// `value` is the brightest channel itself.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue in degrees, `0.0..360.0`
    pub hue: f64,
    /// Saturation percentage, `0.0..=100.0`
    pub saturation: f64,
    /// Value (brightest channel) percentage, `0.0..=100.0`
    pub value: f64,
}

impl Hsv {
    /// Create a new HSV color without validating it.
    #[inline]
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Create a new HSV color, rejecting non-finite components and
    /// percentages outside `0..=100`.
    pub fn try_new(hue: f64, saturation: f64, value: f64) -> Result<Self, ColorError> {
        Ok(Self {
            hue: check_finite(Component::Hue, hue)?,
            saturation: check_percentage(Component::Saturation, saturation)?,
            value: check_percentage(Component::Value, value)?,
        })
    }

    /// The components as a `(hue, saturation, value)` tuple.
    #[inline]
    pub const fn to_tuple(self) -> (f64, f64, f64) {
        (self.hue, self.saturation, self.value)
    }
}

impl From<Rgb> for Hsv {
    /// Convert from RGB to HSV.
    ///
    /// # Example
    ///
    /// ```
    /// use colorwheel::{Hsv, Rgb};
    ///
    /// let hsv = Hsv::from(Rgb::new(51, 117, 187));
    /// assert_eq!(hsv, Hsv::new(211.0, 72.7, 73.3));
    /// ```
    fn from(rgb: Rgb) -> Self {
        let (hue, saturation, value) = convert::forward::<HsvModel>(rgb);
        Self::new(hue, saturation, value)
    }
}

impl TryFrom<Hsv> for Rgb {
    type Error = ColorError;

    /// Convert from HSV to RGB with the default [`HueMode::Fallback`].
    fn try_from(hsv: Hsv) -> Result<Self, Self::Error> {
        convert::inverse::<HsvModel>(hsv.hue, hsv.saturation, hsv.value, HueMode::Fallback)
    }
}
