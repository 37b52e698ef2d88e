//! HSL (hue, saturation, lightness) color type

use serde::{Deserialize, Serialize};

use super::range::{check_finite, check_percentage};
use super::rgb::Rgb;
use crate::config::HueMode;
use crate::convert::{self, HslModel};
use crate::error::{ColorError, Component};

/// A color in the HSL cylindrical model.
///
/// Values produced by [`From<Rgb>`] always carry a whole-number hue in
/// `0.0..360.0` and percentages rounded to one decimal place.
///
/// # Components
///
/// - `hue`: angle on the color wheel in degrees
/// - `saturation`: colorfulness relative to lightness, `0.0..=100.0`
/// - `lightness`: midpoint of the brightest and darkest channel, `0.0..=100.0`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `0.0..360.0`
    pub hue: f64,
    /// Saturation percentage, `0.0..=100.0`
    pub saturation: f64,
    /// Lightness percentage, `0.0..=100.0`
    pub lightness: f64,
}

impl Hsl {
    /// Create a new HSL color without validating it.
    ///
    /// Out-of-range values are caught later by the inverse conversion.
    #[inline]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Create a new HSL color, rejecting non-finite components and
    /// percentages outside `0..=100`.
    ///
    /// Hue is only required to be finite; how an out-of-range hue is treated
    /// is a conversion concern (see [`HueMode`]).
    ///
    /// # Example
    /// ```
    /// use colorwheel::Hsl;
    ///
    /// assert!(Hsl::try_new(120.0, 100.0, 50.0).is_ok());
    /// assert!(Hsl::try_new(120.0, 100.0, 150.0).is_err());
    /// ```
    pub fn try_new(hue: f64, saturation: f64, lightness: f64) -> Result<Self, ColorError> {
        Ok(Self {
            hue: check_finite(Component::Hue, hue)?,
            saturation: check_percentage(Component::Saturation, saturation)?,
            lightness: check_percentage(Component::Lightness, lightness)?,
        })
    }

    /// The components as a `(hue, saturation, lightness)` tuple.
    #[inline]
    pub const fn to_tuple(self) -> (f64, f64, f64) {
        (self.hue, self.saturation, self.lightness)
    }
}

impl From<Rgb> for Hsl {
    /// Convert from RGB to HSL.
    ///
    /// # Example
    ///
    /// ```
    /// use colorwheel::{Hsl, Rgb};
    ///
    /// let gray = Hsl::from(Rgb::new(128, 128, 128));
    /// assert_eq!(gray, Hsl::new(0.0, 0.0, 50.2));
    /// ```
    fn from(rgb: Rgb) -> Self {
        let (hue, saturation, lightness) = convert::forward::<HslModel>(rgb);
        Self::new(hue, saturation, lightness)
    }
}

impl TryFrom<Hsl> for Rgb {
    type Error = ColorError;

    /// Convert from HSL to RGB with the default [`HueMode::Fallback`].
    fn try_from(hsl: Hsl) -> Result<Self, Self::Error> {
        convert::inverse::<HslModel>(hsl.hue, hsl.saturation, hsl.lightness, HueMode::Fallback)
    }
}
