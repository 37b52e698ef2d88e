//! Converter builder -- the configurable entry point for the crate.
//!
//! The crate-root functions ([`rgb_to_hsl`](crate::rgb_to_hsl) and friends)
//! use a default [`Converter`]; build one explicitly to change how
//! out-of-range hues are handled.

use crate::color::{Hsl, Hsv, Rgb};
use crate::config::{ConvertOptions, HueMode};
use crate::convert::{self, HslModel, HsvModel};
use crate::error::ColorError;

/// Reusable RGB/HSL/HSV converter.
///
/// Holds only immutable [`ConvertOptions`]; every method takes `&self`, so a
/// single instance can be shared between threads.
///
/// # Example
///
/// ```
/// use colorwheel::{Converter, HueMode, Rgb};
///
/// let converter = Converter::new().hue_mode(HueMode::Wrap);
///
/// let rgb = converter.hsl_to_rgb(360.0, 100.0, 50.0).unwrap();
/// assert_eq!(rgb, Rgb::new(255, 0, 0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter from loaded options.
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Set the out-of-range hue policy.
    #[inline]
    pub fn hue_mode(mut self, mode: HueMode) -> Self {
        self.options = self.options.hue_mode(mode);
        self
    }

    /// The options in effect.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// RGB to HSL: whole-degree hue, one-decimal percentages.
    pub fn rgb_to_hsl(&self, r: u8, g: u8, b: u8) -> Hsl {
        Hsl::from(Rgb::new(r, g, b))
    }

    /// RGB to HSV: whole-degree hue, one-decimal percentages.
    pub fn rgb_to_hsv(&self, r: u8, g: u8, b: u8) -> Hsv {
        Hsv::from(Rgb::new(r, g, b))
    }

    /// HSL to RGB, truncating each channel.
    pub fn hsl_to_rgb(&self, h: f64, s: f64, l: f64) -> Result<Rgb, ColorError> {
        convert::inverse::<HslModel>(h, s, l, self.options.hue_mode)
    }

    /// HSV to RGB, truncating each channel.
    pub fn hsv_to_rgb(&self, h: f64, s: f64, v: f64) -> Result<Rgb, ColorError> {
        convert::inverse::<HsvModel>(h, s, v, self.options.hue_mode)
    }
}
