//! colorwheel: RGB, HSL and HSV conversions
//!
//! Closed-form conversions between 8-bit RGB and the two cylindrical color
//! models, HSL and HSV, in both directions.
//!
//! # Quick Start
//!
//! ```
//! use colorwheel::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv, Hsl, Hsv, Rgb};
//!
//! assert_eq!(rgb_to_hsl(255, 0, 0), Hsl::new(0.0, 100.0, 50.0));
//! assert_eq!(rgb_to_hsv(51, 117, 187), Hsv::new(211.0, 72.7, 73.3));
//!
//! assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0).unwrap(), Rgb::new(0, 255, 0));
//! assert_eq!(hsv_to_rgb(211.0, 57.0, 47.0).unwrap(), Rgb::new(51, 84, 119));
//! ```
//!
//! # Ranges and Precision
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`rgb_to_hsl`] | R, G, B in `0..=255` | H whole degrees in `0..360`, S and L in `0..=100`, one decimal |
//! | [`rgb_to_hsv`] | R, G, B in `0..=255` | H whole degrees in `0..360`, S and V in `0..=100`, one decimal |
//! | [`hsl_to_rgb`] | H degrees, S and L in `0..=100` | R, G, B in `0..=255` |
//! | [`hsv_to_rgb`] | H degrees, S and V in `0..=100` | R, G, B in `0..=255` |
//!
//! Forward conversions round (hue to whole degrees, percentages to one
//! decimal, ties to even). Inverse conversions truncate each channel. A
//! round trip therefore lands within a few units of the original color, not
//! necessarily on it:
//!
//! ```
//! use colorwheel::{hsl_to_rgb, rgb_to_hsl, Rgb};
//!
//! let hsl = rgb_to_hsl(210, 117, 42);
//! let back = hsl_to_rgb(hsl.hue, hsl.saturation, hsl.lightness).unwrap();
//! assert_eq!(back, Rgb::new(209, 117, 41));
//! ```
//!
//! # Invalid Input
//!
//! The inverse converters reject non-finite components and percentages
//! outside `0..=100` with [`ColorError`]. A hue outside `0..360` is handled
//! by [`HueMode`]: by default it selects no sextant and the chroma is
//! dropped; [`Converter`] can be configured to wrap or reject it instead.

pub mod color;
pub mod config;
mod convert;
pub mod converter;
pub mod error;


pub use color::{Hsl, Hsv, Rgb};
pub use config::{ConvertOptions, HueMode};
pub use converter::Converter;
pub use error::{ColorError, Component, ConfigError};

/// Convert RGB to HSL.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    Converter::default().rgb_to_hsl(r, g, b)
}

/// Convert RGB to HSV.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    Converter::default().rgb_to_hsv(r, g, b)
}

/// Convert HSL to RGB using [`HueMode::Fallback`].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Result<Rgb, ColorError> {
    Converter::default().hsl_to_rgb(h, s, l)
}

/// Convert HSV to RGB using [`HueMode::Fallback`].
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Result<Rgb, ColorError> {
    Converter::default().hsv_to_rgb(h, s, v)
}
