//! Color value types
//!
//! Three immutable value types, one per color model:
//!
//! - [`Rgb`]: 8-bit red, green and blue channels
//! - [`Hsl`]: hue in degrees, saturation and lightness as percentages
//! - [`Hsv`]: hue in degrees, saturation and value as percentages
//!
//! Conversions are wired up as `From<Rgb>` (forward, infallible) and
//! `TryFrom<Hsl>` / `TryFrom<Hsv>` (inverse, validating) impls.
//!
//! # Example
//!
//! ```
//! use colorwheel::{Hsl, Rgb};
//!
//! let hsl = Hsl::from(Rgb::new(51, 117, 187));
//! assert_eq!(hsl, Hsl::new(211.0, 57.1, 46.7));
//!
//! let rgb = Rgb::try_from(Hsl::new(211.0, 57.0, 47.0)).unwrap();
//! assert_eq!(rgb, Rgb::new(51, 117, 188));
//! ```

mod hsl;
mod hsv;
mod range;
mod rgb;

pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;

pub(crate) use range::{check_finite, check_percentage};
