//! Conversion algorithms between RGB and the HSL/HSV models.
//!
//! All four converters share one skeleton:
//!
//! ```text
//! forward:  Rgb -> Extrema (max, min, delta) -> hue
//!                                            -> M::brightness -> M::saturation
//!
//! inverse:  (h, s, v) -> M::chroma -> x -> Sextant -> M::offset -> Rgb
//! ```
//!
//! `M` is [`HslModel`] or [`HsvModel`]. Everything a call computes lives on
//! its own stack frame, so conversions are free to run concurrently.

mod forward;
mod inverse;
mod model;
mod numeric;

pub(crate) use forward::forward;
pub(crate) use inverse::inverse;
pub(crate) use model::{HslModel, HsvModel};
