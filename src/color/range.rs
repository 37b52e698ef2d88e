//! Component range checks shared by [`Hsl`](super::Hsl) and [`Hsv`](super::Hsv).

use crate::error::{ColorError, Component};

/// Lower bound for saturation, lightness and value.
pub(crate) const PERCENT_MIN: f64 = 0.0;

/// Upper bound for saturation, lightness and value.
pub(crate) const PERCENT_MAX: f64 = 100.0;

/// Reject NaN and infinities.
pub(crate) fn check_finite(component: Component, value: f64) -> Result<f64, ColorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ColorError::NotFinite { component, value })
    }
}

/// Require a finite percentage in `0..=100`.
pub(crate) fn check_percentage(component: Component, value: f64) -> Result<f64, ColorError> {
    let value = check_finite(component, value)?;
    if (PERCENT_MIN..=PERCENT_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::OutOfRange {
            component,
            value,
            min: PERCENT_MIN,
            max: PERCENT_MAX,
        })
    }
}
