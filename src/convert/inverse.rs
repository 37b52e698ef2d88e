//! HSL/HSV to RGB.

use super::model::Model;
use super::numeric::{channel, wrap_degrees};
use crate::color::{check_finite, check_percentage, Rgb};
use crate::config::HueMode;
use crate::error::{ColorError, Component};

/// One of the six 60 degree hue wedges.
///
/// `Degenerate` covers a hue fraction outside `0.0..6.0` and maps every
/// channel to zero before the offset is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sextant {
    RedYellow,
    YellowGreen,
    GreenCyan,
    CyanBlue,
    BlueMagenta,
    MagentaRed,
    Degenerate,
}

impl Sextant {
    /// Select the wedge for `h = hue / 60`.
    pub(crate) fn of(h: f64) -> Self {
        if !(0.0..6.0).contains(&h) {
            return Sextant::Degenerate;
        }
        match h as u8 {
            0 => Sextant::RedYellow,
            1 => Sextant::YellowGreen,
            2 => Sextant::GreenCyan,
            3 => Sextant::CyanBlue,
            4 => Sextant::BlueMagenta,
            _ => Sextant::MagentaRed,
        }
    }

    /// Place chroma `c` and the secondary component `x` on the channels.
    pub(crate) fn arrange(self, c: f64, x: f64) -> [f64; 3] {
        match self {
            Sextant::RedYellow => [c, x, 0.0],
            Sextant::YellowGreen => [x, c, 0.0],
            Sextant::GreenCyan => [0.0, c, x],
            Sextant::CyanBlue => [0.0, x, c],
            Sextant::BlueMagenta => [x, 0.0, c],
            Sextant::MagentaRed => [c, 0.0, x],
            Sextant::Degenerate => [0.0, 0.0, 0.0],
        }
    }
}

/// Apply the configured policy to a hue outside `0.0..360.0`.
fn resolve_hue(hue: f64, mode: HueMode) -> Result<f64, ColorError> {
    if (0.0..360.0).contains(&hue) {
        return Ok(hue);
    }
    match mode {
        HueMode::Fallback => {
            tracing::debug!(hue, "Hue outside 0..360, using degenerate sextant");
            Ok(hue)
        }
        HueMode::Wrap => {
            let wrapped = wrap_degrees(hue);
            tracing::debug!(hue, wrapped, "Wrapped hue into 0..360");
            Ok(wrapped)
        }
        HueMode::Reject => {
            tracing::debug!(hue, "Rejecting hue outside 0..360");
            Err(ColorError::HueOutOfRange(hue))
        }
    }
}

fn validated<M: Model>(
    hue: f64,
    saturation: f64,
    brightness: f64,
) -> Result<(f64, f64, f64), ColorError> {
    let checked = check_finite(Component::Hue, hue).and_then(|hue| {
        Ok((
            hue,
            check_percentage(Component::Saturation, saturation)?,
            check_percentage(M::BRIGHTNESS, brightness)?,
        ))
    });
    if let Err(e) = &checked {
        tracing::debug!(error = %e, "Rejected conversion input");
    }
    checked
}

/// Convert `(hue, saturation, brightness)` under model `M` to RGB.
///
/// Saturation and brightness are percentages; hue is in degrees and is
/// handled according to `mode` when it falls outside `0.0..360.0`.
pub(crate) fn inverse<M: Model>(
    hue: f64,
    saturation: f64,
    brightness: f64,
    mode: HueMode,
) -> Result<Rgb, ColorError> {
    let (hue, saturation, brightness) = validated::<M>(hue, saturation, brightness)?;
    let hue = resolve_hue(hue, mode)?;

    let s = saturation / 100.0;
    let v = brightness / 100.0;
    let h = hue / 60.0;

    let c = M::chroma(s, v);
    let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let sextant = Sextant::of(h);
    let m = M::offset(v, c);
    tracing::trace!(?sextant, c, x, m, "Selected hue sextant");

    let [r, g, b] = sextant.arrange(c, x);
    Ok(Rgb::new(channel(r + m), channel(g + m), channel(b + m)))
}
