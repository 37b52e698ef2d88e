use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How the inverse converters treat a hue outside `0..360`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HueMode {
    /// Leave the hue alone. No sextant matches, so only the offset reaches
    /// the channels: fully saturated input comes out black.
    #[default]
    Fallback,

    /// Normalize into `0..360` first, so 360 is red and -30 is 330.
    Wrap,

    /// Refuse the input with [`ColorError::HueOutOfRange`](crate::ColorError::HueOutOfRange).
    Reject,
}

/// Conversion options, loadable from YAML.
///
/// ```yaml
/// hue_mode: wrap
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Out-of-range hue policy for HSL/HSV to RGB
    #[serde(default)]
    pub hue_mode: HueMode,
}

impl ConvertOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the out-of-range hue policy.
    #[inline]
    pub fn hue_mode(mut self, mode: HueMode) -> Self {
        self.hue_mode = mode;
        self
    }

    /// Parse options from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_yaml::from_str(yaml)?;
        tracing::info!(hue_mode = ?options.hue_mode, "Loaded conversion options");
        Ok(options)
    }

    /// Parse options from YAML, falling back to defaults on error.
    pub fn load_or_default(yaml: &str) -> Self {
        match Self::from_yaml_str(yaml) {
            Ok(options) => options,
            Err(e) => {
                tracing::warn!(%e, "Failed to parse conversion options, using defaults");
                Self::default()
            }
        }
    }
}
