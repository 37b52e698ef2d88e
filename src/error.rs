use std::fmt;

use thiserror::Error;

/// Which component of an HSL/HSV triple an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Hue,
    Saturation,
    Lightness,
    Value,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Hue => "Hue",
            Component::Saturation => "Saturation",
            Component::Lightness => "Lightness",
            Component::Value => "Value",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("{component} must be finite, got {value}")]
    NotFinite { component: Component, value: f64 },

    #[error("{component} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        component: Component,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Hue out of range: {0} (expected 0..360)")]
    HueOutOfRange(f64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse options: {0}")]
    Parse(#[from] serde_yaml::Error),
}
