//! Theme palettes and light/dark color mode
//!
//! Gradients are kept as CSS strings so that any rendering surface can use
//! them directly; the terminal surface maps palettes to its own colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

const NIGHT_GRADIENT: &str = "linear-gradient(135deg, #232526 0%, #414345 100%)";
const CLASSIC_GRADIENT: &str = "linear-gradient(135deg, #89f7fe 0%, #66a6ff 100%)";

/// Light or dark color mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ColorMode {
    /// Light backgrounds, dark text
    #[default]
    Light,
    /// Dark backgrounds, light text
    Dark,
}

impl ColorMode {
    /// The opposite mode
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark mode
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(DomainError::UnknownColorMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for ColorMode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Selectable color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ThemePalette {
    /// Cyan to blue
    #[default]
    Classic,
    /// Teal to deep blue
    Ocean,
    /// Orange to coral
    Sunset,
    /// Violet, periwinkle and mint
    Aurora,
    /// Charcoal greys
    Night,
}

impl ThemePalette {
    /// All palettes in picker order
    pub const ALL: [Self; 5] = [
        Self::Classic,
        Self::Ocean,
        Self::Sunset,
        Self::Aurora,
        Self::Night,
    ];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Ocean => "Ocean",
            Self::Sunset => "Sunset",
            Self::Aurora => "Aurora",
            Self::Night => "Night",
        }
    }

    /// CSS background gradient
    #[must_use]
    pub const fn gradient(self) -> &'static str {
        match self {
            Self::Classic => CLASSIC_GRADIENT,
            Self::Ocean => "linear-gradient(135deg, #43cea2 0%, #185a9d 100%)",
            Self::Sunset => "linear-gradient(135deg, #ff9966 0%, #ff5e62 100%)",
            Self::Aurora => "linear-gradient(135deg, #7f7fd5 0%, #86a8e7 50%, #91eac9 100%)",
            Self::Night => NIGHT_GRADIENT,
        }
    }
}

impl fmt::Display for ThemePalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemePalette {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|palette| palette.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownTheme(s.to_string()))
    }
}

impl TryFrom<String> for ThemePalette {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Background gradient for a condition label (e.g. "Rain") in a given mode
///
/// Dark mode always uses the night gradient.
#[must_use]
pub fn background_gradient(condition_main: &str, mode: ColorMode) -> &'static str {
    if mode.is_dark() {
        return NIGHT_GRADIENT;
    }
    match condition_main {
        "Clear" => "linear-gradient(135deg, #56ccf2 0%, #2f80ed 100%)",
        "Clouds" => "linear-gradient(135deg, #bdc3c7 0%, #2c3e50 100%)",
        "Rain" => "linear-gradient(135deg, #4e54c8 0%, #8f94fb 100%)",
        "Thunderstorm" => NIGHT_GRADIENT,
        "Snow" => "linear-gradient(135deg, #e0eafc 0%, #cfdef3 100%)",
        _ => CLASSIC_GRADIENT,
    }
}
