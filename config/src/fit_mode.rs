// SPDX-License-Identifier: MPL-2.0

//! How an image is placed onto the root window.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scaling and positioning strategy for the wallpaper image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Draw the image unscaled in the middle of each monitor.
    Center,
    /// Preserve aspect ratio, crop to fill the monitor.
    Zoom,
    /// Scale to exactly the monitor size, ignoring aspect ratio.
    #[default]
    Stretch,
    /// Preserve aspect ratio, letterbox to fit inside the monitor.
    Fit,
    /// Repeat the image unscaled across the monitor.
    Tile,
}

impl FitMode {
    pub const ALL: [Self; 5] = [Self::Center, Self::Zoom, Self::Stretch, Self::Fit, Self::Tile];

    /// Looks up a mode by any of its accepted names.
    ///
    /// The empty string selects [`FitMode::Zoom`]. Matching is case-sensitive.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "center" => Some(Self::Center),
            "zoom" | "zoomed" | "fill" | "max" | "" => Some(Self::Zoom),
            "scale" | "scaled" | "stretch" | "stretched" => Some(Self::Stretch),
            "fit" => Some(Self::Fit),
            "tile" | "tiled" => Some(Self::Tile),
            _ => None,
        }
    }

    /// Canonical name of the mode.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Zoom => "zoom",
            Self::Stretch => "stretch",
            Self::Fit => "fit",
            Self::Tile => "tile",
        }
    }

    /// Every name [`FitMode::parse`] accepts for this mode.
    #[must_use]
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            Self::Center => &["center"],
            Self::Zoom => &["zoom", "zoomed", "fill", "max"],
            Self::Stretch => &["scale", "scaled", "stretch", "stretched"],
            Self::Fit => &["fit"],
            Self::Tile => &["tile", "tiled"],
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known fit mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fit mode {0:?} (expected one of: center, zoom, stretch, fit, tile)")]
pub struct UnknownFitMode(pub String);

impl FromStr for FitMode {
    type Err = UnknownFitMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownFitMode(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::FitMode;

    #[test]
    fn every_synonym_maps_back_to_its_mode() {
        for mode in FitMode::ALL {
            for name in mode.synonyms() {
                assert_eq!(FitMode::parse(name), Some(mode), "synonym {name}");
            }
            assert_eq!(FitMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn empty_name_means_zoom() {
        assert_eq!(FitMode::parse(""), Some(FitMode::Zoom));
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in ["Zoom", "CENTER", " fit", "tiles", "stretch-ed", "fit-auto", "none"] {
            assert_eq!(FitMode::parse(name), None, "{name:?} should be rejected");
        }
    }

    #[test]
    fn from_str_error_names_input() {
        let err = "wobble".parse::<FitMode>().unwrap_err();
        assert!(err.to_string().contains("\"wobble\""));
    }

    #[test]
    fn default_is_stretch() {
        assert_eq!(FitMode::default(), FitMode::Stretch);
    }
}
