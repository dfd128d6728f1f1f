//! Persisted picker settings.
//!
//! The only remembered value is the last selected color, stored as its
//! `#AARRGGBB` string in a small TOML document:
//!
//! ```toml
//! last_selected_color = "#FF197ED2"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::model::RgbaColor;
use crate::color::parse::parse_color;

/// Color used when nothing usable has been stored yet.
pub const DEFAULT_COLOR: RgbaColor = RgbaColor::from_argb(0xFF, 0x19, 0x7E, 0xD2);

/// TOML key holding the last selected color.
pub const SETTINGS_KEY: &str = "last_selected_color";

/// Errors when reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings parse error: {0}")]
    Deserialize(#[from] toml::de::Error),
    #[error("settings encode error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_selected_color: Option<String>,
}

impl ColorSettings {
    /// The remembered color, or [`DEFAULT_COLOR`] when it is missing or unreadable.
    pub fn last_color(&self) -> RgbaColor {
        let Some(stored) = self.last_selected_color.as_deref() else {
            return DEFAULT_COLOR;
        };

        match parse_color(stored) {
            Ok(color) => color,
            Err(err) => {
                tracing::warn!(
                    key = SETTINGS_KEY,
                    value = stored,
                    %err,
                    "ignoring stored color"
                );
                DEFAULT_COLOR
            }
        }
    }

    pub fn remember(&mut self, color: RgbaColor) {
        self.last_selected_color = Some(color.to_hex());
    }

    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };

        let settings = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Write settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        tracing::debug!(path = %path.display(), "saved settings");
        Ok(())
    }
}
