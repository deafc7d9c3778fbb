//! Unified error type for the icon picker.

use thiserror::Error;

/// All errors that can occur while loading resources or settings.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings: {0}")]
    SettingsParse(#[from] toml::de::Error),
    #[error("Cannot serialise settings: {0}")]
    SettingsWrite(#[from] toml::ser::Error),
    #[error("Font resource '{name}' could not be parsed: {reason}")]
    FontParse { name: String, reason: String },
    #[error("Font resource '{0}' has no family name")]
    FontFamilyMissing(String),
}
