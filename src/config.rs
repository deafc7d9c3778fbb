//! Application-wide configuration constants and user settings.

use crate::prelude::*;
use serde::{Deserialize, Serialize};

pub const NAME: &str = concat!("Icon Picker ", env!("CARGO_PKG_VERSION"));
/// Default host window width.
pub const WIN_WIDTH: f32 = 480.0;
/// Default host window height.
pub const WIN_HEIGHT: f32 = 360.0;
/// Default picker dialog size, used until a geometry has been saved.
pub const DIALOG_WIDTH: f32 = 420.0;
pub const DIALOG_HEIGHT: f32 = 360.0;
/// Pixel size at which glyph metrics are measured before scaling.
pub const ICON_FONT_REFERENCE_SIZE: u32 = 128;
/// Extra space around each glyph in the grid.
pub const GRID_PADDING: u32 = 8;
/// Sizes at which a scalable font is considered smooth.
pub const DEFAULT_SMOOTH_SIZES: [u32; 18] =
    [6, 7, 8, 9, 10, 11, 12, 14, 16, 18, 20, 22, 24, 26, 28, 36, 48, 72];
/// Image formats offered by the Browse button.
pub const ICON_FILE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "ico", "svg"];
/// Environment variable naming the settings file.
pub const SETTINGS_ENV: &str = "ICON_PICKER_CONFIG";
/// Seconds a status message stays visible.
pub const STATUS_TIMEOUT: u64 = 3;

/// How glyph sizes are chosen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FontSettings {
    pub snap_to_smooth_sizes: bool,
    /// Sorted ascending; re-sorted on load.
    pub smooth_sizes: Vec<u32>,
    /// Overrides the toolkit's small icon metric.
    pub icon_size: Option<u32>,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            snap_to_smooth_sizes: true,
            smooth_sizes: DEFAULT_SMOOTH_SIZES.to_vec(),
            icon_size: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DialogSettings {
    pub title: String,
    pub grid_padding: u32,
    pub geometry_file: Option<PathBuf>,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            title: "Select Icon".to_string(),
            grid_padding: GRID_PADDING,
            geometry_file: None,
        }
    }
}

/// User settings, read from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub font: FontSettings,
    pub dialog: DialogSettings,
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self, PickerError> {
        let mut settings: Settings = toml::from_str(text)?;
        settings.font.smooth_sizes.sort_unstable();
        settings.font.smooth_sizes.dedup();
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, PickerError> {
        let text = fs::read_to_string(path)?;
        let settings = Self::from_toml(&text)?;
        debug!("Settings loaded from {}", path.display());
        Ok(settings)
    }

    /// Settings from `$ICON_PICKER_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self, PickerError> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PickerError> {
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    pub fn sizing_policy(&self) -> SizingPolicy {
        if self.font.snap_to_smooth_sizes {
            SizingPolicy::Smooth(self.font.smooth_sizes.clone())
        } else {
            SizingPolicy::Exact
        }
    }
}
