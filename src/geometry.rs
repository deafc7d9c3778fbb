//! Window geometry persistence, keyed by dialog identity.

use crate::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct WindowGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl WindowGeometry {
    pub fn from_rect(rect: egui::Rect) -> Self {
        Self {
            x: rect.min.x,
            y: rect.min.y,
            width: rect.width(),
            height: rect.height(),
        }
    }

    pub fn position(&self) -> egui::Pos2 {
        egui::pos2(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        egui::vec2(self.width, self.height)
    }
}

/// Storage for window geometries.
pub trait GeometryStore {
    fn restore(&self, key: &str) -> Option<WindowGeometry>;
    fn save(&mut self, key: &str, geometry: WindowGeometry);
}

/// Geometry stores are shared between the host and the dialogs it opens.
pub type SharedGeometryStore = Rc<RefCell<dyn GeometryStore>>;

/// Keeps geometries for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryGeometryStore {
    entries: BTreeMap<String, WindowGeometry>,
}

impl GeometryStore for MemoryGeometryStore {
    fn restore(&self, key: &str) -> Option<WindowGeometry> {
        self.entries.get(key).copied()
    }

    fn save(&mut self, key: &str, geometry: WindowGeometry) {
        self.entries.insert(key.to_string(), geometry);
    }
}

/// Geometries kept in a TOML file, one table per dialog.
#[derive(Debug)]
pub struct TomlGeometryStore {
    path: PathBuf,
    entries: BTreeMap<String, WindowGeometry>,
}

impl TomlGeometryStore {
    /// Open the store; a missing file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PickerError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!("Geometry store {} opened", path.display());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self) -> Result<(), PickerError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

impl GeometryStore for TomlGeometryStore {
    fn restore(&self, key: &str) -> Option<WindowGeometry> {
        self.entries.get(key).copied()
    }

    fn save(&mut self, key: &str, geometry: WindowGeometry) {
        self.entries.insert(key.to_string(), geometry);
        if let Err(e) = self.write() {
            warn!("Failed to save window geometry to {}: {}", self.path.display(), e);
        }
    }
}
