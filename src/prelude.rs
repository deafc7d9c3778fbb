// std
pub use std::cell::RefCell;
pub use std::collections::BTreeMap;
pub use std::fs;
pub use std::path::{Path, PathBuf};
pub use std::rc::Rc;
pub use std::sync::{Arc, OnceLock};
pub use std::time::{Duration, Instant};

// external crates
pub use eframe::egui::{
    self, Align2, Color32, Context, FontData, FontDefinitions, FontFamily, FontId, Key, RichText,
    TextEdit, Ui, Vec2,
};
pub use log::{debug, info, warn};

// crate modules
pub use crate::{
    config::*,
    dialog::{DialogCode, DialogOutcome, IconChoice, PickerDialog},
    error::PickerError,
    file_picker::{FilePicker, RfdFilePicker},
    font::{IconFont, SizingPolicy, icon_font, icon_font_size_pixels, load_icon_font},
    geometry::{GeometryStore, MemoryGeometryStore, SharedGeometryStore, TomlGeometryStore, WindowGeometry},
    grid::{FilterableGrid, GridEvent, GridKey, IconItem},
    icons::{IconEntry, table::ICONS},
};
