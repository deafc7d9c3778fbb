//! Icon picker for egui applications.
//!
//! Loads a symbolic icon font, sizes glyphs to fit arbitrary boxes and offers
//! a searchable grid of icons in a modal dialog. The dialog reports either a
//! glyph or the path of an image file chosen through the native file picker.

pub mod config;
pub mod dialog;
pub mod error;
pub mod file_picker;
pub mod font;
pub mod geometry;
pub mod grid;
pub mod icons;
pub mod prelude;
pub mod ui;

pub use dialog::{DialogCode, DialogOutcome, IconChoice, PickerDialog};
pub use error::PickerError;
pub use font::{IconFont, icon_font, load_icon_font};
