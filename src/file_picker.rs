//! Native file selection for icons loaded from image files.

use crate::prelude::*;

#[macro_export]
macro_rules! icon_file_filters {
    () => {{
        rfd::FileDialog::new().add_filter("Image Files", &$crate::config::ICON_FILE_EXTENSIONS)
    }};
}

/// Asks the user for an image file.
pub trait FilePicker {
    /// `current` is the icon value the prompt starts from. `None` on cancel.
    fn pick_icon_file(&mut self, current: &str) -> Option<PathBuf>;
}

/// Native dialog through `rfd`.
#[derive(Debug, Default)]
pub struct RfdFilePicker;

impl FilePicker for RfdFilePicker {
    fn pick_icon_file(&mut self, current: &str) -> Option<PathBuf> {
        let mut dialog = crate::icon_file_filters!().set_title("Open Icon File");
        let current = Path::new(current);
        if current.is_dir() {
            dialog = dialog.set_directory(current);
        } else if let Some(parent) = current.parent().filter(|p| p.is_dir()) {
            dialog = dialog.set_directory(parent);
            if let Some(name) = current.file_name().and_then(|n| n.to_str()) {
                dialog = dialog.set_file_name(name);
            }
        }
        dialog.pick_file()
    }
}
