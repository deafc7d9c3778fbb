//! Modal icon picker dialog.
//!
//! The dialog owns a [`FilterableGrid`] and turns its activations, the OK,
//! Cancel and Browse buttons into one outcome. Drawing lives in
//! `ui::dialog_view`; everything here can be driven without a window.

use crate::prelude::*;
use std::fmt;

/// Identity under which the dialog geometry is stored.
pub const DIALOG_KEY: &str = "icon_select_dialog";

/// The icon the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconChoice {
    Glyph(String),
    File(PathBuf),
}

impl IconChoice {
    /// A single character is a glyph, anything longer a file path.
    pub fn parse(icon: &str) -> Option<Self> {
        let mut chars = icon.chars();
        match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(_), None) => Some(IconChoice::Glyph(icon.to_string())),
            _ => Some(IconChoice::File(PathBuf::from(icon))),
        }
    }

    pub fn to_icon_string(&self) -> String {
        match self {
            IconChoice::Glyph(glyph) => glyph.clone(),
            IconChoice::File(path) => path.to_string_lossy().into_owned(),
        }
    }
}

impl fmt::Display for IconChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_icon_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogCode {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Accepted(IconChoice),
    Rejected,
}

impl DialogOutcome {
    pub fn code(&self) -> DialogCode {
        match self {
            DialogOutcome::Accepted(_) => DialogCode::Accepted,
            DialogOutcome::Rejected => DialogCode::Rejected,
        }
    }
}

type IconSelectedCallback = Box<dyn FnMut(&str)>;

pub struct PickerDialog {
    pub(crate) id: egui::Id,
    pub(crate) title: String,
    pub(crate) grid: FilterableGrid,
    pub(crate) icon_size: Option<u32>,
    pub(crate) grid_padding: u32,
    pub(crate) geometry: Option<WindowGeometry>,
    /// Grid cell that held keyboard focus last frame.
    pub(crate) focused_cell: Option<egui::Id>,
    selected_icon: String,
    outcome: Option<DialogOutcome>,
    file_picker: Box<dyn FilePicker>,
    geometry_store: Option<SharedGeometryStore>,
    on_icon_selected: Vec<IconSelectedCallback>,
}

impl PickerDialog {
    /// Open a dialog over `icons`, preselecting `default_icon` if it is one of them.
    pub fn new(default_icon: impl Into<String>, icons: &[IconEntry]) -> Self {
        let selected_icon = default_icon.into();
        let mut grid = FilterableGrid::new();
        grid.populate(icons);
        if let Some(row) = grid.row_of(&selected_icon) {
            grid.set_current(Some(row));
        }
        info!("Icon dialog opened with {} icons", icons.len());

        Self {
            id: egui::Id::new(DIALOG_KEY),
            title: DialogSettings::default().title,
            grid,
            icon_size: None,
            grid_padding: GRID_PADDING,
            geometry: None,
            focused_cell: None,
            selected_icon,
            outcome: None,
            file_picker: Box::new(RfdFilePicker),
            geometry_store: None,
            on_icon_selected: Vec::new(),
        }
    }

    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.title = settings.dialog.title.clone();
        self.grid_padding = settings.dialog.grid_padding;
        self.icon_size = settings.font.icon_size;
        self
    }

    pub fn with_file_picker(mut self, picker: impl FilePicker + 'static) -> Self {
        self.file_picker = Box::new(picker);
        self
    }

    /// Restores the previous window geometry from `store`, saving to it on close.
    pub fn with_geometry_store(mut self, store: SharedGeometryStore) -> Self {
        self.geometry = store.borrow().restore(DIALOG_KEY);
        self.geometry_store = Some(store);
        self
    }

    /// Called with the chosen icon when the dialog is accepted.
    pub fn on_icon_selected(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_icon_selected.push(Box::new(callback));
        self
    }

    pub fn grid(&self) -> &FilterableGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut FilterableGrid {
        &mut self.grid
    }

    /// Current icon value: the initial one until a choice is made.
    pub fn selected_icon(&self) -> &str {
        &self.selected_icon
    }

    pub fn outcome(&self) -> Option<&DialogOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.outcome.is_none()
    }

    /// Key press while the grid has focus.
    pub fn handle_key(&mut self, key: GridKey) {
        if !self.is_open() {
            return;
        }
        let handled = self.grid.handle_key(&key);
        self.process_grid_events();
        if !handled && key == GridKey::Escape {
            self.reject();
        }
    }

    pub fn process_grid_events(&mut self) {
        for event in self.grid.take_events() {
            match event {
                GridEvent::Activated(row) => self.icon_activated(row),
            }
        }
    }

    fn icon_activated(&mut self, row: usize) {
        let Some(glyph) = self.grid.item(row).and_then(IconItem::glyph) else {
            return;
        };
        self.selected_icon = glyph.to_string();
        self.accept();
    }

    /// OK button: take the selected grid icon, or reject if there is none.
    pub fn accept_current(&mut self) {
        match self.grid.selected_icon() {
            Some(glyph) => {
                self.selected_icon = glyph.to_string();
                self.accept();
            }
            None => self.reject(),
        }
    }

    /// Browse button: a chosen file becomes the icon; cancelling keeps the dialog open.
    pub fn browse(&mut self) {
        if !self.is_open() {
            return;
        }
        match self.file_picker.pick_icon_file(&self.selected_icon) {
            Some(path) => {
                self.selected_icon = path.to_string_lossy().into_owned();
                self.accept();
            }
            None => debug!("Icon file selection cancelled"),
        }
    }

    pub fn accept(&mut self) {
        self.done(DialogCode::Accepted);
    }

    pub fn reject(&mut self) {
        self.done(DialogCode::Rejected);
    }

    /// Close the dialog. Saves geometry and notifies listeners on acceptance.
    pub fn done(&mut self, code: DialogCode) {
        if !self.is_open() {
            return;
        }

        if let (Some(store), Some(geometry)) = (&self.geometry_store, self.geometry) {
            store.borrow_mut().save(DIALOG_KEY, geometry);
        }

        let outcome = match (code, IconChoice::parse(&self.selected_icon)) {
            (DialogCode::Accepted, Some(choice)) => {
                info!("Icon selected: {}", choice);
                for callback in &mut self.on_icon_selected {
                    callback(&self.selected_icon);
                }
                DialogOutcome::Accepted(choice)
            }
            (DialogCode::Accepted, None) => {
                warn!("Icon dialog accepted without an icon");
                DialogOutcome::Rejected
            }
            (DialogCode::Rejected, _) => {
                debug!("Icon dialog rejected");
                DialogOutcome::Rejected
            }
        };
        self.outcome = Some(outcome);
    }

    /// Geometry of the window as last drawn.
    pub fn set_geometry(&mut self, geometry: WindowGeometry) {
        self.geometry = Some(geometry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[IconEntry] = &[
        IconEntry::new("★", &["star", "favorite"]),
        IconEntry::new("✩", &["star outline", "rating"]),
        IconEntry::new("♥", &["heart", "love"]),
        IconEntry::new("☀", &["sun", "day"]),
    ];

    struct StubPicker(Option<&'static str>, Rc<RefCell<Vec<String>>>);

    impl FilePicker for StubPicker {
        fn pick_icon_file(&mut self, current: &str) -> Option<PathBuf> {
            self.1.borrow_mut().push(current.to_string());
            self.0.map(PathBuf::from)
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&str) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |icon: &str| sink.borrow_mut().push(icon.to_string()))
    }

    fn type_text(dialog: &mut PickerDialog, text: &str) {
        for c in text.chars() {
            dialog.handle_key(GridKey::Text(c.to_string()));
        }
    }

    #[test]
    fn default_icon_is_preselected_and_enter_accepts_it() {
        let (seen, callback) = recorder();
        let mut dialog = PickerDialog::new("★", TABLE).on_icon_selected(callback);
        assert_eq!(dialog.grid().current(), Some(1));
        assert!(dialog.grid().is_selected(1));

        dialog.handle_key(GridKey::Enter);
        assert_eq!(
            dialog.outcome(),
            Some(&DialogOutcome::Accepted(IconChoice::Glyph("★".to_string())))
        );
        assert_eq!(*seen.borrow(), vec!["★".to_string()]);
    }

    #[test]
    fn unknown_default_icon_selects_nothing() {
        let dialog = PickerDialog::new("/home/me/icon.png", TABLE);
        assert_eq!(dialog.grid().current(), None);
        assert_eq!(dialog.selected_icon(), "/home/me/icon.png");
    }

    #[test]
    fn typing_filters_and_escape_restores() {
        let mut dialog = PickerDialog::new("", TABLE);
        type_text(&mut dialog, "star");
        let visible: Vec<_> = dialog
            .grid()
            .visible_indices()
            .into_iter()
            .filter_map(|i| dialog.grid().items()[i].glyph())
            .collect();
        assert_eq!(visible, vec!["★", "✩"]);
        assert!(dialog.grid().items().iter().filter(|i| !i.hidden).all(|i| i.tooltip().contains("star")));

        dialog.handle_key(GridKey::Escape);
        assert!(dialog.is_open());
        assert!(!dialog.grid().is_searching());
        assert_eq!(dialog.grid().visible_indices().len(), TABLE.len() + 1);
    }

    #[test]
    fn escape_while_idle_rejects() {
        let (seen, callback) = recorder();
        let mut dialog = PickerDialog::new("★", TABLE).on_icon_selected(callback);
        dialog.handle_key(GridKey::Escape);
        assert_eq!(dialog.outcome(), Some(&DialogOutcome::Rejected));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn search_then_enter_accepts_first_match() {
        let mut dialog = PickerDialog::new("", TABLE);
        type_text(&mut dialog, "LOVE");
        dialog.handle_key(GridKey::Enter);
        assert_eq!(
            dialog.outcome(),
            Some(&DialogOutcome::Accepted(IconChoice::Glyph("♥".to_string())))
        );
    }

    #[test]
    fn browse_accepts_picked_file() {
        let prompts = Rc::new(RefCell::new(Vec::new()));
        let (seen, callback) = recorder();
        let mut dialog = PickerDialog::new("★", TABLE)
            .with_file_picker(StubPicker(Some("/tmp/pic.png"), Rc::clone(&prompts)))
            .on_icon_selected(callback);
        dialog.browse();
        assert_eq!(
            dialog.outcome(),
            Some(&DialogOutcome::Accepted(IconChoice::File(PathBuf::from("/tmp/pic.png"))))
        );
        assert_eq!(*prompts.borrow(), vec!["★".to_string()]);
        assert_eq!(*seen.borrow(), vec!["/tmp/pic.png".to_string()]);
    }

    #[test]
    fn cancelled_browse_keeps_dialog_open() {
        let prompts = Rc::new(RefCell::new(Vec::new()));
        let mut dialog = PickerDialog::new("♥", TABLE)
            .with_file_picker(StubPicker(None, Rc::clone(&prompts)));
        dialog.browse();
        assert!(dialog.is_open());
        assert_eq!(dialog.selected_icon(), "♥");
        assert_eq!(dialog.grid().current(), Some(3));
    }

    #[test]
    fn ok_without_selection_rejects() {
        let mut dialog = PickerDialog::new("", TABLE);
        dialog.accept_current();
        assert_eq!(dialog.outcome(), Some(&DialogOutcome::Rejected));
    }

    #[test]
    fn ok_with_deselected_item_rejects() {
        let mut dialog = PickerDialog::new("♥", TABLE);
        dialog.grid_mut().clear_selection();
        dialog.accept_current();
        assert_eq!(dialog.outcome().map(DialogOutcome::code), Some(DialogCode::Rejected));
    }

    #[test]
    fn ok_with_clicked_item_accepts() {
        let mut dialog = PickerDialog::new("", TABLE);
        dialog.grid_mut().click(4);
        dialog.accept_current();
        assert_eq!(
            dialog.outcome(),
            Some(&DialogOutcome::Accepted(IconChoice::Glyph("☀".to_string())))
        );
    }

    #[test]
    fn placeholder_is_not_a_valid_icon() {
        let mut dialog = PickerDialog::new("", TABLE);
        dialog.grid_mut().activate(0);
        dialog.process_grid_events();
        assert!(dialog.is_open());

        dialog.grid_mut().click(0);
        dialog.accept_current();
        assert_eq!(dialog.outcome(), Some(&DialogOutcome::Rejected));
    }

    #[test]
    fn double_click_accepts_item() {
        let mut dialog = PickerDialog::new("★", TABLE);
        dialog.grid_mut().activate(2);
        dialog.process_grid_events();
        assert_eq!(
            dialog.outcome(),
            Some(&DialogOutcome::Accepted(IconChoice::Glyph("✩".to_string())))
        );
    }

    #[test]
    fn closing_twice_keeps_first_outcome() {
        let (seen, callback) = recorder();
        let mut dialog = PickerDialog::new("★", TABLE).on_icon_selected(callback);
        dialog.accept_current();
        dialog.reject();
        dialog.handle_key(GridKey::Enter);
        assert_eq!(dialog.outcome().map(DialogOutcome::code), Some(DialogCode::Accepted));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn geometry_is_restored_and_saved() {
        let store: SharedGeometryStore = Rc::new(RefCell::new(MemoryGeometryStore::default()));
        let saved = WindowGeometry { x: 1.0, y: 2.0, width: 300.0, height: 250.0 };
        store.borrow_mut().save(DIALOG_KEY, saved);

        let mut dialog = PickerDialog::new("★", TABLE).with_geometry_store(Rc::clone(&store));
        assert_eq!(dialog.geometry, Some(saved));

        let moved = WindowGeometry { x: 50.0, ..saved };
        dialog.set_geometry(moved);
        dialog.reject();
        assert_eq!(store.borrow().restore(DIALOG_KEY), Some(moved));
    }

    #[test]
    fn settings_configure_dialog() {
        let mut settings = Settings::default();
        settings.dialog.title = "Choose".to_string();
        settings.dialog.grid_padding = 4;
        settings.font.icon_size = Some(30);
        let dialog = PickerDialog::new("", TABLE).with_settings(&settings);
        assert_eq!(dialog.title, "Choose");
        assert_eq!(dialog.grid_padding, 4);
        assert_eq!(dialog.icon_size, Some(30));
    }

    #[test]
    fn icon_choice_parsing() {
        assert_eq!(IconChoice::parse(""), None);
        assert_eq!(IconChoice::parse("★"), Some(IconChoice::Glyph("★".to_string())));
        assert_eq!(
            IconChoice::parse("/tmp/a.svg"),
            Some(IconChoice::File(PathBuf::from("/tmp/a.svg")))
        );
        assert_eq!(IconChoice::File(PathBuf::from("/tmp/a.svg")).to_string(), "/tmp/a.svg");
    }
}
