//! Filterable icon grid: items, current item and type-to-search.
//!
//! The grid only holds state. `ui::grid_view` draws it and feeds it input,
//! and the owning dialog drains the activation events.

use crate::prelude::*;

/// One cell of the grid.
#[derive(Debug, Clone)]
pub struct IconItem {
    glyph: Option<String>,
    tooltip: String,
    search_key: String,
    pub hidden: bool,
}

impl IconItem {
    /// The blank first cell, meaning "no icon".
    pub fn placeholder() -> Self {
        Self {
            glyph: None,
            tooltip: String::new(),
            search_key: String::new(),
            hidden: false,
        }
    }

    pub fn from_entry(entry: &IconEntry) -> Self {
        let tooltip = entry.keywords.join(", ");
        Self {
            glyph: Some(entry.glyph.to_string()),
            search_key: tooltip.to_lowercase(),
            tooltip,
            hidden: false,
        }
    }

    pub fn glyph(&self) -> Option<&str> {
        self.glyph.as_deref()
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// `needle` must already be lower-cased.
    fn matches(&self, needle: &str) -> bool {
        self.search_key.contains(needle)
    }
}

/// Keyboard input understood by the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridKey {
    Text(String),
    Backspace,
    Escape,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Notifications for the owner of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// An item with a glyph was double-clicked or confirmed with Enter.
    Activated(usize),
}

/// Inline search box state; exists only while searching.
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    pub text: String,
    /// Set when the box is created so the view can focus it once.
    pub needs_focus: bool,
}

pub struct FilterableGrid {
    items: Vec<IconItem>,
    current: Option<usize>,
    selected: bool,
    search: Option<SearchBox>,
    columns: usize,
    scroll_pending: bool,
    events: Vec<GridEvent>,
}

impl Default for FilterableGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterableGrid {
    pub fn new() -> Self {
        Self {
            items: vec![IconItem::placeholder()],
            current: None,
            selected: false,
            search: None,
            columns: 1,
            scroll_pending: false,
            events: Vec::new(),
        }
    }

    /// Replace all items with the placeholder followed by `entries`.
    pub fn populate(&mut self, entries: &[IconEntry]) {
        self.items.clear();
        self.items.push(IconItem::placeholder());
        self.items.extend(entries.iter().map(IconItem::from_entry));
        self.current = None;
        self.selected = false;
        self.search = None;
        debug!("Icon grid populated with {} icons", entries.len());
    }

    /// Append one icon, returning its row.
    pub fn add_icon(&mut self, entry: &IconEntry) -> usize {
        self.items.push(IconItem::from_entry(entry));
        self.items.len() - 1
    }

    pub fn items(&self) -> &[IconItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&IconItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rows of the items not hidden by the search.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.hidden)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn row_of(&self, glyph: &str) -> Option<usize> {
        self.items.iter().position(|item| item.glyph() == Some(glyph))
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected && self.current == Some(index)
    }

    /// Make `index` current and selected; `None` clears both.
    pub fn set_current(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| i < self.items.len());
        self.scroll_pending |= index.is_some() && index != self.current;
        self.current = index;
        self.selected = index.is_some();
    }

    /// Deselect without moving the current item.
    pub fn clear_selection(&mut self) {
        self.selected = false;
    }

    /// Glyph of the current item if it is selected and is a real icon.
    pub fn selected_icon(&self) -> Option<&str> {
        let index = self.current.filter(|_| self.selected)?;
        self.items.get(index)?.glyph()
    }

    /// True once after the current item moved, so the view can scroll to it.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }

    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    pub fn click(&mut self, index: usize) {
        self.set_current(Some(index));
    }

    /// Report activation of `index`. The placeholder has no glyph and is ignored.
    pub fn activate(&mut self, index: usize) {
        match self.items.get(index) {
            Some(item) if !item.hidden && item.glyph.is_some() => {
                self.set_current(Some(index));
                self.events.push(GridEvent::Activated(index));
            }
            Some(_) => debug!("Ignoring activation of row {} without an icon", index),
            None => warn!("Activated row {} is out of range", index),
        }
    }

    pub fn activate_current(&mut self) {
        if let Some(index) = self.current {
            self.activate(index);
        }
    }

    pub fn take_events(&mut self) -> Vec<GridEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn search(&self) -> Option<&SearchBox> {
        self.search.as_ref()
    }

    pub fn search_mut(&mut self) -> Option<&mut SearchBox> {
        self.search.as_mut()
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    /// Typed text while the grid has focus: opens the search box if needed
    /// and appends to it.
    pub fn keyboard_search(&mut self, text: &str) {
        let search = self.search.get_or_insert_with(|| {
            debug!("Icon search started");
            SearchBox {
                text: String::new(),
                needs_focus: true,
            }
        });
        search.text.push_str(text);
        let text = search.text.clone();
        self.search_text_changed(&text);
    }

    /// The search box was edited directly.
    pub fn set_search_text(&mut self, text: &str) {
        let Some(search) = self.search.as_mut() else {
            return;
        };
        if search.text != text {
            search.text = text.to_string();
        }
        self.search_text_changed(text);
    }

    fn search_text_changed(&mut self, text: &str) {
        if text.is_empty() {
            self.stop_search();
        } else {
            self.filter(text);
        }
    }

    /// Hide items not matching `text` and make the first match current.
    /// An empty `text` shows every item.
    pub fn filter(&mut self, text: &str) {
        let needle = text.to_lowercase();
        self.current = None;
        for (row, item) in self.items.iter_mut().enumerate() {
            let matches = item.matches(&needle);
            item.hidden = !matches;
            if matches && self.current.is_none() {
                self.current = Some(row);
            }
        }
        self.selected = self.current.is_some();
        self.scroll_pending |= self.current.is_some();
    }

    /// Drop the search box and show every item again.
    pub fn stop_search(&mut self) {
        if self.search.take().is_none() {
            return;
        }
        self.filter("");
        debug!("Icon search stopped");
    }

    /// Returns false for keys the grid leaves to its owner.
    pub fn handle_key(&mut self, key: &GridKey) -> bool {
        match key {
            GridKey::Text(text) => {
                if text.is_empty() || text.chars().any(char::is_control) {
                    return false;
                }
                self.keyboard_search(text);
                true
            }
            GridKey::Backspace => {
                let Some(search) = self.search.as_mut() else {
                    return false;
                };
                search.text.pop();
                let text = search.text.clone();
                self.search_text_changed(&text);
                true
            }
            GridKey::Escape => {
                if !self.is_searching() {
                    return false;
                }
                self.stop_search();
                true
            }
            GridKey::Enter => {
                if self.current.is_none() {
                    return false;
                }
                self.activate_current();
                true
            }
            GridKey::Left => self.move_current(-1),
            GridKey::Right => self.move_current(1),
            GridKey::Up => self.move_current(-(self.columns as isize)),
            GridKey::Down => self.move_current(self.columns as isize),
            GridKey::Home => self.move_current(isize::MIN),
            GridKey::End => self.move_current(isize::MAX),
        }
    }

    fn move_current(&mut self, delta: isize) -> bool {
        let visible = self.visible_indices();
        if visible.is_empty() {
            return false;
        }
        let position = self
            .current
            .and_then(|current| visible.iter().position(|&row| row == current));
        let target = match position {
            Some(pos) => (pos as isize).saturating_add(delta).clamp(0, visible.len() as isize - 1),
            None => 0,
        };
        self.set_current(Some(visible[target as usize]));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[IconEntry] = &[
        IconEntry::new("★", &["star", "favorite"]),
        IconEntry::new("☆", &["star outline", "rating"]),
        IconEntry::new("♥", &["heart", "love"]),
        IconEntry::new("☀", &["sun", "day"]),
        IconEntry::new("✎", &["pencil", "Edit"]),
    ];

    fn grid() -> FilterableGrid {
        let mut grid = FilterableGrid::new();
        grid.populate(TABLE);
        grid
    }

    fn visible_glyphs(grid: &FilterableGrid) -> Vec<Option<&str>> {
        grid.visible_indices()
            .into_iter()
            .map(|i| grid.items()[i].glyph())
            .collect()
    }

    #[test]
    fn populate_adds_placeholder_first() {
        let grid = grid();
        assert_eq!(grid.len(), TABLE.len() + 1);
        assert_eq!(grid.items()[0].glyph(), None);
        assert_eq!(grid.items()[1].tooltip(), "star, favorite");
        assert_eq!(grid.row_of("♥"), Some(3));
        assert_eq!(grid.current(), None);
    }

    #[test]
    fn filter_hides_non_matching_and_picks_first_match() {
        let mut grid = grid();
        grid.filter("star");
        assert_eq!(visible_glyphs(&grid), vec![Some("★"), Some("☆")]);
        assert_eq!(grid.current(), Some(1));
        assert_eq!(grid.selected_icon(), Some("★"));
    }

    #[test]
    fn filter_is_case_insensitive() {
        let mut grid = grid();
        grid.filter("EDIT");
        assert_eq!(visible_glyphs(&grid), vec![Some("✎")]);
    }

    #[test]
    fn filter_is_idempotent() {
        let mut once = grid();
        once.filter("a");
        let mut twice = grid();
        twice.filter("a");
        twice.filter("a");
        assert_eq!(once.visible_indices(), twice.visible_indices());
        assert_eq!(once.current(), twice.current());
    }

    #[test]
    fn filter_without_matches_clears_current() {
        let mut grid = grid();
        grid.filter("zzz");
        assert!(grid.visible_indices().is_empty());
        assert_eq!(grid.current(), None);
        assert_eq!(grid.selected_icon(), None);
    }

    #[test]
    fn typing_opens_search_and_backspacing_restores_everything() {
        let mut grid = grid();
        let before = grid.visible_indices();
        for c in ["s", "u"] {
            assert!(grid.handle_key(&GridKey::Text(c.to_string())));
        }
        assert_eq!(grid.search().map(|s| s.text.as_str()), Some("su"));
        assert_eq!(visible_glyphs(&grid), vec![Some("☀")]);

        assert!(grid.handle_key(&GridKey::Backspace));
        assert!(grid.is_searching());
        assert!(grid.handle_key(&GridKey::Backspace));
        assert!(!grid.is_searching());
        assert_eq!(grid.visible_indices(), before);
    }

    #[test]
    fn search_box_requests_focus_once_created() {
        let mut grid = grid();
        grid.keyboard_search("h");
        assert!(grid.search().unwrap().needs_focus);
        grid.search_mut().unwrap().needs_focus = false;
        grid.keyboard_search("e");
        assert!(!grid.search().unwrap().needs_focus);
        assert_eq!(grid.search().unwrap().text, "he");
    }

    #[test]
    fn escape_stops_search_only_while_searching() {
        let mut grid = grid();
        assert!(!grid.handle_key(&GridKey::Escape));
        grid.keyboard_search("heart");
        assert!(grid.handle_key(&GridKey::Escape));
        assert!(!grid.is_searching());
        assert_eq!(grid.visible_indices().len(), grid.len());
    }

    #[test]
    fn editing_search_box_to_empty_stops_search() {
        let mut grid = grid();
        grid.keyboard_search("sun");
        grid.set_search_text("s");
        assert_eq!(visible_glyphs(&grid).len(), 3);
        grid.set_search_text("");
        assert!(!grid.is_searching());
        assert!(grid.items().iter().all(|item| !item.hidden));
    }

    #[test]
    fn set_search_text_without_search_box_is_ignored() {
        let mut grid = grid();
        grid.set_search_text("sun");
        assert!(grid.visible_indices().len() == grid.len());
    }

    #[test]
    fn control_text_is_not_a_search() {
        let mut grid = grid();
        assert!(!grid.handle_key(&GridKey::Text("\u{8}".to_string())));
        assert!(!grid.handle_key(&GridKey::Text(String::new())));
        assert!(!grid.is_searching());
    }

    #[test]
    fn placeholder_is_never_activated() {
        let mut grid = grid();
        grid.activate(0);
        grid.set_current(Some(0));
        assert!(grid.handle_key(&GridKey::Enter));
        assert!(grid.take_events().is_empty());
        assert_eq!(grid.selected_icon(), None);
    }

    #[test]
    fn enter_activates_current_icon() {
        let mut grid = grid();
        grid.set_current(Some(3));
        assert!(grid.handle_key(&GridKey::Enter));
        assert_eq!(grid.take_events(), vec![GridEvent::Activated(3)]);
        assert!(grid.take_events().is_empty());
    }

    #[test]
    fn enter_without_current_is_left_to_owner() {
        let mut grid = grid();
        assert!(!grid.handle_key(&GridKey::Enter));
    }

    #[test]
    fn hidden_items_cannot_be_activated() {
        let mut grid = grid();
        grid.filter("heart");
        grid.activate(1);
        assert!(grid.take_events().is_empty());
    }

    #[test]
    fn arrows_move_among_visible_items() {
        let mut grid = grid();
        grid.set_columns(2);
        grid.set_current(Some(1));
        grid.handle_key(&GridKey::Right);
        assert_eq!(grid.current(), Some(2));
        grid.handle_key(&GridKey::Down);
        assert_eq!(grid.current(), Some(4));
        grid.handle_key(&GridKey::End);
        assert_eq!(grid.current(), Some(5));
        grid.handle_key(&GridKey::Right);
        assert_eq!(grid.current(), Some(5));
        grid.handle_key(&GridKey::Home);
        assert_eq!(grid.current(), Some(0));

        grid.filter("star");
        grid.handle_key(&GridKey::Right);
        assert_eq!(grid.current(), Some(2));
        grid.handle_key(&GridKey::Up);
        assert_eq!(grid.current(), Some(1));
    }

    #[test]
    fn clearing_selection_keeps_current() {
        let mut grid = grid();
        grid.click(2);
        assert_eq!(grid.selected_icon(), Some("☆"));
        grid.clear_selection();
        assert_eq!(grid.current(), Some(2));
        assert_eq!(grid.selected_icon(), None);
        assert!(!grid.is_selected(2));
    }

    #[test]
    fn moving_current_requests_scroll_once() {
        let mut grid = grid();
        grid.set_current(Some(2));
        assert!(grid.take_scroll_request());
        assert!(!grid.take_scroll_request());
        grid.set_current(Some(2));
        assert!(!grid.take_scroll_request());
    }

    #[test]
    fn add_icon_appends_row() {
        let mut grid = FilterableGrid::new();
        let row = grid.add_icon(&IconEntry::new("♪", &["music"]));
        assert_eq!(row, 1);
        assert_eq!(grid.item(row).and_then(IconItem::glyph), Some("♪"));
    }
}
