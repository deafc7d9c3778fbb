//! Icon table entries.

pub mod table;

/// A glyph offered by the picker and the words it can be found by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconEntry {
    pub glyph: &'static str,
    pub keywords: &'static [&'static str],
}

impl IconEntry {
    pub const fn new(glyph: &'static str, keywords: &'static [&'static str]) -> Self {
        Self { glyph, keywords }
    }

    pub fn code_point(&self) -> Option<u32> {
        self.glyph.chars().next().map(u32::from)
    }
}
