//! egui rendering for the grid, the dialog and the host status line.

pub mod dialog_view;
pub mod grid_view;
pub mod status;

pub use status::{StatusLevel, StatusLine};

use crate::prelude::*;

/// Translate this frame's key presses into grid input.
pub fn grid_keys(ctx: &Context) -> Vec<GridKey> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Text(text) => Some(GridKey::Text(text.clone())),
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } if modifiers.is_none() => match key {
                    Key::Enter => Some(GridKey::Enter),
                    Key::Escape => Some(GridKey::Escape),
                    Key::Backspace => Some(GridKey::Backspace),
                    Key::ArrowLeft => Some(GridKey::Left),
                    Key::ArrowRight => Some(GridKey::Right),
                    Key::ArrowUp => Some(GridKey::Up),
                    Key::ArrowDown => Some(GridKey::Down),
                    Key::Home => Some(GridKey::Home),
                    Key::End => Some(GridKey::End),
                    _ => None,
                },
                _ => None,
            })
            .collect()
    })
}
