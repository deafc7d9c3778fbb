use crate::prelude::*;
use crate::ui::grid_keys;

const SEARCH_BOX_WIDTH: f32 = 140.0;
const BROWSE_PREVIEW_SIZE: f32 = 16.0;

enum ButtonAction {
    Browse,
    Accept,
    Reject,
}

impl PickerDialog {
    /// Draw the dialog for this frame. Returns the outcome once it has closed.
    pub fn show(&mut self, ctx: &Context) -> Option<DialogOutcome> {
        if !self.is_open() {
            return self.outcome().cloned();
        }

        let font = icon_font();
        let icon_size = self
            .icon_size
            .unwrap_or_else(|| icon_font_size_pixels(&ctx.style()));
        let cell = (icon_size + self.grid_padding) as f32;
        let glyph_font = font.font_id(icon_size);

        // Typing goes to the grid only while nothing else holds focus.
        let focused = ctx.memory(|m| m.focused());
        let grid_focused = focused.is_none() || focused == self.focused_cell;
        let search_focused = focused == Some(self.search_edit_id());
        if self.grid.is_searching()
            && (grid_focused || search_focused)
            && ctx.input(|i| i.key_pressed(Key::Escape))
        {
            self.stop_search(ctx);
        } else if grid_focused {
            for key in grid_keys(ctx) {
                self.handle_key(key);
            }
        }
        if !self.is_open() {
            return self.outcome().cloned();
        }

        let mut open = true;
        let mut window = egui::Window::new(self.title.clone())
            .id(self.id)
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_size([DIALOG_WIDTH, DIALOG_HEIGHT]);
        if let Some(geometry) = self.geometry {
            window = window
                .default_pos(geometry.position())
                .default_size(geometry.size());
        }

        let mut action = None;
        let shown = window.show(ctx, |ui| {
            let footer = ui.spacing().interact_size.y + 2.0 * ui.spacing().item_spacing.y + 8.0;
            let grid_size = egui::vec2(
                ui.available_width(),
                (ui.available_height() - footer).max(cell),
            );
            let grid = ui
                .allocate_ui(grid_size, |ui| self.grid.show(ui, glyph_font, cell))
                .inner;
            self.focused_cell = grid.inner;
            let grid_rect = grid.response.rect;

            ui.separator();
            ui.horizontal(|ui| {
                if self.browse_button(ui).clicked() {
                    action = Some(ButtonAction::Browse);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Cancel").clicked() {
                        action = Some(ButtonAction::Reject);
                    }
                    if ui.button("OK").clicked() {
                        action = Some(ButtonAction::Accept);
                    }
                });
            });
            grid_rect
        });

        if let Some(shown) = shown {
            self.set_geometry(WindowGeometry::from_rect(shown.response.rect));
            if let Some(grid_rect) = shown.inner {
                self.show_search_box(ctx, grid_rect);
            }
        }

        self.process_grid_events();
        match action {
            Some(ButtonAction::Browse) => self.browse(),
            Some(ButtonAction::Accept) => self.accept_current(),
            Some(ButtonAction::Reject) => self.reject(),
            None if !open => self.reject(),
            None => {}
        }

        self.outcome().cloned()
    }

    fn browse_button(&self, ui: &mut Ui) -> egui::Response {
        match IconChoice::parse(self.selected_icon()) {
            Some(IconChoice::File(path)) => {
                let preview = egui::Image::from_uri(format!("file://{}", path.display()))
                    .fit_to_exact_size(Vec2::splat(BROWSE_PREVIEW_SIZE));
                ui.add(egui::Button::image_and_text(preview, "Browse..."))
                    .on_hover_text(path.display().to_string())
            }
            _ => ui.button("Browse..."),
        }
    }

    fn search_edit_id(&self) -> egui::Id {
        self.id.with("search_edit")
    }

    /// Inline search field pinned to the bottom-right corner of the grid.
    fn show_search_box(&mut self, ctx: &Context, grid_rect: egui::Rect) {
        let edit_id = self.search_edit_id();
        let Some(search) = self.grid.search_mut() else {
            return;
        };
        let mut text = search.text.clone();
        let needs_focus = std::mem::take(&mut search.needs_focus);

        let output = egui::Area::new(self.id.with("search"))
            .order(egui::Order::Foreground)
            .pivot(Align2::RIGHT_BOTTOM)
            .fixed_pos(grid_rect.right_bottom())
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .show(ui, |ui| {
                        TextEdit::singleline(&mut text)
                            .id(edit_id)
                            .desired_width(SEARCH_BOX_WIDTH)
                            .hint_text("Search")
                            .show(ui)
                    })
                    .inner
            })
            .inner;

        if needs_focus {
            output.response.request_focus();
            let mut state = output.state.clone();
            let end = egui::text::CCursor::new(text.chars().count());
            state
                .cursor
                .set_char_range(Some(egui::text::CCursorRange::one(end)));
            state.store(ctx, edit_id);
        }

        let submitted = output.response.lost_focus() && ctx.input(|i| i.key_pressed(Key::Enter));
        if output.response.changed() {
            self.grid.set_search_text(&text);
            if !self.grid.is_searching() {
                ctx.memory_mut(|m| m.surrender_focus(edit_id));
            }
        }
        if submitted {
            self.grid.activate_current();
        }
    }

    fn stop_search(&mut self, ctx: &Context) {
        self.grid.stop_search();
        let edit_id = self.search_edit_id();
        ctx.memory_mut(|m| m.surrender_focus(edit_id));
    }
}
