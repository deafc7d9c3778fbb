use crate::prelude::*;

impl FilterableGrid {
    /// Draw the visible items as square cells of side `cell`, wrapping rows
    /// to the available width. The inner value is the cell holding keyboard
    /// focus, if any.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        glyph_font: FontId,
        cell: f32,
    ) -> egui::InnerResponse<Option<egui::Id>> {
        let spacing = ui.spacing().item_spacing.x;
        let columns = ((ui.available_width() + spacing) / (cell + spacing)).floor() as usize;
        self.set_columns(columns);
        let scroll_to_current = self.take_scroll_request();
        let mut focused_cell = None;

        let response = egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for row in self.visible_indices() {
                        let (glyph, tooltip) = match self.item(row) {
                            Some(item) => (
                                item.glyph().unwrap_or_default().to_owned(),
                                item.tooltip().to_owned(),
                            ),
                            None => continue,
                        };

                        let label = RichText::new(glyph).font(glyph_font.clone());
                        let mut response = ui.add_sized(
                            [cell, cell],
                            egui::SelectableLabel::new(self.is_selected(row), label),
                        );
                        if !tooltip.is_empty() {
                            response = response.on_hover_text(tooltip);
                        }
                        if scroll_to_current && self.current() == Some(row) {
                            response.scroll_to_me(None);
                        }
                        if response.has_focus() {
                            focused_cell = Some(response.id);
                        }

                        if response.double_clicked() {
                            self.activate(row);
                        } else if response.clicked() {
                            self.click(row);
                        }
                    }
                })
            })
            .inner
            .response;

        egui::InnerResponse::new(focused_cell, response)
    }
}
