//! Small custom widgets shared by the quillpad chrome.

use crate::theme::Ink;
use egui::{Response, Ui, Widget};

/// Status bar: paper fill, 1px ink border.
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(Ink::PAPER)
        .stroke(egui::Stroke::new(1.0, Ink::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}

/// One row in the open/save prompt: icon, name, solid fill when selected.
pub struct DirListItem<'a> {
    name: &'a str,
    is_directory: bool,
    selected: bool,
}

impl<'a> DirListItem<'a> {
    pub fn new(name: &'a str, is_directory: bool) -> Self {
        Self {
            name,
            is_directory,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> Widget for DirListItem<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let height = 20.0;
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), height),
            egui::Sense::click(),
        );

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            let (fill, text_color) = if self.selected {
                (Ink::BLACK, Ink::PAPER)
            } else if response.hovered() {
                (egui::Color32::from_rgb(230, 228, 220), Ink::BLACK)
            } else {
                (Ink::PAPER, Ink::BLACK)
            };
            painter.rect_filled(rect, 0.0, fill);

            let icon = if self.is_directory { "📁" } else { "📄" };
            painter.text(
                egui::pos2(rect.min.x + 12.0, rect.center().y),
                egui::Align2::CENTER_CENTER,
                icon,
                egui::FontId::proportional(12.0),
                text_color,
            );
            painter.text(
                egui::pos2(rect.min.x + 24.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                self.name,
                egui::FontId::proportional(12.0),
                text_color,
            );
        }

        response
    }
}
