//! quillpad theme — quiet, paper-like chrome.
//!
//! Light fills, 1px ink outlines, no rounding. Uses egui's built-in font
//! families; the editor's own font comes from `fonts::FontConfig`.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub struct Ink;

impl Ink {
    pub const PAPER: Color32 = Color32::from_rgb(250, 249, 245);
    pub const BLACK: Color32 = Color32::from_rgb(20, 20, 20);
}

/// Theme configuration for the quillpad window.
pub struct QuillTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for QuillTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 20.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl QuillTheme {
    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();

        visuals.window_fill = Ink::PAPER;
        visuals.panel_fill = Ink::PAPER;
        visuals.faint_bg_color = Ink::PAPER;
        visuals.extreme_bg_color = Ink::PAPER;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, Ink::BLACK);

        let flat = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = Ink::PAPER;
            ws.bg_stroke = Stroke::new(1.0, Ink::BLACK);
            ws.fg_stroke = Stroke::new(1.0, Ink::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        flat(&mut visuals.widgets.noninteractive);
        flat(&mut visuals.widgets.inactive);
        flat(&mut visuals.widgets.hovered);
        flat(&mut visuals.widgets.active);
        flat(&mut visuals.widgets.open);

        visuals.selection.bg_fill = Color32::from_rgba_premultiplied(20, 20, 20, 70);
        visuals.selection.stroke = Stroke::new(1.0, Ink::BLACK);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Title bar: paper fill, 1px ink border.
    pub fn title_bar_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(Ink::PAPER)
            .stroke(Stroke::new(1.0, Ink::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
    }
}

/// Menu bar styling helper.
pub fn menu_bar(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(Ink::PAPER)
        .stroke(Stroke::new(1.0, Ink::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| {
            ui.horizontal(add_contents);
        });
}

/// Drop key events egui would otherwise hijack before the app sees them.
/// Call at the top of update():
/// - Tab: prevents widget-focus navigation (the editor inserts it instead)
/// - Cmd+/Cmd-/Cmd=: prevents zoom scaling
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|e| match e {
            egui::Event::Key { key, modifiers, .. }
                if modifiers.command
                    && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals) =>
            {
                false
            }
            _ => true,
        });
    });
}
