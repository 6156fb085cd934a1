//! quillpad — a minimal word processor.
//!
//! One window, one plain-text document: type, open, save.

mod app;

use app::QuillpadApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title("quillpad"),
        ..Default::default()
    };

    eframe::run_native(
        "quillpad",
        options,
        Box::new(|cc| {
            quillcore::QuillTheme::default().apply(&cc.egui_ctx);
            Box::new(QuillpadApp::new(cc))
        }),
    )
}
