//! quillpad application: window state and UI.
//!
//! The session controller in quillcore decides what New/Open/Save/Save-As
//! mean; this module renders the window around it and feeds prompt results
//! into it. Undo/redo/cut/copy/paste are pass-throughs to the TextEdit
//! widget, driven from the menu by injecting input events.

use egui::{Align2, Context, Key};
use quillcore::fonts::{FontConfig, FontKind, SIZE_STEPS};
use quillcore::session::{Notice, SaveOutcome, Session};
use quillcore::storage::{config_dir, documents_dir, DirBrowser, RecentFiles};
use quillcore::store::DiskStore;
use quillcore::theme::{consume_special_keys, menu_bar, QuillTheme};
use quillcore::widgets::{status_bar, DirListItem};
use quillcore::Document;
use std::path::PathBuf;

#[derive(Clone, Copy, PartialEq)]
enum PromptMode {
    Open,
    Save,
}

/// Application state
pub struct QuillpadApp {
    document: Document,
    session: Session,
    store: DiskStore,
    recent_files: RecentFiles,
    font: FontConfig,
    /// Whether the open/save prompt is showing
    show_prompt: bool,
    prompt: DirBrowser,
    prompt_mode: PromptMode,
    /// Filename input in the save prompt
    save_filename: String,
    show_font_dialog: bool,
    /// Selection being edited in the font dialog, applied on "apply"
    font_draft: FontConfig,
    /// Pending error report from a failed open/save
    notice: Option<Notice>,
    /// Confirmation before New discards unsaved edits
    show_discard_confirm: bool,
    /// Confirmation before closing with unsaved edits
    show_close_confirm: bool,
    close_confirmed: bool,
    show_about: bool,
}

impl QuillpadApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let recent_path = config_dir("quillpad").join("recent.json");
        let recent_files = RecentFiles::load(&recent_path).unwrap_or_default();
        let font_path = config_dir("quillpad").join("font.json");
        let font = FontConfig::load(&font_path).unwrap_or_default();

        Self {
            document: Document::new(),
            session: Session::new(),
            store: DiskStore,
            recent_files,
            font,
            show_prompt: false,
            prompt: DirBrowser::new(documents_dir())
                .with_filter(vec!["txt".to_string(), "md".to_string()]),
            prompt_mode: PromptMode::Open,
            save_filename: String::new(),
            show_font_dialog: false,
            font_draft: font,
            notice: None,
            show_discard_confirm: false,
            show_close_confirm: false,
            close_confirmed: false,
            show_about: false,
        }
    }

    // ---------------------------------------------------------------
    // Session commands
    // ---------------------------------------------------------------

    fn request_new_document(&mut self) {
        if self.document.modified {
            self.show_discard_confirm = true;
        } else {
            self.new_document();
        }
    }

    fn new_document(&mut self) {
        self.session.new_document(&mut self.document);
    }

    fn open_file(&mut self, path: PathBuf) {
        if self.session.open(path.clone(), &mut self.document, &self.store) {
            self.recent_files.add(path);
            self.save_recent_files();
        } else {
            self.notice = self.session.take_notice();
        }
    }

    fn save_document(&mut self) {
        match self.session.save(&self.document, &self.store) {
            SaveOutcome::Saved => self.document.mark_clean(),
            SaveOutcome::NeedsPath => self.show_save_prompt(),
            SaveOutcome::Failed => self.notice = self.session.take_notice(),
        }
    }

    fn save_document_as(&mut self, path: PathBuf) {
        if self.session.save_as(path.clone(), &self.document, &self.store) {
            self.document.mark_clean();
            self.recent_files.add(path);
            self.save_recent_files();
        } else {
            self.notice = self.session.take_notice();
        }
    }

    fn show_open_prompt(&mut self) {
        self.prompt = DirBrowser::new(documents_dir())
            .with_filter(vec!["txt".to_string(), "md".to_string()]);
        self.prompt_mode = PromptMode::Open;
        self.show_prompt = true;
    }

    fn show_save_prompt(&mut self) {
        self.prompt = DirBrowser::new(documents_dir());
        self.prompt_mode = PromptMode::Save;
        self.save_filename = self.session.title();
        if !self.save_filename.ends_with(".txt") && !self.save_filename.ends_with(".md") {
            self.save_filename.push_str(".txt");
        }
        self.show_prompt = true;
    }

    fn save_recent_files(&self) {
        let recent_path = config_dir("quillpad").join("recent.json");
        if let Err(e) = self.recent_files.save(&recent_path) {
            log::warn!("could not persist recent files: {}", e);
        }
    }

    fn apply_font(&mut self, config: FontConfig) {
        self.font = config.clamped();
        self.font_draft = self.font;
        let font_path = config_dir("quillpad").join("font.json");
        if let Err(e) = self.font.save(&font_path) {
            log::warn!("could not persist font config: {}", e);
        }
    }

    fn display_title(&self) -> String {
        if self.document.modified {
            format!("{}*", self.session.title())
        } else {
            self.session.title()
        }
    }

    // ---------------------------------------------------------------
    // Edit pass-throughs
    //
    // TextEdit owns selection, clipboard, and undo state. Menu commands
    // reach it by injecting the matching input events.
    // ---------------------------------------------------------------

    fn inject_key(ctx: &Context, key: Key, modifiers: egui::Modifiers) {
        ctx.input_mut(|i| {
            i.events.push(egui::Event::Key {
                key,
                physical_key: Some(key),
                pressed: true,
                repeat: false,
                modifiers,
            });
        });
    }

    fn menu_undo(ctx: &Context) {
        Self::inject_key(ctx, Key::Z, egui::Modifiers::COMMAND);
    }

    fn menu_redo(ctx: &Context) {
        Self::inject_key(ctx, Key::Z, egui::Modifiers::COMMAND | egui::Modifiers::SHIFT);
    }

    fn menu_cut(ctx: &Context) {
        ctx.input_mut(|i| i.events.push(egui::Event::Cut));
    }

    fn menu_copy(ctx: &Context) {
        ctx.input_mut(|i| i.events.push(egui::Event::Copy));
    }

    fn menu_paste(ctx: &Context) {
        let text = arboard::Clipboard::new()
            .ok()
            .and_then(|mut cb| cb.get_text().ok())
            .unwrap_or_default();
        if !text.is_empty() {
            ctx.input_mut(|i| i.events.push(egui::Event::Paste(text)));
        }
    }

    // ---------------------------------------------------------------
    // Keyboard handling
    // ---------------------------------------------------------------

    /// Intercept Cmd shortcuts for file operations before TextEdit
    /// consumes them. Everything else flows through to the editor.
    fn handle_keyboard(&mut self, ctx: &Context) {
        let mut actions: Vec<fn(&mut Self)> = Vec::new();

        ctx.input_mut(|i| {
            let cmd = i.modifiers.command;
            let shift = i.modifiers.shift;

            let events = std::mem::take(&mut i.events);
            let mut remaining = Vec::new();

            for event in events {
                let mut handled = false;
                if let egui::Event::Key { key, pressed: true, .. } = &event {
                    match key {
                        Key::N if cmd => {
                            handled = true;
                            actions.push(|s| s.request_new_document());
                        }
                        Key::O if cmd => {
                            handled = true;
                            actions.push(|s| s.show_open_prompt());
                        }
                        Key::S if cmd && shift => {
                            handled = true;
                            actions.push(|s| s.show_save_prompt());
                        }
                        Key::S if cmd => {
                            handled = true;
                            actions.push(|s| s.save_document());
                        }
                        _ => {}
                    }
                }
                if !handled {
                    remaining.push(event);
                }
            }
            i.events = remaining;
        });

        for action in actions {
            action(self);
        }
    }

    // ---------------------------------------------------------------
    // UI rendering
    // ---------------------------------------------------------------

    fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        menu_bar(ui, |ui| {
            ui.menu_button("file", |ui| {
                if ui.button("new        \u{2318}n").clicked() {
                    self.request_new_document();
                    ui.close_menu();
                }
                if ui.button("open...    \u{2318}o").clicked() {
                    self.show_open_prompt();
                    ui.close_menu();
                }
                ui.menu_button("open recent", |ui| {
                    if self.recent_files.files.is_empty() {
                        ui.label("no recent files");
                    } else {
                        for path in self.recent_files.files.clone() {
                            let name = path
                                .file_name()
                                .map(|n| n.to_string_lossy().to_string())
                                .unwrap_or_else(|| "unknown".to_string());
                            if ui.button(&name).clicked() {
                                self.open_file(path);
                                ui.close_menu();
                            }
                        }
                    }
                });
                ui.separator();
                if ui.button("save       \u{2318}s").clicked() {
                    self.save_document();
                    ui.close_menu();
                }
                if ui.button("save as... \u{21e7}\u{2318}s").clicked() {
                    self.show_save_prompt();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close_menu();
                }
            });

            ui.menu_button("edit", |ui| {
                if ui.button("undo       \u{2318}z").clicked() {
                    Self::menu_undo(ui.ctx());
                    ui.close_menu();
                }
                if ui.button("redo       \u{21e7}\u{2318}z").clicked() {
                    Self::menu_redo(ui.ctx());
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("cut        \u{2318}x").clicked() {
                    Self::menu_cut(ui.ctx());
                    ui.close_menu();
                }
                if ui.button("copy       \u{2318}c").clicked() {
                    Self::menu_copy(ui.ctx());
                    ui.close_menu();
                }
                if ui.button("paste      \u{2318}v").clicked() {
                    Self::menu_paste(ui.ctx());
                    ui.close_menu();
                }
            });

            ui.menu_button("format", |ui| {
                if ui.button("font...").clicked() {
                    self.font_draft = self.font;
                    self.show_font_dialog = true;
                    ui.close_menu();
                }
                ui.menu_button("font size", |ui| {
                    for &size in SIZE_STEPS {
                        let label = format!("{}pt", size as u32);
                        if ui.button(&label).clicked() {
                            self.apply_font(FontConfig { size, ..self.font });
                            ui.close_menu();
                        }
                    }
                });
            });

            ui.menu_button("help", |ui| {
                if ui.button("about quillpad").clicked() {
                    self.show_about = true;
                    ui.close_menu();
                }
            });
        });
    }

    /// The editor surface: egui's TextEdit over the document string.
    fn render_editor(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let output = egui::TextEdit::multiline(&mut self.document.text)
                    .font(self.font.font_id())
                    .desired_width(available.x)
                    .desired_rows((available.y / 20.0).max(4.0) as usize)
                    .frame(false)
                    .show(ui);

                // Any change from typing, paste, cut, undo...
                if output.response.changed() {
                    self.document.modified = true;
                }
            });
    }

    fn render_prompt(&mut self, ctx: &Context) {
        let title = match self.prompt_mode {
            PromptMode::Open => "open document",
            PromptMode::Save => "save document",
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .default_width(380.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("location:");
                    ui.label(self.prompt.current_dir.to_string_lossy().to_string());
                });
                ui.separator();
                egui::ScrollArea::vertical()
                    .max_height(220.0)
                    .show(ui, |ui| {
                        let entries = self.prompt.entries.clone();
                        for (idx, entry) in entries.iter().enumerate() {
                            let selected = self.prompt.selected_index == Some(idx);
                            let response = ui.add(
                                DirListItem::new(&entry.name, entry.is_directory)
                                    .selected(selected),
                            );
                            if response.clicked() {
                                self.prompt.selected_index = Some(idx);
                            }
                            if response.double_clicked() {
                                if entry.is_directory {
                                    self.prompt.navigate_to(entry.path.clone());
                                } else if self.prompt_mode == PromptMode::Open {
                                    let path = entry.path.clone();
                                    self.show_prompt = false;
                                    self.open_file(path);
                                }
                            }
                        }
                    });

                if self.prompt_mode == PromptMode::Save {
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label("filename:");
                        ui.text_edit_singleline(&mut self.save_filename);
                    });
                }

                ui.separator();
                ui.horizontal(|ui| {
                    // Canceling the prompt changes nothing and reports nothing.
                    if ui.button("cancel").clicked() {
                        self.show_prompt = false;
                    }
                    let action_text = match self.prompt_mode {
                        PromptMode::Open => "open",
                        PromptMode::Save => "save",
                    };
                    if ui.button(action_text).clicked() {
                        match self.prompt_mode {
                            PromptMode::Open => {
                                if let Some(entry) = self.prompt.selected_entry() {
                                    if !entry.is_directory {
                                        let path = entry.path.clone();
                                        self.show_prompt = false;
                                        self.open_file(path);
                                    }
                                }
                            }
                            PromptMode::Save => {
                                if !self.save_filename.is_empty() {
                                    let path = self.prompt.current_dir.join(&self.save_filename);
                                    self.show_prompt = false;
                                    self.save_document_as(path);
                                }
                            }
                        }
                    }
                });
            });
    }

    fn render_font_dialog(&mut self, ctx: &Context) {
        egui::Window::new("font")
            .collapsible(false)
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("family:");
                    for kind in [FontKind::Proportional, FontKind::Monospace] {
                        if ui
                            .selectable_label(self.font_draft.family == kind, kind.label())
                            .clicked()
                        {
                            self.font_draft.family = kind;
                        }
                    }
                });
                ui.horizontal(|ui| {
                    ui.label("size:");
                    egui::ComboBox::from_id_source("font_size")
                        .selected_text(format!("{}pt", self.font_draft.size as u32))
                        .show_ui(ui, |ui| {
                            for &size in SIZE_STEPS {
                                ui.selectable_value(
                                    &mut self.font_draft.size,
                                    size,
                                    format!("{}pt", size as u32),
                                );
                            }
                        });
                });
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("cancel").clicked() {
                        self.show_font_dialog = false;
                    }
                    if ui.button("apply").clicked() {
                        let draft = self.font_draft;
                        self.apply_font(draft);
                        self.show_font_dialog = false;
                    }
                });
            });
    }

    /// Modal error report: the failed action and the underlying message.
    fn render_notice(&mut self, ctx: &Context) {
        let Some(notice) = self.notice.clone() else {
            return;
        };
        egui::Window::new("error")
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(notice.to_string());
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.notice = None;
                    }
                });
            });
    }

    fn render_discard_confirm(&mut self, ctx: &Context) {
        egui::Window::new("discard changes")
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("you have unsaved changes.");
                ui.label("discard them and start a new document?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("discard").clicked() {
                        self.show_discard_confirm = false;
                        self.new_document();
                    }
                    if ui.button("cancel").clicked() {
                        self.show_discard_confirm = false;
                    }
                });
            });
    }

    fn render_close_confirm(&mut self, ctx: &Context) {
        egui::Window::new("unsaved changes")
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("you have unsaved changes.");
                ui.label("do you want to save before closing?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("don't save").clicked() {
                        self.close_confirmed = true;
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    if ui.button("cancel").clicked() {
                        self.show_close_confirm = false;
                    }
                    if ui.button("save").clicked() {
                        self.save_document();
                        if !self.document.modified {
                            self.close_confirmed = true;
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    }
                });
            });
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about quillpad")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("quillpad");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(8.0);
                    ui.label("a minimal word processor");
                    ui.add_space(8.0);
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for QuillpadApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        consume_special_keys(ctx);
        self.handle_keyboard(ctx);

        // Drag a text file onto the window to open it
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if let Some(path) = dropped.into_iter().next() {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            if ext == "txt" || ext == "md" {
                self.open_file(path);
            }
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });

        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            QuillTheme::title_bar_frame().show(ui, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(self.display_title());
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar(ui, &self.session.status_line(&self.document));
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(quillcore::theme::Ink::PAPER))
            .show(ctx, |ui| {
                self.render_editor(ui);
            });

        if self.show_prompt {
            self.render_prompt(ctx);
        }
        if self.show_font_dialog {
            self.render_font_dialog(ctx);
        }
        if self.show_discard_confirm {
            self.render_discard_confirm(ctx);
        }
        if self.show_close_confirm {
            self.render_close_confirm(ctx);
        }
        if self.show_about {
            self.render_about(ctx);
        }
        self.render_notice(ctx);

        if ctx.input(|i| i.viewport().close_requested()) {
            if self.document.modified && !self.close_confirmed {
                ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
                self.show_close_confirm = true;
            }
        }
    }
}
