use egui::{Key, Rect};

use crate::command::Command;
use crate::editor::Editor;
use crate::file_handler::{self, FileHandler};
use crate::input::{InputEvent, InputHandler};
use crate::panels::{central_panel, tools_panel};
use crate::surface::TextureCache;

/// A message shown to the user in a small closable window
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: &'static str,
    pub message: String,
}

pub struct PaintApp {
    editor: Editor,
    input: InputHandler,
    file_handler: FileHandler,
    textures: TextureCache,
    notification: Option<Notification>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self {
            editor: Editor::default(),
            input: InputHandler::new(Rect::NOTHING),
            file_handler: FileHandler::new(),
            textures: TextureCache::new(),
            notification: None,
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Run a command and surface its outcome as a notification
    pub fn execute_command(&mut self, command: Command) {
        let name = command.name();
        match command.execute(&mut self.editor) {
            Ok(Some(message)) => {
                self.notification = Some(Notification {
                    title: name,
                    message,
                });
            }
            Ok(None) => {}
            Err(err) => {
                log::error!("{} failed: {}", name, err);
                self.notification = Some(Notification {
                    title: "Error",
                    message: format!("Error during {}: {}", name.to_lowercase(), err),
                });
            }
        }
    }

    pub fn save_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("drawing.png")
            .add_filter("PNG", &["png"])
            .save_file()
        {
            self.execute_command(Command::Save(path));
        }
    }

    pub fn open_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &file_handler::OPEN_EXTENSIONS[..])
            .pick_file()
        {
            self.execute_command(Command::Open(path));
        }
    }

    /// Feed this frame's pointer and key events into the editor
    pub(crate) fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            match event {
                InputEvent::PointerDown { location } => self.editor.on_pointer_down(location.position),
                InputEvent::PointerMove { location, dragging } => {
                    if dragging {
                        self.editor.on_pointer_drag(location.position);
                    }
                    if !location.is_in_canvas {
                        self.editor.on_pointer_leave();
                    }
                }
                InputEvent::PointerUp { location } => self.editor.on_pointer_up(location.position),
                InputEvent::PointerLeave => self.editor.on_pointer_leave(),
                InputEvent::KeyDown { key, modifiers } if modifiers.command => match key {
                    Key::Z => self.execute_command(Command::Undo),
                    Key::S => self.save_dialog(),
                    Key::O => self.open_dialog(),
                    _ => {}
                },
                InputEvent::KeyDown { .. } => {}
            }
        }
    }

    pub(crate) fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.file_handler.preview_files_being_dropped(ctx);
        if let Some(dropped) = self.file_handler.take_dropped_image(ctx) {
            if let Err(err) = self.editor.open_dropped(&dropped) {
                log::error!("Open failed: {}", err);
                self.notification = Some(Notification {
                    title: "Error",
                    message: format!("Error opening image: {}", err),
                });
            }
        }
    }

    pub(crate) fn set_canvas_size(&mut self, size: egui::Vec2) {
        self.editor.set_canvas_size(size);
    }

    pub(crate) fn paint_canvas(&mut self, painter: &egui::Painter, rect: Rect) {
        self.textures.retain(self.editor.document().image_ids());
        let mut surface = crate::surface::PainterSurface::new(painter, rect, &mut self.textures);
        self.editor.render(&mut surface);
    }

    fn show_notification(&mut self, ctx: &egui::Context) {
        let Some(notification) = &self.notification else {
            return;
        };
        let mut open = true;
        let mut dismissed = false;
        egui::Window::new(notification.title)
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(&notification.message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if !open || dismissed {
            self.notification = None;
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
        self.handle_dropped_files(ctx);
        self.show_notification(ctx);
    }
}
