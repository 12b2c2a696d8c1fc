//! The interaction controller.
//!
//! `Editor` owns the document and the current tool settings and turns pointer
//! events into committed layers:
//!
//! ```text
//!            pointer down
//!   Idle ───────────────────► Dragging { start }
//!    ▲                            │  drag (Pencil/Eraser): commit start→pos, start = pos
//!    │        pointer up          │  drag (Line/Rectangle/Oval): preview only
//!    └────────────────────────────┘  up (Line/Rectangle/Oval): commit start→pos
//! ```
//!
//! Every entry point is a plain method so tests can drive the editor without
//! a window.

use egui::{Color32, Pos2, Vec2};
use std::path::{Path, PathBuf};

use crate::config::CanvasConfig;
use crate::document::Document;
use crate::element::{Element, Shape};
use crate::error::PaintResult;
use crate::file_handler::{self, DroppedImage};
use crate::image::RasterImage;
use crate::renderer::Renderer;
use crate::state::EditorState;
use crate::surface::{RasterSurface, Surface};
use crate::tools::{Tool, ToolSettings};

/// Canvas size used until the UI reports the real one
const DEFAULT_CANVAS_SIZE: [u32; 2] = [800, 600];

#[derive(Debug, Clone)]
pub struct Editor {
    config: CanvasConfig,
    document: Document,
    settings: ToolSettings,
    state: EditorState,
    /// Last known pointer position, `None` while the pointer is off the canvas
    pointer: Option<Pos2>,
    canvas_size: [u32; 2],
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl Editor {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            settings: ToolSettings::new(config.initial_tool, config.initial_color, config.stroke_width),
            config,
            document: Document::new(),
            state: EditorState::Idle,
            pointer: None,
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn background(&self) -> Color32 {
        self.config.background
    }

    pub fn set_color(&mut self, color: Color32) {
        log::debug!("Color set to {:?}", color);
        self.settings.color = color;
    }

    pub fn set_tool(&mut self, tool: Tool) {
        log::debug!("Tool set to {}", tool);
        self.settings.tool = tool;
    }

    pub fn set_filled(&mut self, filled: bool) {
        log::debug!("Filled set to {}", filled);
        self.settings.filled = filled;
    }

    pub fn set_dotted(&mut self, dotted: bool) {
        log::debug!("Dotted set to {}", dotted);
        self.settings.dotted = dotted;
    }

    pub fn clear_all(&mut self) {
        self.document.clear_all();
    }

    pub fn undo(&mut self) {
        self.document.undo();
    }

    /// Pixel size of the drawing area, which is also the size of saved images
    pub fn canvas_size(&self) -> [u32; 2] {
        self.canvas_size
    }

    pub fn set_canvas_size(&mut self, size: Vec2) {
        let size = [size.x.max(1.0).round() as u32, size.y.max(1.0).round() as u32];
        if size != self.canvas_size {
            log::debug!("Canvas resized to {}x{}", size[0], size[1]);
            self.canvas_size = size;
        }
    }

    pub fn on_pointer_down(&mut self, pos: Pos2) {
        let pos = snap(pos);
        self.pointer = Some(pos);
        self.state = EditorState::Dragging { start: pos };
    }

    pub fn on_pointer_drag(&mut self, pos: Pos2) {
        let pos = snap(pos);
        self.pointer = Some(pos);
        let EditorState::Dragging { start } = self.state else {
            return;
        };
        if self.settings.tool.is_continuous() {
            let segment = self.settings.build_shape(start, pos, self.config.background);
            self.document.commit(segment);
            self.state = EditorState::Dragging { start: pos };
        }
    }

    pub fn on_pointer_up(&mut self, pos: Pos2) {
        let pos = snap(pos);
        self.pointer = Some(pos);
        let EditorState::Dragging { start } = self.state else {
            return;
        };
        if self.settings.tool.is_bounded() {
            let shape = self.settings.build_shape(start, pos, self.config.background);
            self.document.commit(shape);
        }
        self.state = EditorState::Idle;
    }

    /// The pointer left the canvas. A drag in progress stays alive.
    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
    }

    /// The shape a bounded tool would commit if released now
    pub fn preview(&self) -> Option<Shape> {
        let start = self.state.start_point()?;
        if !self.settings.tool.is_bounded() {
            return None;
        }
        let end = self.pointer.unwrap_or(start);
        Some(self.settings.build_shape(start, end, self.config.background))
    }

    /// Paint the canvas including any in-progress preview
    pub fn render(&self, surface: &mut dyn Surface) {
        let preview = self.preview();
        self.renderer().render(&self.document, preview.as_ref(), surface);
    }

    /// Rasterize the committed layers at the current canvas size, without the preview
    pub fn flatten(&self) -> RasterImage {
        let [width, height] = self.canvas_size;
        let mut surface = RasterSurface::new(width, height, self.config.background);
        self.renderer().render(&self.document, None, &mut surface);
        surface.into_image()
    }

    /// Save the canvas as PNG, returning the path written
    pub fn save_image(&self, path: &Path) -> PaintResult<PathBuf> {
        file_handler::save_png(&self.flatten(), path)
    }

    /// Replace the canvas with the image at `path`. On failure nothing changes.
    pub fn open_image(&mut self, path: &Path) -> PaintResult<()> {
        let image = file_handler::load_image(path)?;
        self.document.load_image(image);
        Ok(())
    }

    pub fn open_dropped(&mut self, dropped: &DroppedImage) -> PaintResult<()> {
        let image = dropped.load()?;
        self.document.load_image(image);
        Ok(())
    }

    /// Committed shapes under `pos`, topmost first
    pub fn shapes_at(&self, pos: Pos2) -> Vec<&Shape> {
        self.document.shapes().rev().filter(|shape| shape.hit_test(pos)).collect()
    }

    fn renderer(&self) -> Renderer {
        Renderer::new(self.config.background)
    }
}

/// Shapes live on the integer pixel grid
fn snap(pos: Pos2) -> Pos2 {
    pos.round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_initial_settings() {
        let editor = Editor::default();
        assert_eq!(editor.settings().tool, Tool::Line);
        assert_eq!(editor.settings().color, Color32::BLACK);
        assert!(!editor.settings().filled);
        assert!(!editor.settings().dotted);
        assert_eq!(*editor.state(), EditorState::Idle);
    }

    #[test]
    fn test_pointer_positions_are_snapped() {
        let mut editor = Editor::default();
        editor.on_pointer_down(pos2(1.4, 2.6));
        assert_eq!(editor.state().start_point(), Some(pos2(1.0, 3.0)));
    }

    #[test]
    fn test_drag_without_down_is_ignored() {
        let mut editor = Editor::default();
        editor.set_tool(Tool::Pencil);
        editor.on_pointer_drag(pos2(3.0, 3.0));
        editor.on_pointer_up(pos2(4.0, 4.0));
        assert!(editor.document().is_empty());
    }

    #[test]
    fn test_preview_falls_back_to_start() {
        let mut editor = Editor::default();
        editor.set_tool(Tool::Rectangle);
        editor.on_pointer_down(pos2(5.0, 5.0));
        editor.on_pointer_drag(pos2(9.0, 9.0));
        assert_eq!(editor.preview().map(|s| s.p2()), Some(pos2(9.0, 9.0)));

        editor.on_pointer_leave();
        let preview = editor.preview().expect("still dragging");
        assert_eq!(preview.p2(), pos2(5.0, 5.0));
        assert!(editor.state().is_dragging());
    }

    #[test]
    fn test_no_preview_for_continuous_tools() {
        let mut editor = Editor::default();
        editor.set_tool(Tool::Eraser);
        editor.on_pointer_down(pos2(5.0, 5.0));
        assert!(editor.preview().is_none());
    }

    #[test]
    fn test_set_canvas_size_rounds() {
        let mut editor = Editor::default();
        editor.set_canvas_size(Vec2::new(640.4, 479.6));
        assert_eq!(editor.canvas_size(), [640, 480]);
        editor.set_canvas_size(Vec2::ZERO);
        assert_eq!(editor.canvas_size(), [1, 1]);
    }
}
