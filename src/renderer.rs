use egui::Color32;

use crate::document::Document;
use crate::element::{Element, Shape};
use crate::surface::Surface;

/// Repaints a document from scratch onto any [`Surface`].
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    background: Color32,
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Paint the background, replay every committed layer in order, then the
    /// in-progress preview if there is one.
    pub fn render(&self, document: &Document, preview: Option<&Shape>, surface: &mut dyn Surface) {
        surface.clear(self.background);
        for layer in document.committed() {
            layer.draw(surface);
        }
        if let Some(shape) = preview {
            shape.draw(surface);
        }
    }
}
