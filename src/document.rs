use crate::element::Shape;
use crate::image::RasterImage;
use crate::layer::Layer;

/// The canvas history: layers currently shown, plus the ones taken back by undo.
///
/// Both sequences are stacks. Committing never touches `undone`; only
/// [`Document::clear_all`] and [`Document::load_image`] empty it.
#[derive(Debug, Default, Clone)]
pub struct Document {
    committed: Vec<Layer>,
    undone: Vec<Layer>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit(&mut self, layer: impl Into<Layer>) {
        let layer = layer.into();
        log::trace!("Committing layer {:?}", layer);
        self.committed.push(layer);
    }

    /// Move the most recent layer onto the undone stack.
    /// Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(layer) => {
                self.undone.push(layer);
                log::info!(
                    "Undo: {} committed, {} undone",
                    self.committed.len(),
                    self.undone.len()
                );
                true
            }
            None => false,
        }
    }

    pub fn clear_all(&mut self) {
        self.committed.clear();
        self.undone.clear();
        log::info!("Canvas cleared");
    }

    /// Replace everything with a single background picture.
    pub fn load_image(&mut self, image: RasterImage) {
        self.clear_all();
        log::info!("Loaded {}x{} image as background", image.width(), image.height());
        self.committed.push(Layer::Image(image));
    }

    pub fn committed(&self) -> &[Layer] {
        &self.committed
    }

    /// Undone layers, most recently undone last
    pub fn undone(&self) -> &[Layer] {
        &self.undone
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Committed shapes in drawing order, skipping images
    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.committed.iter().filter_map(Layer::as_shape)
    }

    /// Ids of the images currently shown
    pub fn image_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.committed.iter().filter_map(Layer::as_image).map(RasterImage::id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ShapeStyle, factory};
    use crate::stroke::StrokeStyle;
    use egui::{Color32, pos2};
    use image::RgbImage;

    fn line(x: f32) -> Shape {
        factory::create_line(
            pos2(x, 0.0),
            pos2(x, 10.0),
            ShapeStyle::new(Color32::BLACK, StrokeStyle::solid(2.0)),
        )
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut doc = Document::new();
        assert!(!doc.undo());
        assert!(doc.committed().is_empty());
        assert!(doc.undone().is_empty());
    }

    #[test]
    fn test_undo_moves_last_layer() {
        let mut doc = Document::new();
        doc.commit(line(1.0));
        doc.commit(line(2.0));

        assert!(doc.undo());
        assert_eq!(doc.committed(), &[Layer::Shape(line(1.0))]);
        assert_eq!(doc.undone(), &[Layer::Shape(line(2.0))]);
    }

    #[test]
    fn test_load_image_replaces_everything() {
        let mut doc = Document::new();
        doc.commit(line(1.0));
        doc.commit(line(2.0));
        doc.undo();

        let image = RasterImage::new(RgbImage::new(4, 4));
        let id = image.id();
        doc.load_image(image);

        assert_eq!(doc.committed().len(), 1);
        assert!(doc.undone().is_empty());
        assert_eq!(doc.image_ids().collect::<Vec<_>>(), vec![id]);
        assert_eq!(doc.shapes().count(), 0);
    }

    #[test]
    fn test_shapes_skip_images_and_reverse() {
        let mut doc = Document::new();
        doc.load_image(RasterImage::new(RgbImage::new(2, 2)));
        doc.commit(line(1.0));
        doc.commit(line(2.0));

        let topmost_first: Vec<Shape> = doc.shapes().rev().copied().collect();
        assert_eq!(topmost_first, vec![line(2.0), line(1.0)]);
    }
}
