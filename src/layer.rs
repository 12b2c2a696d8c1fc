use egui::Pos2;

use crate::element::{Element, Shape};
use crate::image::RasterImage;
use crate::surface::Surface;

/// One entry of the canvas history: a vector shape or a raster picture.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Shape(Shape),
    Image(RasterImage),
}

impl Layer {
    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Layer::Shape(shape) => Some(shape),
            Layer::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&RasterImage> {
        match self {
            Layer::Shape(_) => None,
            Layer::Image(image) => Some(image),
        }
    }

    /// Shapes draw themselves; images go at the canvas origin at natural size.
    pub fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Layer::Shape(shape) => shape.draw(surface),
            Layer::Image(image) => surface.draw_image(image, Pos2::ZERO),
        }
    }
}

impl From<Shape> for Layer {
    fn from(shape: Shape) -> Self {
        Layer::Shape(shape)
    }
}

impl From<RasterImage> for Layer {
    fn from(image: RasterImage) -> Self {
        Layer::Image(image)
    }
}
