use egui::{Color32, Pos2, Vec2};

use crate::image::RasterImage;
use crate::stroke::StrokeStyle;

mod painter;
mod raster;

pub use painter::{PainterSurface, TextureCache};
pub use raster::RasterSurface;

/// Something the renderer can paint onto, in canvas coordinates with the
/// origin at the top-left corner.
pub trait Surface {
    /// Size of the drawable area
    fn size(&self) -> Vec2;

    /// Paint the whole surface with `color`
    fn clear(&mut self, color: Color32);

    /// Outline a path, joining the last point back to the first when `closed`
    fn stroke_path(&mut self, points: &[Pos2], closed: bool, stroke: &StrokeStyle, color: Color32);

    /// Fill the interior of a closed convex path
    fn fill_path(&mut self, points: &[Pos2], color: Color32);

    /// Draw a picture at natural size with its top-left corner at `origin`
    fn draw_image(&mut self, image: &RasterImage, origin: Pos2);
}
