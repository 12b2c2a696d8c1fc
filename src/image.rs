use egui::{ColorImage, Pos2, Rect, Vec2};
use image::RgbImage;
use std::sync::atomic::{AtomicUsize, Ordering};

// Static counter for generating unique IDs
static NEXT_IMAGE_ID: AtomicUsize = AtomicUsize::new(1);

/// An opaque RGB raster, either loaded from disk or flattened from the canvas.
///
/// Every instance gets a process-unique id so on-screen textures can be
/// cached per image.
#[derive(Clone, PartialEq)]
pub struct RasterImage {
    id: usize,
    pixels: RgbImage,
}

// Custom Debug implementation so logs don't dump every pixel
impl std::fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterImage")
            .field("id", &self.id)
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .finish()
    }
}

impl RasterImage {
    pub fn new(pixels: RgbImage) -> Self {
        let id = NEXT_IMAGE_ID.fetch_add(1, Ordering::Relaxed);
        Self { id, pixels }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Natural size in canvas units (one unit per pixel)
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    /// Area covered when drawn with its top-left corner at `origin`
    pub fn rect_at(&self, origin: Pos2) -> Rect {
        Rect::from_min_size(origin, self.size())
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn into_pixels(self) -> RgbImage {
        self.pixels
    }

    /// Convert into the layout egui expects for texture upload
    pub fn to_color_image(&self) -> ColorImage {
        let size = [self.width() as usize, self.height() as usize];
        ColorImage::from_rgb(size, self.pixels.as_raw())
    }
}
