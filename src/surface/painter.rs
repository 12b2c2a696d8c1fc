use egui::{Color32, Context, Painter, Pos2, Rect, Shape, Stroke, TextureHandle, TextureId, TextureOptions, Vec2};
use std::collections::HashMap;

use super::Surface;
use crate::image::RasterImage;
use crate::stroke::StrokeStyle;

/// GPU textures for loaded images, keyed by image id.
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<usize, TextureHandle>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload `image` on first use, afterwards reuse the texture
    pub fn get_or_upload(&mut self, ctx: &Context, image: &RasterImage) -> TextureId {
        self.textures
            .entry(image.id())
            .or_insert_with(|| {
                log::debug!("Uploading texture for image {}: {}x{}", image.id(), image.width(), image.height());
                ctx.load_texture(
                    format!("raster_image_{}", image.id()),
                    image.to_color_image(),
                    TextureOptions::NEAREST,
                )
            })
            .id()
    }

    /// Drop textures whose image is no longer on the canvas
    pub fn retain(&mut self, live_ids: impl IntoIterator<Item = usize>) {
        let live: Vec<usize> = live_ids.into_iter().collect();
        self.textures.retain(|id, _| live.contains(id));
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// On-screen surface drawing through an egui painter.
///
/// Canvas coordinates are offset by the top-left corner of `canvas_rect`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    canvas_rect: Rect,
    textures: &'a mut TextureCache,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas_rect: Rect, textures: &'a mut TextureCache) -> Self {
        Self {
            painter,
            canvas_rect,
            textures,
        }
    }

    fn to_screen(&self, points: &[Pos2]) -> Vec<Pos2> {
        let offset = self.canvas_rect.min.to_vec2();
        points.iter().map(|p| *p + offset).collect()
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> Vec2 {
        self.canvas_rect.size()
    }

    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.canvas_rect, 0.0, color);
    }

    fn stroke_path(&mut self, points: &[Pos2], closed: bool, stroke: &StrokeStyle, color: Color32) {
        let mut points = self.to_screen(points);
        let egui_stroke = Stroke::new(stroke.width(), color);

        match stroke.dash_pattern() {
            Some((dash, gap)) => {
                if closed {
                    if let Some(&first) = points.first() {
                        points.push(first);
                    }
                }
                self.painter.extend(Shape::dashed_line(&points, egui_stroke, dash, gap));
            }
            None if closed => {
                self.painter.add(Shape::closed_line(points, egui_stroke));
            }
            None => {
                self.painter.add(Shape::line(points, egui_stroke));
            }
        }
    }

    fn fill_path(&mut self, points: &[Pos2], color: Color32) {
        let points = self.to_screen(points);
        self.painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
    }

    fn draw_image(&mut self, image: &RasterImage, origin: Pos2) {
        let texture = self.textures.get_or_upload(self.painter.ctx(), image);
        let rect = image.rect_at(origin).translate(self.canvas_rect.min.to_vec2());
        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
        self.painter.image(texture, rect, uv, Color32::WHITE);
    }
}
