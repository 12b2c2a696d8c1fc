use egui::{Color32, Pos2, Vec2};
use image::{Rgb, RgbImage};

use super::Surface;
use crate::image::RasterImage;
use crate::stroke::StrokeStyle;

/// Software rasterizer painting into an RGB pixel buffer.
///
/// Pixel `(x, y)` covers the unit square whose center is `(x + 0.5, y + 0.5)`.
/// Fills include a pixel when its center lies inside the path; strokes stamp a
/// square brush of the stroke width every unit along the path.
pub struct RasterSurface {
    pixels: RgbImage,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, to_rgb(background)),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.pixels
            .get_pixel_checked(x, y)
            .map(|Rgb([r, g, b])| Color32::from_rgb(*r, *g, *b))
    }

    pub fn into_image(self) -> RasterImage {
        RasterImage::new(self.pixels)
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x < 0 || y < 0 || x >= self.pixels.width() as i64 || y >= self.pixels.height() as i64 {
            return;
        }
        self.pixels.put_pixel(x as u32, y as u32, color);
    }

    fn stamp(&mut self, center: Pos2, width: f32, color: Rgb<u8>) {
        let half = width.max(1.0) / 2.0;
        let x0 = (center.x - half).round() as i64;
        let x1 = ((center.x + half).round() as i64).max(x0 + 1);
        let y0 = (center.y - half).round() as i64;
        let y1 = ((center.y + half).round() as i64).max(y0 + 1);
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, color);
            }
        }
    }
}

fn to_rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

impl Surface for RasterSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.pixels.width() as f32, self.pixels.height() as f32)
    }

    fn clear(&mut self, color: Color32) {
        let color = to_rgb(color);
        for pixel in self.pixels.pixels_mut() {
            *pixel = color;
        }
    }

    fn stroke_path(&mut self, points: &[Pos2], closed: bool, stroke: &StrokeStyle, color: Color32) {
        let Some(&first) = points.first() else {
            return;
        };
        let color = to_rgb(color);
        if points.len() == 1 {
            self.stamp(first, stroke.width(), color);
            return;
        }

        let closing = closed.then_some(first);
        let mut travelled = 0.0;
        let mut prev = first;
        for &next in points[1..].iter().chain(closing.iter()) {
            let segment = next - prev;
            let length = segment.length();
            let steps = length.ceil().max(1.0) as usize;
            for i in 0..=steps {
                let t = i as f32 / steps as f32;
                if stroke.paints_at(travelled + length * t) {
                    self.stamp(prev + segment * t, stroke.width(), color);
                }
            }
            travelled += length;
            prev = next;
        }
    }

    fn fill_path(&mut self, points: &[Pos2], color: Color32) {
        if points.len() < 3 {
            return;
        }
        let color = to_rgb(color);
        let (min_y, max_y) = points
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        let width = self.pixels.width() as i64;
        let first_row = ((min_y - 0.5).ceil() as i64).max(0);
        let end_row = ((max_y - 0.5).ceil() as i64).min(self.pixels.height() as i64);

        let mut crossings = Vec::with_capacity(4);
        for row in first_row..end_row {
            let yc = row as f32 + 0.5;
            crossings.clear();
            for (i, &a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if (a.y <= yc && yc < b.y) || (b.y <= yc && yc < a.y) {
                    crossings.push(a.x + (yc - a.y) / (b.y - a.y) * (b.x - a.x));
                }
            }
            crossings.sort_by(f32::total_cmp);
            for span in crossings.chunks_exact(2) {
                let start = ((span[0] - 0.5).ceil() as i64).max(0);
                let end = ((span[1] - 0.5).ceil() as i64).min(width);
                for x in start..end {
                    self.put(x, row, color);
                }
            }
        }
    }

    fn draw_image(&mut self, image: &RasterImage, origin: Pos2) {
        let ox = origin.x.round() as i64;
        let oy = origin.y.round() as i64;
        for (x, y, pixel) in image.pixels().enumerate_pixels() {
            self.put(ox + x as i64, oy + y as i64, *pixel);
        }
    }
}
