use egui::{Color32, Pos2, Rect, Vec2};
use std::f32::consts::TAU;

use crate::stroke::StrokeStyle;

/// Upper bound on the spacing between consecutive points of an ellipse outline.
const ELLIPSE_STEP: f32 = 2.0;
const MIN_ELLIPSE_SEGMENTS: usize = 16;
const MAX_ELLIPSE_SEGMENTS: usize = 720;

/// Appearance shared by every shape variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub color: Color32,
    pub stroke: StrokeStyle,
    pub filled: bool,
    /// Painted with the canvas background to look like erasing.
    pub is_eraser: bool,
}

impl ShapeStyle {
    pub fn new(color: Color32, stroke: StrokeStyle) -> Self {
        Self {
            color,
            stroke,
            filled: false,
            is_eraser: false,
        }
    }

    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    pub fn eraser(mut self, is_eraser: bool) -> Self {
        self.is_eraser = is_eraser;
        self
    }
}

/// Bounding box spanned by two opposite corners, in either order.
pub(crate) fn corner_bounds(p1: Pos2, p2: Pos2) -> Rect {
    Rect::from_two_pos(p1, p2)
}

/// Outline of `rect` as a closed path, clockwise from the top-left corner.
pub(crate) fn rect_path(rect: Rect) -> Vec<Pos2> {
    vec![
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ]
}

/// Outline of the ellipse inscribed in `rect` as a closed path.
pub(crate) fn ellipse_path(rect: Rect) -> Vec<Pos2> {
    let center = rect.center();
    let radius = rect.size() / 2.0;

    // Ramanujan's approximation is plenty for choosing a segment count
    let (a, b) = (radius.x, radius.y);
    let perimeter = std::f32::consts::PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt());
    let segments = ((perimeter / ELLIPSE_STEP).ceil() as usize)
        .clamp(MIN_ELLIPSE_SEGMENTS, MAX_ELLIPSE_SEGMENTS);

    (0..segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            center + Vec2::new(radius.x * angle.cos(), radius.y * angle.sin())
        })
        .collect()
}

/// Calculate distance from a point to a line segment
pub(crate) fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Half-open containment: the right and bottom edges are outside, and an
/// empty rectangle contains nothing.
pub(crate) fn rect_contains(rect: Rect, pos: Pos2) -> bool {
    rect.width() > 0.0
        && rect.height() > 0.0
        && pos.x >= rect.min.x
        && pos.y >= rect.min.y
        && pos.x < rect.max.x
        && pos.y < rect.max.y
}

/// Whether `pos` is strictly inside the ellipse inscribed in `rect`.
pub(crate) fn ellipse_contains(rect: Rect, pos: Pos2) -> bool {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return false;
    }
    let nx = (pos.x - rect.min.x) / rect.width() - 0.5;
    let ny = (pos.y - rect.min.y) / rect.height() - 0.5;
    nx * nx + ny * ny < 0.25
}
