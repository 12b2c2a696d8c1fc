use egui::{Pos2, Rect};

use super::Element;
use crate::config::LINE_HIT_TOLERANCE;
use crate::element::common::{self, ShapeStyle};
use crate::surface::Surface;

/// A straight segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    p1: Pos2,
    p2: Pos2,
    style: ShapeStyle,
}

impl Line {
    /// Lines are never filled, whatever `style` says.
    pub(crate) fn new(p1: Pos2, p2: Pos2, style: ShapeStyle) -> Self {
        Self {
            p1,
            p2,
            style: style.filled(false),
        }
    }

    pub fn p1(&self) -> Pos2 {
        self.p1
    }

    pub fn p2(&self) -> Pos2 {
        self.p2
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }
}

impl Element for Line {
    fn element_type(&self) -> &'static str {
        "line"
    }

    fn rect(&self) -> Rect {
        common::corner_bounds(self.p1, self.p2)
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.stroke_path(&[self.p1, self.p2], false, &self.style.stroke, self.style.color);
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        common::distance_to_line_segment(pos, self.p1, self.p2) <= LINE_HIT_TOLERANCE
    }
}
