use egui::{Pos2, Rect};

use super::Element;
use crate::element::common::{self, ShapeStyle};
use crate::surface::Surface;

/// An axis-aligned rectangle given by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    p1: Pos2,
    p2: Pos2,
    style: ShapeStyle,
}

impl Rectangle {
    pub(crate) fn new(p1: Pos2, p2: Pos2, style: ShapeStyle) -> Self {
        Self { p1, p2, style }
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

impl Element for Rectangle {
    fn element_type(&self) -> &'static str {
        "rectangle"
    }

    fn rect(&self) -> Rect {
        common::corner_bounds(self.p1, self.p2)
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let path = common::rect_path(self.rect());
        if self.style.filled {
            surface.fill_path(&path, self.style.color);
        } else {
            surface.stroke_path(&path, true, &self.style.stroke, self.style.color);
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        common::rect_contains(self.rect(), pos)
    }
}
