use egui::{Pos2, Rect};

use super::Element;
use crate::element::common::{self, ShapeStyle};
use crate::surface::Surface;

/// An ellipse inscribed in the box spanned by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oval {
    p1: Pos2,
    p2: Pos2,
    style: ShapeStyle,
}

impl Oval {
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

impl Element for Oval {
    fn element_type(&self) -> &'static str {
        "oval"
    }

    fn rect(&self) -> Rect {
        common::corner_bounds(self.p1, self.p2)
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let path = common::ellipse_path(self.rect());
        if self.style.filled {
            surface.fill_path(&path, self.style.color);
        } else {
            surface.stroke_path(&path, true, &self.style.stroke, self.style.color);
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        common::ellipse_contains(self.rect(), pos)
    }
}
