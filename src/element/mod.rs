use egui::{Color32, Pos2, Rect};

use crate::stroke::StrokeStyle;
use crate::surface::Surface;

mod common;
pub(crate) mod line;
pub(crate) mod oval;
pub(crate) mod rectangle;

pub use common::ShapeStyle;
pub use line::Line;
pub use oval::Oval;
pub use rectangle::Rectangle;

/// Common trait that all drawable shapes implement
pub trait Element {
    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    /// Get the bounding rectangle for this element
    fn rect(&self) -> Rect;

    /// Paint the element onto the given surface
    fn draw(&self, surface: &mut dyn Surface);

    /// Test if the element contains the given position
    fn hit_test(&self, pos: Pos2) -> bool;
}

/// A committed vector shape. Shapes never change after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
    Oval(Oval),
}

impl Shape {
    pub fn p1(&self) -> Pos2 {
        match self {
            Shape::Line(s) => s.p1(),
            Shape::Rectangle(s) => s.p1(),
            Shape::Oval(s) => s.p1(),
        }
    }

    pub fn p2(&self) -> Pos2 {
        match self {
            Shape::Line(s) => s.p2(),
            Shape::Rectangle(s) => s.p2(),
            Shape::Oval(s) => s.p2(),
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Line(s) => s.style(),
            Shape::Rectangle(s) => s.style(),
            Shape::Oval(s) => s.style(),
        }
    }

    pub fn color(&self) -> Color32 {
        self.style().color
    }

    pub fn stroke(&self) -> StrokeStyle {
        self.style().stroke
    }

    pub fn is_filled(&self) -> bool {
        self.style().filled
    }

    pub fn is_eraser(&self) -> bool {
        self.style().is_eraser
    }
}

impl Element for Shape {
    fn element_type(&self) -> &'static str {
        match self {
            Shape::Line(s) => s.element_type(),
            Shape::Rectangle(s) => s.element_type(),
            Shape::Oval(s) => s.element_type(),
        }
    }

    fn rect(&self) -> Rect {
        match self {
            Shape::Line(s) => s.rect(),
            Shape::Rectangle(s) => s.rect(),
            Shape::Oval(s) => s.rect(),
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Shape::Line(s) => s.draw(surface),
            Shape::Rectangle(s) => s.draw(surface),
            Shape::Oval(s) => s.draw(surface),
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        match self {
            Shape::Line(s) => s.hit_test(pos),
            Shape::Rectangle(s) => s.hit_test(pos),
            Shape::Oval(s) => s.hit_test(pos),
        }
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;

    /// Create a line between two endpoints. `style.filled` is ignored.
    pub fn create_line(p1: Pos2, p2: Pos2, style: ShapeStyle) -> Shape {
        Shape::Line(Line::new(p1, p2, style))
    }

    /// Create a rectangle from two opposite corners
    pub fn create_rectangle(p1: Pos2, p2: Pos2, style: ShapeStyle) -> Shape {
        Shape::Rectangle(Rectangle::new(p1, p2, style))
    }

    /// Create an oval inscribed in the box spanned by two opposite corners
    pub fn create_oval(p1: Pos2, p2: Pos2, style: ShapeStyle) -> Shape {
        Shape::Oval(Oval::new(p1, p2, style))
    }
}
