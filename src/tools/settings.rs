use egui::{Color32, Pos2};

use super::Tool;
use crate::element::{Shape, ShapeStyle, factory};
use crate::stroke::StrokeStyle;

/// The current tool and style choices, handed to shape construction as a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSettings {
    pub tool: Tool,
    pub color: Color32,
    pub filled: bool,
    pub dotted: bool,
    pub stroke_width: f32,
}

impl ToolSettings {
    pub fn new(tool: Tool, color: Color32, stroke_width: f32) -> Self {
        Self {
            tool,
            color,
            filled: false,
            dotted: false,
            stroke_width,
        }
    }

    /// Stroke the current tool draws with. Pencil is always solid.
    pub fn stroke(&self) -> StrokeStyle {
        if self.dotted && self.tool != Tool::Pencil {
            StrokeStyle::dashed(self.stroke_width)
        } else {
            StrokeStyle::solid(self.stroke_width)
        }
    }

    /// Build the shape the current tool makes between `start` and `end`.
    ///
    /// The eraser paints with `background` regardless of the selected color.
    pub fn build_shape(&self, start: Pos2, end: Pos2, background: Color32) -> Shape {
        let is_eraser = self.tool == Tool::Eraser;
        let color = if is_eraser { background } else { self.color };
        let style = ShapeStyle::new(color, self.stroke())
            .filled(self.filled && self.tool.supports_fill())
            .eraser(is_eraser);

        match self.tool {
            Tool::Rectangle => factory::create_rectangle(start, end, style),
            Tool::Oval => factory::create_oval(start, end, style),
            Tool::Line | Tool::Pencil | Tool::Eraser => factory::create_line(start, end, style),
        }
    }
}
