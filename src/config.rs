use egui::{Color32, Vec2};

use crate::tools::Tool;

pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;
pub const STROKE_WIDTH: f32 = 2.0;

/// Dash pattern for dotted strokes: painted length, then gap length.
pub const DASH_LENGTH: f32 = 10.0;
pub const GAP_LENGTH: f32 = 5.0;

/// How far from a line a point may be and still count as a hit.
pub const LINE_HIT_TOLERANCE: f32 = 2.0;

pub const WINDOW_SIZE: Vec2 = Vec2::new(1000.0, 700.0);
pub const MIN_WINDOW_SIZE: Vec2 = Vec2::new(900.0, 600.0);

/// The colors offered by the palette buttons.
pub const PALETTE: [(&str, Color32); 3] = [
    ("Red", Color32::from_rgb(200, 50, 50)),
    ("Green", Color32::from_rgb(50, 150, 50)),
    ("Blue", Color32::from_rgb(50, 100, 200)),
];

/// Fixed settings of a drawing canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    pub background: Color32,
    pub stroke_width: f32,
    pub initial_color: Color32,
    pub initial_tool: Tool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR,
            stroke_width: STROKE_WIDTH,
            initial_color: Color32::BLACK,
            initial_tool: Tool::Line,
        }
    }
}
