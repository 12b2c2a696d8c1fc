use crate::config::{DASH_LENGTH, GAP_LENGTH};

/// How an outline is painted: its width and whether it is solid or dashed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    width: f32,
    dashed: bool,
}

impl StrokeStyle {
    pub fn solid(width: f32) -> Self {
        Self {
            width,
            dashed: false,
        }
    }

    /// A dashed stroke using the fixed 10-on / 5-off pattern.
    pub fn dashed(width: f32) -> Self {
        Self {
            width,
            dashed: true,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_dashed(&self) -> bool {
        self.dashed
    }

    /// Painted length and gap length, or `None` for a solid stroke.
    pub fn dash_pattern(&self) -> Option<(f32, f32)> {
        self.dashed.then_some((DASH_LENGTH, GAP_LENGTH))
    }

    /// Whether the point at `distance` along a path falls on a painted dash.
    pub fn paints_at(&self, distance: f32) -> bool {
        match self.dash_pattern() {
            None => true,
            Some((dash, gap)) => distance.rem_euclid(dash + gap) < dash,
        }
    }
}
