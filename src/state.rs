use egui::Pos2;

/// Pointer interaction state of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    /// A pointer is held down. For continuous tools `start` advances with every drag step.
    Dragging { start: Pos2 },
}

impl EditorState {
    pub fn start_point(&self) -> Option<Pos2> {
        match self {
            Self::Dragging { start } => Some(*start),
            Self::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Dragging { .. } => "Dragging",
        }
    }
}
