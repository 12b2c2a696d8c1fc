use std::fmt;

mod settings;
pub use settings::ToolSettings;

/// The drawing tools offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Line,
    Rectangle,
    Oval,
    Pencil,
    Eraser,
}

impl Tool {
    /// Toolbar order
    pub const ALL: [Tool; 5] = [
        Tool::Rectangle,
        Tool::Oval,
        Tool::Line,
        Tool::Pencil,
        Tool::Eraser,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Oval => "Oval",
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
        }
    }

    /// Continuous tools commit a short segment on every drag step.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Tool::Pencil | Tool::Eraser)
    }

    /// Bounded tools commit one shape on release and preview it while dragging.
    pub fn is_bounded(&self) -> bool {
        !self.is_continuous()
    }

    /// Whether the filled option has any effect for this tool
    pub fn supports_fill(&self) -> bool {
        matches!(self, Tool::Rectangle | Tool::Oval)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
