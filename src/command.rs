use egui::Color32;
use std::path::PathBuf;

use crate::editor::Editor;
use crate::error::PaintResult;
use crate::tools::Tool;

/// Actions the toolbar and keyboard shortcuts can ask the editor to perform
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetColor(Color32),
    SetTool(Tool),
    SetFilled(bool),
    SetDotted(bool),
    ClearAll,
    Undo,
    Save(PathBuf),
    Open(PathBuf),
}

impl Command {
    /// Apply the command. Returns a message for the user when the action
    /// warrants one.
    pub fn execute(self, editor: &mut Editor) -> PaintResult<Option<String>> {
        match self {
            Command::SetColor(color) => editor.set_color(color),
            Command::SetTool(tool) => editor.set_tool(tool),
            Command::SetFilled(filled) => editor.set_filled(filled),
            Command::SetDotted(dotted) => editor.set_dotted(dotted),
            Command::ClearAll => editor.clear_all(),
            Command::Undo => editor.undo(),
            Command::Save(path) => {
                editor.save_image(&path)?;
                return Ok(Some("Image saved successfully!".to_owned()));
            }
            Command::Open(path) => editor.open_image(&path)?,
        }
        Ok(None)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::SetColor(_) => "Set Color",
            Command::SetTool(_) => "Set Tool",
            Command::SetFilled(_) => "Set Filled",
            Command::SetDotted(_) => "Set Dotted",
            Command::ClearAll => "Clear",
            Command::Undo => "Undo",
            Command::Save(_) => "Save",
            Command::Open(_) => "Open",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_commands() {
        let mut editor = Editor::default();
        let red = Color32::from_rgb(200, 50, 50);
        for cmd in [
            Command::SetColor(red),
            Command::SetTool(Tool::Oval),
            Command::SetFilled(true),
            Command::SetDotted(true),
        ] {
            assert_eq!(cmd.execute(&mut editor).ok(), Some(None));
        }
        assert_eq!(editor.settings().color, red);
        assert_eq!(editor.settings().tool, Tool::Oval);
        // The editor itself doesn't make filled and dotted exclusive
        assert!(editor.settings().filled);
        assert!(editor.settings().dotted);
    }

    #[test]
    fn test_open_missing_file_fails() {
        let mut editor = Editor::default();
        let result = Command::Open(PathBuf::from("/nonexistent/paint_brush/missing.png")).execute(&mut editor);
        assert!(result.is_err());
        assert!(editor.document().is_empty());
    }
}
