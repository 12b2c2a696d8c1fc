use eframe::egui;

/// A full-width toolbar button that can show a color swatch and a selected state.
pub struct ToolButton<'a> {
    pub label: &'a str,
    pub fill: Option<egui::Color32>,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            fill: None,
            selected: false,
        }
    }

    /// Paint the button in `color` with white text, like a palette entry
    pub fn fill(mut self, color: egui::Color32) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(ui.available_width(), 28.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let enabled = ui.is_enabled();
            let bg_color = match self.fill {
                Some(color) if response.hovered() && enabled => color.gamma_multiply(0.85),
                Some(color) => color,
                None if self.selected => egui::Color32::from_rgb(100, 181, 246), // Light blue when selected
                None if response.hovered() && enabled => egui::Color32::from_gray(225),
                None => egui::Color32::from_gray(240),
            };
            let text_color = if self.fill.is_some() {
                egui::Color32::WHITE
            } else if enabled {
                egui::Color32::BLACK
            } else {
                egui::Color32::GRAY
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(14.0),
                text_color,
            );

            // Draw border when selected
            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response
    }
}
