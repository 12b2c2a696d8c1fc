use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());
            let canvas_rect = response.rect;

            app.set_canvas_size(canvas_rect.size());

            // Handle input
            app.handle_input(ctx, canvas_rect);

            // Render the canvas
            app.paint_canvas(&painter, canvas_rect);

            if response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
}
