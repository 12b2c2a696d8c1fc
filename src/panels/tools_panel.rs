use crate::PaintApp;
use crate::command::Command;
use crate::components::ToolButton;
use crate::config::PALETTE;
use crate::tools::Tool;

const PANEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(245, 245, 245);

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(140.0)
        .frame(egui::Frame::side_top_panel(&ctx.style()).fill(PANEL_BACKGROUND))
        .show(ctx, |ui| {
            let mut commands = Vec::new();
            let settings = *app.editor().settings();

            group(ui, "Colors", |ui| {
                for (name, color) in PALETTE {
                    let button = ToolButton::new(name).fill(color).selected(settings.color == color);
                    if button.show(ui).clicked() {
                        commands.push(Command::SetColor(color));
                    }
                }
            });

            group(ui, "Tools", |ui| {
                for tool in Tool::ALL {
                    let button = ToolButton::new(tool.name()).selected(settings.tool == tool);
                    if button.show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", tool);
                        commands.push(Command::SetTool(tool));
                    }
                }
            });

            // Dotted and filled are mutually exclusive here; the editor accepts both
            group(ui, "Options", |ui| {
                let mut dotted = settings.dotted;
                if ui.checkbox(&mut dotted, "Dotted").changed() {
                    if dotted && settings.filled {
                        commands.push(Command::SetFilled(false));
                    }
                    commands.push(Command::SetDotted(dotted));
                }
                let mut filled = settings.filled;
                if ui.checkbox(&mut filled, "Filled").changed() {
                    if filled && settings.dotted {
                        commands.push(Command::SetDotted(false));
                    }
                    commands.push(Command::SetFilled(filled));
                }
            });

            let mut open = false;
            let mut save = false;
            group(ui, "File", |ui| {
                open = ToolButton::new("📂  Open").show(ui).clicked();
                save = ToolButton::new("💾  Save").show(ui).clicked();
                if ToolButton::new("❌  Clear").show(ui).clicked() {
                    commands.push(Command::ClearAll);
                }
                let can_undo = app.editor().document().can_undo();
                if ui
                    .add_enabled_ui(can_undo, |ui| ToolButton::new("↩  Undo").show(ui))
                    .inner
                    .clicked()
                {
                    commands.push(Command::Undo);
                }
            });

            for cmd in commands {
                app.execute_command(cmd);
            }
            if open {
                app.open_dialog();
            }
            if save {
                app.save_dialog();
            }

            ui.separator();
            let document = app.editor().document();
            ui.small(format!("Layers: {}", document.committed().len()));
            ui.small(format!("Undone: {}", document.undone().len()));
            ui.small(format!("State: {}", app.editor().state().name()));
        });
}

fn group(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.add_space(8.0);
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.strong(title);
        ui.vertical_centered_justified(add_contents);
    });
}
