// src/gui/components/export_bar.rs

use eframe::egui;
use tracing::debug;

use crate::gui::{ actions, app::App };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.out_path_text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(240.0),
            )
            .changed()
        {
            app.out_path_dirty = true;
            debug!("ui: out_path_text changed (dirty=true) -> {}", app.out_path_text);
        }

        // Copy
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        // Export
        if ui.button("Export").clicked() {
            actions::export(app);
        }

        ui.label(&app.status);
    });
}
