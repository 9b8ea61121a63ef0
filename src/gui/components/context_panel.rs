// src/gui/components/context_panel.rs
//
// Top bar: collection picker, refresh, entry creation. Switching the
// collection goes through actions::select_context so the cached snapshot
// shows up before the network round trip finishes.

use eframe::egui::{ self, widgets::Spinner };

use crate::gui::{ actions, app::App, components::editor::Editor };
use crate::model::ContextId;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("Pokebox");
        ui.separator();

        ui.label("Collection:");
        let mut picked: Option<ContextId> = None;
        egui::ComboBox::from_id_salt("context_picker")
            .selected_text(app.context_label())
            .width(180.0)
            .show_ui(ui, |ui| {
                for c in &app.contexts {
                    let selected = app.session.context_id.as_ref() == Some(&c.id);
                    if ui.selectable_label(selected, &c.name).clicked() && !selected {
                        picked = Some(c.id.clone());
                    }
                }
            });
        if let Some(id) = picked {
            actions::select_context(app, ui.ctx(), Some(id));
        }

        let has_context = app.session.context_id.is_some();

        if ui
            .add_enabled(has_context && !app.loading, egui::Button::new("Refresh"))
            .clicked()
        {
            actions::refresh(app, ui.ctx());
        }

        if ui.add_enabled(has_context, egui::Button::new("Add")).clicked() {
            app.editor = Some(Editor::create());
        }

        if app.loading {
            ui.add(Spinner::new().size(16.0));
        }
    });
}
