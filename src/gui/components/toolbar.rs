// src/gui/components/toolbar.rs
//
// Search box, the two sort toggles and the filter-panel switch. Sort
// clicks go through the session's sort state machine; the alpha label
// tracks the direction it would show.

use eframe::egui;

use crate::gui::app::App;
use crate::roster::{ SortMode, SortToggle };
use crate::session::Event;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Search:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.search_text)
                .hint_text("nickname or species")
                .desired_width(220.0),
        );
        if resp.changed() {
            let q = app.search_text.clone();
            app.apply(Event::SetQuery(q));
        }

        ui.separator();

        let mode = app.session.sort.mode;
        if ui.selectable_label(mode == SortMode::RecentFirst, "Recent").clicked() {
            app.apply(Event::ToggleSort(SortToggle::Recency));
        }
        let alpha_label = match mode {
            SortMode::AlphaDescending => "Z-A",
            _ => "A-Z",
        };
        if ui.selectable_label(mode.is_alpha(), alpha_label).clicked() {
            app.apply(Event::ToggleSort(SortToggle::Alpha));
        }

        ui.separator();

        let filters_on = !app.session.filter.is_default();
        let label = if filters_on { "Filters on" } else { "Filters" };
        if ui.selectable_label(app.show_filters, label).clicked() {
            app.show_filters = !app.show_filters;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("{} shown", app.view.total()));
        });
    });
}
