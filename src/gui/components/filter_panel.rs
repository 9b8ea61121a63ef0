// src/gui/components/filter_panel.rs
//
// Status pills and the 18 type toggles. Every click applies immediately;
// Clear resets the whole filter in one go.

use eframe::egui;

use crate::gui::app::App;
use crate::roster::{ FilterSpec, StatusFilter };
use crate::session::Event;
use crate::types::TypeTag;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Status:");
        for status in [StatusFilter::All, StatusFilter::Active, StatusFilter::Benched] {
            let on = app.session.filter.status == status;
            if ui.selectable_label(on, status.label()).clicked() && !on {
                let mut filter = app.session.filter.clone();
                filter.status = status;
                app.apply(Event::SetFilter(filter));
            }
        }

        ui.separator();

        if ui
            .add_enabled(!app.session.filter.is_default(), egui::Button::new("Clear"))
            .clicked()
        {
            app.apply(Event::SetFilter(FilterSpec::default()));
        }
    });

    ui.horizontal_wrapped(|ui| {
        ui.label("Types:");
        for tag in TypeTag::ALL {
            let on = app.session.filter.types.contains(&tag);
            if ui.selectable_label(on, tag.label()).clicked() {
                let mut filter = app.session.filter.clone();
                if on {
                    filter.types.remove(&tag);
                } else {
                    filter.types.insert(tag);
                }
                app.apply(Event::SetFilter(filter));
            }
        }
    });
}
