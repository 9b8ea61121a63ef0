// src/gui/components/grid.rs
//
// The card grid and its pager. Cards render the current page slice only;
// clicking a card selects it (clicking again deselects). The pager talks
// to the session, which re-clamps the index on the next derivation.

use eframe::egui::{ self, RichText };

use crate::catalog::CatalogCache;
use crate::gui::app::App;
use crate::model::{ EntryId, RosterEntry, format_species };
use crate::session::Event;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.session.context_id.is_none() {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.label("Pick a collection to browse.");
        });
        return;
    }

    if app.view.total() == 0 {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            if app.session.snapshot.is_empty() && app.session.pending.is_empty() {
                ui.label("No entries yet. Add one to get started.");
            } else {
                ui.label("No entries match the current filters.");
            }
        });
        return;
    }

    let cols = app.state.options.grid.cols.max(1);
    let mut clicked: Option<EntryId> = None;

    // leave room for the pager row
    let grid_h = (ui.available_height() - 28.0).max(0.0);
    egui::ScrollArea::vertical()
        .id_salt("roster_grid_scroll")
        .max_height(grid_h)
        .show(ui, |ui| {
            let spacing = 8.0;
            let card_w = ((ui.available_width() - (cols as f32 - 1.0) * spacing) / cols as f32)
                .max(120.0);
            egui::Grid::new("roster_grid")
                .num_columns(cols)
                .spacing([spacing, spacing])
                .show(ui, |ui| {
                    for (i, entry) in app.view.visible().enumerate() {
                        let selected = app.selected.as_ref() == Some(&entry.id);
                        if card(ui, entry, selected, &app.cache, card_w).clicked() {
                            clicked = Some(entry.id.clone());
                        }
                        if (i + 1) % cols == 0 {
                            ui.end_row();
                        }
                    }
                });
        });

    if let Some(id) = clicked {
        // Clicking the selected card closes the detail panel.
        if app.selected.as_ref() == Some(&id) {
            app.selected = None;
        } else {
            app.selected = Some(id);
        }
    }

    let slice = app.view.page();
    let mut go_to: Option<usize> = None;
    ui.horizontal(|ui| {
        if ui.add_enabled(slice.index > 0, egui::Button::new("<")).clicked() {
            go_to = Some(slice.index - 1);
        }
        ui.label(format!("Page {} / {}", slice.index + 1, slice.total_pages));
        if ui
            .add_enabled(slice.index + 1 < slice.total_pages, egui::Button::new(">"))
            .clicked()
        {
            go_to = Some(slice.index + 1);
        }
    });
    if let Some(ix) = go_to {
        app.apply(Event::SetPageIndex(ix));
    }
}

fn card(
    ui: &mut egui::Ui,
    entry: &RosterEntry,
    selected: bool,
    cache: &CatalogCache,
    width: f32,
) -> egui::Response {
    let mut frame = egui::Frame::group(ui.style());
    if selected {
        frame = frame.stroke(egui::Stroke::new(2.0, ui.visuals().selection.stroke.color));
    }

    let inner = frame.show(ui, |ui| {
        ui.set_width(width);
        ui.vertical(|ui| {
            ui.label(RichText::new(entry.display_name()).strong());
            ui.label(format_species(&entry.species));
            ui.label(type_line(entry, cache));
            ui.small(if entry.is_active { "Active" } else { "Benched" });
        });
    });

    inner
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn type_line(entry: &RosterEntry, cache: &CatalogCache) -> String {
    match super::resolved_types(entry, cache) {
        (Some(a), Some(b)) => format!("{} / {}", a.label(), b.label()),
        (Some(a), None) => s!(a.label()),
        (None, _) if cache.is_pending(&entry.species) => s!("..."),
        (None, _) => s!("-"),
    }
}
