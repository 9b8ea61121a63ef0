// src/gui/components/detail.rs
//
// Right-hand panel for the selected entry: identity, resolved types, the
// defensive matchup lists and the base-stat table. Matchups recompute per
// frame from the resolved types; the work is a flat pass over 18 tags.

use eframe::egui::{ self, ProgressBar, RichText };
use egui_extras::{ Column, TableBuilder };

use crate::gui::{ app::App, components::editor::Editor };
use crate::model::format_species;
use crate::stats;
use crate::types::{ TypeTag, matchups };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(entry) = app.selected_entry().cloned() else {
        return;
    };

    let mut close = false;
    ui.horizontal(|ui| {
        ui.heading(entry.display_name());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("x").clicked() {
                close = true;
            }
        });
    });
    if close {
        app.selected = None;
        return;
    }

    ui.label(format_species(&entry.species));
    ui.label(format!("Gender: {}", entry.gender.label()));
    ui.label(if entry.is_active { "Active" } else { "Benched" });

    ui.separator();

    let (t1, t2) = super::resolved_types(&entry, &app.cache);
    match (t1, t2) {
        (Some(a), Some(b)) => {
            ui.label(format!("Type: {} / {}", a.label(), b.label()));
        }
        (Some(a), None) => {
            ui.label(format!("Type: {}", a.label()));
        }
        (None, _) => {
            ui.label("Type: unknown");
        }
    }

    if t1.is_some() {
        let m = matchups(t1, t2);
        matchup_list(ui, "Weak to", &m.weaknesses);
        matchup_list(ui, "Resists", &m.resistances);
        if !m.immunities.is_empty() {
            let names: Vec<&str> = m.immunities.iter().map(|(t, _)| t.label()).collect();
            ui.label(format!("No effect: {}", names.join(", ")));
        }
        if m.is_empty() {
            ui.label("No notable matchups");
        }
    }

    ui.separator();

    match app.cache.get(&entry.species) {
        Some(info) => stat_table(ui, &info.stats),
        None if app.cache.is_pending(&entry.species) => {
            ui.label("Fetching species data");
        }
        None if app.cache.is_missing(&entry.species) => {
            ui.label("Species not in the catalog");
        }
        None => {
            ui.label("Species data unavailable");
        }
    }

    ui.separator();

    ui.horizontal(|ui| {
        if ui.button("Edit").clicked() {
            app.editor = Some(Editor::edit(&entry));
        }
        if ui.button("Evolve").clicked() {
            app.editor = Some(Editor::evolve(&entry));
        }
        if ui.button("Delete").clicked() {
            app.confirm_delete = Some(entry.id.clone());
        }
    });
}

fn matchup_list(ui: &mut egui::Ui, title: &str, list: &[(TypeTag, f32)]) {
    if list.is_empty() {
        return;
    }
    let parts: Vec<String> = list
        .iter()
        .map(|(t, m)| format!("{} {}", t.label(), fmt_mult(*m)))
        .collect();
    ui.label(format!("{title}: {}", parts.join(", ")));
}

// Combined multipliers are only ever 0, 0.25, 0.5, 2 or 4 here.
fn fmt_mult(m: f32) -> String {
    if m == m.trunc() {
        format!("x{}", m as u32)
    } else {
        format!("x{m}")
    }
}

fn stat_table(ui: &mut egui::Ui, raw: &[(String, u32)]) {
    let summary = stats::aggregate(raw);

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(60.0))
        .column(Column::exact(34.0))
        .column(Column::remainder())
        .body(|mut body| {
            for row in &summary.rows {
                body.row(18.0, |mut r| {
                    r.col(|ui| {
                        ui.label(row.label);
                    });
                    r.col(|ui| {
                        ui.label(row.value.to_string());
                    });
                    r.col(|ui| {
                        ui.add(ProgressBar::new(row.percent as f32 / 100.0).desired_height(10.0));
                    });
                });
            }
            body.row(18.0, |mut r| {
                r.col(|ui| {
                    ui.label(RichText::new("Total").strong());
                });
                r.col(|ui| {
                    ui.label(RichText::new(summary.total.to_string()).strong());
                });
                r.col(|_| {});
            });
        });
}
