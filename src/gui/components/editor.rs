// src/gui/components/editor.rs
//
// The create / edit / evolve window plus the delete confirmation. Species
// names are checked against the catalog while typing: each keystroke arms
// a debounce timer, the lookup fires once the timer ages out, and Save
// stays disabled until the name resolves. Editing never touches the
// species, so no check runs there.

use std::time::{ Duration, Instant };
use std::sync::Arc;

use eframe::egui::{ self, RichText, widgets::Spinner };

use crate::config::consts::VALIDATE_DEBOUNCE_MS;
use crate::fetch;
use crate::gui::{ actions, app::App };
use crate::model::{ EntryId, Gender, RosterEntry, format_species };

pub enum EditorTarget {
    Create,
    Edit(EntryId),
    Evolve(EntryId),
}

pub struct Editor {
    pub target: EditorTarget,
    pub species_text: String,
    pub nickname_text: String,
    pub gender: Gender,
    pub is_active: bool,
    /// Species the entry had when the window opened (evolve shows it).
    pub from_species: String,
    /// Armed on every species keystroke; the catalog lookup fires once it
    /// is VALIDATE_DEBOUNCE_MS old.
    pub last_edit: Option<Instant>,
}

impl Editor {
    pub fn create() -> Self {
        Self {
            target: EditorTarget::Create,
            species_text: s!(),
            nickname_text: s!(),
            gender: Gender::Unknown,
            is_active: true,
            from_species: s!(),
            last_edit: None,
        }
    }

    pub fn edit(entry: &RosterEntry) -> Self {
        Self {
            target: EditorTarget::Edit(entry.id.clone()),
            species_text: entry.species.clone(),
            nickname_text: entry.nickname.clone().unwrap_or_default(),
            gender: entry.gender,
            is_active: entry.is_active,
            from_species: entry.species.clone(),
            last_edit: None,
        }
    }

    pub fn evolve(entry: &RosterEntry) -> Self {
        Self {
            target: EditorTarget::Evolve(entry.id.clone()),
            species_text: s!(),
            nickname_text: entry.nickname.clone().unwrap_or_default(),
            gender: entry.gender,
            is_active: entry.is_active,
            from_species: entry.species.clone(),
            last_edit: None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.target {
            EditorTarget::Create => "Add entry",
            EditorTarget::Edit(_) => "Edit entry",
            EditorTarget::Evolve(_) => "Evolve entry",
        }
    }

    /// Create and evolve take a (validated) species; edit keeps it fixed.
    pub fn wants_species(&self) -> bool {
        !matches!(self.target, EditorTarget::Edit(_))
    }

    /// Create and edit expose nickname / gender / status; evolve keeps them.
    pub fn wants_profile(&self) -> bool {
        !matches!(self.target, EditorTarget::Evolve(_))
    }

    pub fn species_key(&self) -> String {
        self.species_text.trim().to_lowercase()
    }
}

enum Validity {
    NotNeeded,
    Empty,
    Checking,
    Found(String),
    Unknown,
}

pub fn draw(ctx: &egui::Context, app: &mut App) {
    if app.editor.is_none() {
        return;
    }

    let generation = app.session.generation;
    let Some(editor) = app.editor.as_mut() else { return };

    // Debounce bookkeeping first so this frame's validity is current.
    let key = editor.species_key();
    if editor.wants_species() && !key.is_empty() {
        match editor.last_edit {
            Some(t) if t.elapsed() >= Duration::from_millis(VALIDATE_DEBOUNCE_MS) => {
                editor.last_edit = None;
            }
            Some(t) => {
                // Wake up again when the timer ages out.
                let left = Duration::from_millis(VALIDATE_DEBOUNCE_MS) - t.elapsed();
                ctx.request_repaint_after(left);
            }
            None => {}
        }
        if editor.last_edit.is_none() && app.cache.begin(&key) {
            fetch::spawn_species(
                Arc::clone(&app.catalog),
                generation,
                key.clone(),
                app.tx.clone(),
                ctx,
            );
        }
    }

    let validity = if !editor.wants_species() {
        Validity::NotNeeded
    } else if key.is_empty() {
        Validity::Empty
    } else if editor.last_edit.is_some() {
        Validity::Checking
    } else if let Some(info) = app.cache.get(&key) {
        Validity::Found(format_species(&info.species))
    } else if app.cache.is_missing(&key) {
        Validity::Unknown
    } else {
        Validity::Checking
    };
    let can_save = matches!(validity, Validity::NotNeeded | Validity::Found(_));

    let title = editor.title();
    let mut save = false;
    let mut cancel = false;
    let mut open = true;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            if editor.wants_species() {
                if !editor.from_species.is_empty() {
                    ui.label(format!("Evolving {}", format_species(&editor.from_species)));
                }
                ui.horizontal(|ui| {
                    ui.label("Species:");
                    if ui.text_edit_singleline(&mut editor.species_text).changed() {
                        editor.last_edit = Some(Instant::now());
                    }
                });
                match &validity {
                    Validity::Checking => {
                        ui.horizontal(|ui| {
                            ui.add(Spinner::new().size(12.0));
                            ui.weak("Checking species");
                        });
                    }
                    Validity::Found(name) => {
                        ui.weak(format!("Found {name}"));
                    }
                    Validity::Unknown => {
                        let err = ui.visuals().error_fg_color;
                        ui.colored_label(err, "Unknown species");
                    }
                    Validity::NotNeeded | Validity::Empty => {}
                }
            } else {
                ui.label(format!("Species: {}", format_species(&editor.species_text)));
            }

            if editor.wants_profile() {
                ui.horizontal(|ui| {
                    ui.label("Nickname:");
                    ui.text_edit_singleline(&mut editor.nickname_text);
                });
                ui.horizontal(|ui| {
                    ui.label("Gender:");
                    for g in [Gender::Male, Gender::Female, Gender::Genderless, Gender::Unknown] {
                        ui.selectable_value(&mut editor.gender, g, g.label());
                    }
                });
                ui.checkbox(&mut editor.is_active, "Active");
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
                    save = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if save {
        actions::save_editor(app);
    } else if cancel || !open {
        app.editor = None;
    }
}

pub fn draw_confirm_delete(ctx: &egui::Context, app: &mut App) {
    let Some(id) = app.confirm_delete.clone() else { return };
    let name = app
        .view
        .find(&id)
        .map(|e| s!(e.display_name()))
        .unwrap_or_else(|| s!("this entry"));

    let mut do_delete = false;
    let mut cancel = false;

    egui::Window::new("Delete entry")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Remove {name} from this collection?"));
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let red = egui::Color32::from_rgb(220, 30, 30);
                let delete = egui::Button::new(
                    RichText::new("Delete").color(egui::Color32::BLACK).strong(),
                )
                .fill(red);
                if ui.add(delete).clicked() {
                    do_delete = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if do_delete {
        actions::delete_entry(app, id);
    } else if cancel {
        app.confirm_delete = None;
    }
}
