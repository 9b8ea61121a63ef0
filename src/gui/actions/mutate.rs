// src/gui/actions/mutate.rs
//
// Store writes. These run on the UI thread: the payloads are tiny and a
// confirmed row must fold into the session before the next frame anyway.
// The store echoes the written row back, and that echo (not the local
// form state) is what becomes the pending add.

use tracing::{ error, info };

use crate::gui::app::App;
use crate::gui::components::editor::EditorTarget;
use crate::model::{ EntryId, EntryPatch, NewEntry };
use crate::session::Event;

/// Commit the open editor. On success the editor closes and the echoed
/// row lands in the session; on failure the window stays open with
/// everything typed still in place.
pub fn save_editor(app: &mut App) {
    let Some(editor) = app.editor.take() else { return };

    let nickname = {
        let trimmed = editor.nickname_text.trim();
        if trimmed.is_empty() { None } else { Some(s!(trimmed)) }
    };

    let result = match &editor.target {
        EditorTarget::Create => {
            let Some(context) = app.session.context_id.clone() else { return };
            let key = editor.species_key();
            // Save is only enabled once the lookup resolved.
            let Some(info) = app.cache.get(&key) else {
                app.editor = Some(editor);
                return;
            };
            let entry = NewEntry {
                species: info.species.clone(),
                nickname,
                context_id: context,
                sprite_url: info.sprite_url.clone(),
                type1: info.type1(),
                type2: info.type2(),
                gender: editor.gender,
                is_active: editor.is_active,
            };
            info!("store: create species={}", entry.species);
            app.store.create(&entry)
        }

        EditorTarget::Edit(id) => {
            let patch = EntryPatch {
                nickname: Some(nickname),
                gender: Some(editor.gender),
                is_active: Some(editor.is_active),
                ..EntryPatch::default()
            };
            info!("store: update id={}", id.as_str());
            app.store.update(id, &patch)
        }

        EditorTarget::Evolve(id) => {
            let key = editor.species_key();
            let Some(info) = app.cache.get(&key) else {
                app.editor = Some(editor);
                return;
            };
            // A single-typed evolution must null out the second slot.
            let patch = EntryPatch {
                species: Some(info.species.clone()),
                sprite_url: Some(info.sprite_url.clone()),
                type1: Some(info.type1()),
                type2: Some(info.type2()),
                ..EntryPatch::default()
            };
            info!("store: evolve id={} into {}", id.as_str(), info.species);
            app.store.update(id, &patch)
        }
    };

    match result {
        Ok(entry) => {
            let name = s!(entry.display_name());
            app.apply(Event::EntrySaved(entry));
            app.status(format!("Saved {name}"));
        }
        Err(e) => {
            error!("store: save failed: {e}");
            app.status(format!("Error: {e}"));
            app.editor = Some(editor);
        }
    }
}

pub fn delete_entry(app: &mut App, id: EntryId) {
    app.confirm_delete = None;
    info!("store: delete id={}", id.as_str());
    match app.store.delete(&id) {
        Ok(()) => {
            app.apply(Event::EntryDeleted(id));
            app.status("Entry deleted");
        }
        Err(e) => {
            error!("store: delete failed: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
