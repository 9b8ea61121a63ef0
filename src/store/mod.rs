// src/store/mod.rs
//
// Roster persistence against the REST store. The store speaks PostgREST
// conventions: filters as query params (`game_id=eq.{id}`), writes echo
// the stored row back when asked via `Prefer: return=representation`.

pub mod cache;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::consts::{ STORE_HOST, STORE_PREFIX };
use crate::model::{ ContextId, ContextRef, EntryId, EntryPatch, NewEntry, RosterEntry };
use crate::net::{ self, NetError };

const ENTRY_COLUMNS: &str =
    "id,nickname,species_name,sprite_url,type_1,type_2,is_active,gender,created_at,game_id";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Fetch(#[from] NetError),

    #[error("store response did not decode: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("store returned no row for a write")]
    MissingRow,
}

/// Everything the app needs from roster persistence. The REST client
/// implements this; tests substitute their own.
pub trait RosterStore: Send + Sync {
    fn contexts(&self) -> Result<Vec<ContextRef>, StoreError>;
    fn fetch(&self, context: &ContextId) -> Result<Vec<RosterEntry>, StoreError>;
    fn create(&self, entry: &NewEntry) -> Result<RosterEntry, StoreError>;
    fn update(&self, id: &EntryId, patch: &EntryPatch) -> Result<RosterEntry, StoreError>;
    fn delete(&self, id: &EntryId) -> Result<(), StoreError>;
}

pub struct RestStore {
    host: String,
    prefix: String,
}

impl RestStore {
    pub fn new() -> Self {
        Self { host: s!(STORE_HOST), prefix: s!(STORE_PREFIX) }
    }

    fn path(&self, rest: &str) -> String {
        join!(&self.prefix, rest)
    }
}

impl Default for RestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterStore for RestStore {
    fn contexts(&self) -> Result<Vec<ContextRef>, StoreError> {
        let path = self.path("games?select=id,name&order=created_at.asc");
        debug!("store: GET {path}");
        let body = net::get(&self.host, &path)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn fetch(&self, context: &ContextId) -> Result<Vec<RosterEntry>, StoreError> {
        let path = self.path(&format!(
            "pokemons?select={ENTRY_COLUMNS}&game_id=eq.{}&order=created_at.asc",
            net::urlencode(context.as_str())
        ));
        debug!("store: GET {path}");
        let body = net::get(&self.host, &path)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn create(&self, entry: &NewEntry) -> Result<RosterEntry, StoreError> {
        let path = self.path("pokemons");
        let payload = serde_json::to_string(entry)?;
        debug!("store: POST {path}");
        let body = net::post(
            &self.host,
            &path,
            &[("Prefer", "return=representation")],
            &payload,
        )?;
        first_row(&body)
    }

    fn update(&self, id: &EntryId, patch: &EntryPatch) -> Result<RosterEntry, StoreError> {
        let path = self.path(&format!("pokemons?id=eq.{}", net::urlencode(id.as_str())));
        let payload = serde_json::to_string(patch)?;
        debug!("store: PATCH {path}");
        let body = net::patch(
            &self.host,
            &path,
            &[("Prefer", "return=representation")],
            &payload,
        )?;
        first_row(&body)
    }

    fn delete(&self, id: &EntryId) -> Result<(), StoreError> {
        let path = self.path(&format!("pokemons?id=eq.{}", net::urlencode(id.as_str())));
        debug!("store: DELETE {path}");
        net::delete(&self.host, &path)?;
        Ok(())
    }
}

// Writes with return=representation come back as a one-element array.
fn first_row(body: &str) -> Result<RosterEntry, StoreError> {
    let mut rows: Vec<Value> = serde_json::from_str(body)?;
    if rows.is_empty() {
        return Err(StoreError::MissingRow);
    }
    Ok(serde_json::from_value(rows.remove(0))?)
}

/* ---------- tests ---------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_takes_the_first() {
        let body = r#"[{"id": 7, "species_name": "pikachu", "game_id": 1}]"#;
        let row = first_row(body).unwrap();
        assert_eq!(row.id.as_str(), "7");
        assert_eq!(row.species, "pikachu");
    }

    #[test]
    fn first_row_rejects_empty() {
        assert!(matches!(first_row("[]"), Err(StoreError::MissingRow)));
    }
}
