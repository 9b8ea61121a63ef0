// src/store/cache.rs
//
// Last-known-good snapshots on disk. A fetch that succeeds overwrites the
// file for that context; a fetch that fails leaves it alone, so the app can
// keep showing (and the CLI can read) whatever was live last time.

use std::{
    fs,
    io,
    path::{ Path, PathBuf },
};

use crate::config::consts::STORE_DIR;
use crate::model::{ ContextId, ContextRef, RosterEntry };

const CONTEXTS_FILE: &str = "contexts.json";

pub fn snapshot_path(context: &ContextId) -> PathBuf {
    Path::new(STORE_DIR).join(format!("roster-{}.json", file_key(context.as_str())))
}

pub fn contexts_path() -> PathBuf {
    Path::new(STORE_DIR).join(CONTEXTS_FILE)
}

/// Persist a fetched roster snapshot. Returns the path written to.
pub fn save_snapshot(context: &ContextId, entries: &[RosterEntry]) -> io::Result<PathBuf> {
    let path = snapshot_path(context);
    write_json(&path, entries)?;
    Ok(path)
}

pub fn load_snapshot(context: &ContextId) -> io::Result<Vec<RosterEntry>> {
    read_json(&snapshot_path(context))
}

pub fn save_contexts(contexts: &[ContextRef]) -> io::Result<PathBuf> {
    let path = contexts_path();
    write_json(&path, contexts)?;
    Ok(path)
}

pub fn load_contexts() -> io::Result<Vec<ContextRef>> {
    read_json(&contexts_path())
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let contents = serde_json::to_string(value).map_err(invalid_data)?;
    fs::write(path, contents)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> io::Result<T> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(invalid_data)
}

fn invalid_data(e: serde_json::Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}

// Context ids come from the store and should be tame, but they end up in
// filenames, so squash anything that is not [A-Za-z0-9_-].
fn file_key(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect()
}

/* ---------- tests ---------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_key_squashes_oddballs() {
        assert_eq!(file_key("3"), "3");
        assert_eq!(file_key("a/b c"), "a-b-c");
    }

    #[test]
    fn snapshot_path_embeds_context() {
        let p = snapshot_path(&ContextId::new("12"));
        assert!(p.to_string_lossy().ends_with("roster-12.json"));
    }
}
