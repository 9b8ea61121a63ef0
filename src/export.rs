// src/export.rs

use std::{ fs, path::{ Path, PathBuf } };

use crate::config::options::ExportOptions;
use crate::model::RosterEntry;

/// Write the given entries as one pretty-printed JSON document based on
/// ExportOptions (directory + file stem). Returns the final path written to.
///
/// Entries arrive in view order and are written in that order; fields mirror
/// the store's wire names, so an export is also a usable snapshot.
pub fn write_export(
    export: &ExportOptions,
    entries: &[&RosterEntry],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_json_string(entries)?;
    fs::write(&path, contents)?;
    Ok(path)
}

pub fn to_json_string(entries: &[&RosterEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
