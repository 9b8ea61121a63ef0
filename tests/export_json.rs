// tests/export_json.rs
//
// JSON export round trip through ExportOptions and the filesystem.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use pokebox::config::options::ExportOptions;
use pokebox::export::{ to_json_string, write_export };
use pokebox::model::{ ContextId, EntryId, Gender, RosterEntry };
use pokebox::types::TypeTag;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("pokebox_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn entry(id: &str, species: &str) -> RosterEntry {
    RosterEntry {
        id: EntryId::new(id),
        nickname: None,
        species: species.into(),
        sprite_url: None,
        type1: Some(TypeTag::Electric),
        type2: None,
        is_active: true,
        gender: Gender::Female,
        created_at: None,
        context_id: ContextId::new("1"),
    }
}

#[test]
fn export_writes_entries_in_view_order() {
    let dir = tmp_dir("order");
    let mut options = ExportOptions::default();
    options.set_path(&dir.join("roster").to_string_lossy());

    let rows = [entry("2", "pikachu"), entry("1", "raichu")];
    let refs: Vec<&RosterEntry> = rows.iter().collect();
    let path = write_export(&options, &refs).unwrap();
    assert!(path.to_string_lossy().ends_with("roster.json"));

    let parsed: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["id"], "2");
    assert_eq!(arr[1]["id"], "1");
}

#[test]
fn export_uses_wire_field_names() {
    let rows = [entry("7", "pikachu")];
    let refs: Vec<&RosterEntry> = rows.iter().collect();
    let parsed: Value = serde_json::from_str(&to_json_string(&refs).unwrap()).unwrap();
    let row = &parsed.as_array().unwrap()[0];

    assert_eq!(row["species_name"], "pikachu");
    assert_eq!(row["game_id"], "1");
    assert_eq!(row["type_1"], "electric");
    assert_eq!(row["type_2"], Value::Null);
    assert_eq!(row["is_active"], true);
    assert_eq!(row["gender"], "female");
}

#[test]
fn export_output_reloads_as_a_snapshot() {
    let rows = [entry("7", "pikachu"), entry("8", "eevee")];
    let refs: Vec<&RosterEntry> = rows.iter().collect();
    let json = to_json_string(&refs).unwrap();

    let back: Vec<RosterEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), 2);
    assert_eq!(back[0].id.as_str(), "7");
    assert_eq!(back[1].species, "eevee");
    assert_eq!(back[0].type1, Some(TypeTag::Electric));
}

#[test]
fn set_path_ignores_a_pasted_extension() {
    let mut options = ExportOptions::default();
    options.set_path("out/mine.csv");
    assert!(options.out_path().to_string_lossy().ends_with("mine.json"));
}

#[test]
fn export_creates_missing_directories() {
    let dir = tmp_dir("mkdir");
    let mut options = ExportOptions::default();
    options.set_path(&dir.join("deep").join("roster").to_string_lossy());

    let rows = [entry("1", "pikachu")];
    let refs: Vec<&RosterEntry> = rows.iter().collect();
    let path = write_export(&options, &refs).unwrap();
    assert!(path.exists());
}
