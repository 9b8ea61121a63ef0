// src/model.rs
//
// Wire/domain model for roster entries. Sources disagree about
// representation (numeric vs textual ids, boolean vs stringly is_active,
// free-form gender tags), so every normalization happens exactly once,
// here, at ingestion. Downstream code only ever sees the parsed forms.

use std::fmt;

use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Deserializer, Serialize };
use serde_json::Value;

use crate::types::TypeTag;

/* ---------- ids ---------- */

/// Opaque entry identifier, compared by string form: a JSON number 42 and a
/// JSON string "42" are the same id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        string_form(deserializer).map(EntryId)
    }
}

/// Identifier of the owning collection ("context"); same id scheme.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContextId(String);

impl ContextId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ContextId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        string_form(deserializer).map(ContextId)
    }
}

fn string_form<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "id must be a string or number, got {other}"
        ))),
    }
}

/* ---------- flags ---------- */

/// The canonical truthy set for the tri-represented active flag: a native
/// boolean, or (stringified, lowercased) one of "true" / "t" / "1".
/// Everything else is inactive. This is the only place the flag is parsed.
pub fn is_active_from(value: &Value) -> bool {
    let text = match value {
        Value::Bool(b) => return *b,
        Value::String(s) => s.trim().to_ascii_lowercase(),
        Value::Number(n) => n.to_string(),
        _ => return false,
    };
    matches!(text.as_str(), "true" | "t" | "1")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Genderless,
    #[default]
    Unknown,
}

impl Gender {
    /// Normalize a free-form gender tag against the known synonym sets.
    /// Unrecognized strings (including "" and a literal "null") are Unknown.
    pub fn parse(raw: Option<&str>) -> Gender {
        let Some(raw) = raw else { return Gender::Unknown };
        match raw.trim().to_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            "female" | "f" => Gender::Female,
            "none" | "genderless" | "nenhum"
            | "sem genero" | "sem-genero" | "sem gênero" => Gender::Genderless,
            _ => Gender::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Genderless => "Genderless",
            Gender::Unknown => "Unknown",
        }
    }
}

/* ---------- roster entry ---------- */

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: EntryId,

    #[serde(default)]
    pub nickname: Option<String>,

    /// Canonical lowercase key into catalog lookups.
    #[serde(rename = "species_name")]
    pub species: String,

    #[serde(default)]
    pub sprite_url: Option<String>,

    #[serde(rename = "type_1", default, deserialize_with = "de_type_tag")]
    pub type1: Option<TypeTag>,

    #[serde(rename = "type_2", default, deserialize_with = "de_type_tag")]
    pub type2: Option<TypeTag>,

    #[serde(default, deserialize_with = "de_is_active")]
    pub is_active: bool,

    #[serde(default, deserialize_with = "de_gender")]
    pub gender: Gender,

    #[serde(default, deserialize_with = "de_created_at")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "game_id")]
    pub context_id: ContextId,
}

impl RosterEntry {
    /// Nickname when present and non-empty, else the species.
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.species)
    }

    /// Lowercased key for alphabetical ordering.
    pub fn sort_key(&self) -> String {
        self.display_name().to_lowercase()
    }
}

/// Human form of a canonical species key: "mr-mime" → "Mr Mime". Dashes
/// and underscores both read as word breaks; runs of whitespace collapse.
pub fn format_species(name: &str) -> String {
    name.replace(['-', '_'], " ")
        .split_whitespace()
        .map(|w| {
            let lower = w.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn de_type_tag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<TypeTag>, D::Error> {
    // Unknown tags normalize to "no type"; they never fail the row.
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(TypeTag::parse))
}

fn de_is_active<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let v = Value::deserialize(deserializer)?;
    Ok(is_active_from(&v))
}

fn de_gender<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Gender, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(Gender::parse(raw.as_deref()))
}

fn de_created_at<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    // A malformed timestamp degrades to "no timestamp" (sorts as earliest).
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc)))
}

/* ---------- write payloads ---------- */

/// Fields for a create; the store assigns the id.
#[derive(Clone, Debug, Serialize)]
pub struct NewEntry {
    #[serde(rename = "species_name")]
    pub species: String,
    pub nickname: Option<String>,
    #[serde(rename = "game_id")]
    pub context_id: ContextId,
    pub sprite_url: Option<String>,
    #[serde(rename = "type_1")]
    pub type1: Option<TypeTag>,
    #[serde(rename = "type_2")]
    pub type2: Option<TypeTag>,
    pub gender: Gender,
    pub is_active: bool,
}

/// Partial update; only set fields are sent. The nullable columns use a
/// double Option so a patch can clear them (Some(None) → explicit null);
/// evolving into a single-typed species must null out type_2.
#[derive(Clone, Debug, Default, Serialize)]
pub struct EntryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(rename = "game_id", skip_serializing_if = "Option::is_none")]
    pub context_id: Option<ContextId>,
    #[serde(rename = "species_name", skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite_url: Option<Option<String>>,
    #[serde(rename = "type_1", skip_serializing_if = "Option::is_none")]
    pub type1: Option<Option<TypeTag>>,
    #[serde(rename = "type_2", skip_serializing_if = "Option::is_none")]
    pub type2: Option<Option<TypeTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/* ---------- contexts ---------- */

/// A selectable collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRef {
    pub id: ContextId,
    pub name: String,
}

/* ---------- tests ---------- */

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry_with_active(active: Value) -> RosterEntry {
        serde_json::from_value(json!({
            "id": 1,
            "species_name": "pikachu",
            "game_id": 1,
            "is_active": active,
        }))
        .unwrap()
    }

    #[test]
    fn is_active_truthy_set_is_closed() {
        for v in [json!(true), json!("true"), json!("TRUE"), json!("t"), json!("1"), json!(1)] {
            assert!(entry_with_active(v.clone()).is_active, "{v} should be active");
        }
        for v in [
            json!(false), json!("false"), json!("0"), json!(0),
            json!("yes"), json!("active"), json!(""), json!(null),
        ] {
            assert!(!entry_with_active(v.clone()).is_active, "{v} should be inactive");
        }
    }

    #[test]
    fn missing_is_active_defaults_to_inactive() {
        let e: RosterEntry = serde_json::from_value(json!({
            "id": 1,
            "species_name": "pikachu",
            "game_id": 1,
        }))
        .unwrap();
        assert!(!e.is_active);
    }

    #[test]
    fn gender_synonyms_normalize() {
        assert_eq!(Gender::parse(Some("M")), Gender::Male);
        assert_eq!(Gender::parse(Some("male")), Gender::Male);
        assert_eq!(Gender::parse(Some(" Female ")), Gender::Female);
        assert_eq!(Gender::parse(Some("f")), Gender::Female);
        for s in ["none", "genderless", "Nenhum", "sem genero", "sem-genero", "sem gênero"] {
            assert_eq!(Gender::parse(Some(s)), Gender::Genderless, "{s}");
        }
    }

    #[test]
    fn unrecognized_gender_is_unknown() {
        for s in ["", "null", "robot", "??"] {
            assert_eq!(Gender::parse(Some(s)), Gender::Unknown, "{s:?}");
        }
        assert_eq!(Gender::parse(None), Gender::Unknown);
    }

    #[test]
    fn gender_deserializes_through_the_same_parser() {
        let e: RosterEntry = serde_json::from_value(json!({
            "id": 1,
            "species_name": "pikachu",
            "game_id": 1,
            "gender": "NENHUM",
        }))
        .unwrap();
        assert_eq!(e.gender, Gender::Genderless);
    }

    #[test]
    fn unknown_type_tags_degrade_to_no_type() {
        let e: RosterEntry = serde_json::from_value(json!({
            "id": 1,
            "species_name": "pikachu",
            "game_id": 1,
            "type_1": "electric",
            "type_2": "shiny",
        }))
        .unwrap();
        assert_eq!(e.type1, Some(crate::types::TypeTag::Electric));
        assert_eq!(e.type2, None);
    }

    #[test]
    fn format_species_folds_separators() {
        assert_eq!(format_species("mr-mime"), "Mr Mime");
        assert_eq!(format_species("tapu_koko"), "Tapu Koko");
        assert_eq!(format_species("MR-MIME"), "Mr Mime");
        assert_eq!(format_species("  ho -_ oh "), "Ho Oh");
        assert_eq!(format_species("pikachu"), "Pikachu");
        assert_eq!(format_species(""), "");
    }
}
