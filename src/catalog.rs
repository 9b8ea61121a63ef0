// src/catalog.rs
//
// Species catalog: resolves a species name to its canonical sprite, types
// and base stats. Backed by a local PokeAPI mirror; responses are decoded
// from the subset of fields we actually use.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::consts::{ CATALOG_HOST, CATALOG_PREFIX };
use crate::net::{ self, NetError };
use crate::types::TypeTag;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog has no such species. Not transient; don't retry.
    #[error("unknown species: {0}")]
    UnknownSpecies(String),

    #[error("catalog request failed: {0}")]
    Fetch(#[from] NetError),

    #[error("catalog response did not decode: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Canonical facts about one species.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeciesInfo {
    /// Catalog's canonical (lowercase) name.
    pub species: String,
    pub sprite_url: Option<String>,
    /// In slot order; one or two entries.
    pub types: Vec<TypeTag>,
    /// (stat key, base value) in catalog order.
    pub stats: Vec<(String, u32)>,
}

impl SpeciesInfo {
    pub fn type1(&self) -> Option<TypeTag> {
        self.types.first().copied()
    }

    pub fn type2(&self) -> Option<TypeTag> {
        self.types.get(1).copied()
    }
}

pub trait SpeciesCatalog: Send + Sync {
    fn lookup(&self, species: &str) -> Result<SpeciesInfo, CatalogError>;
}

pub struct RestCatalog {
    host: String,
    prefix: String,
}

impl RestCatalog {
    pub fn new() -> Self {
        Self { host: s!(CATALOG_HOST), prefix: s!(CATALOG_PREFIX) }
    }
}

impl Default for RestCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeciesCatalog for RestCatalog {
    fn lookup(&self, species: &str) -> Result<SpeciesInfo, CatalogError> {
        let key = species.trim().to_lowercase();
        let path = join!(&self.prefix, "pokemon/", &net::urlencode(&key));
        debug!("catalog: GET {path}");
        let body = match net::get(&self.host, &path) {
            Ok(body) => body,
            Err(e) if e.code() == Some(404) => {
                return Err(CatalogError::UnknownSpecies(key));
            }
            Err(e) => return Err(e.into()),
        };
        let api: ApiPokemon = serde_json::from_str(&body)?;
        Ok(api.into_info())
    }
}

/* ---------- wire format ---------- */

#[derive(Deserialize)]
struct ApiPokemon {
    name: String,
    #[serde(default)]
    sprites: ApiSprites,
    #[serde(default)]
    types: Vec<ApiTypeSlot>,
    #[serde(default)]
    stats: Vec<ApiStat>,
}

#[derive(Default, Deserialize)]
struct ApiSprites {
    front_default: Option<String>,
    other: Option<ApiOtherSprites>,
}

#[derive(Deserialize)]
struct ApiOtherSprites {
    #[serde(rename = "official-artwork")]
    official_artwork: Option<ApiArtwork>,
}

#[derive(Deserialize)]
struct ApiArtwork {
    front_default: Option<String>,
}

#[derive(Deserialize)]
struct ApiTypeSlot {
    slot: u32,
    #[serde(rename = "type")]
    kind: ApiNamed,
}

#[derive(Deserialize)]
struct ApiStat {
    base_stat: u32,
    stat: ApiNamed,
}

#[derive(Deserialize)]
struct ApiNamed {
    name: String,
}

impl ApiPokemon {
    fn into_info(mut self) -> SpeciesInfo {
        // Prefer the official artwork; fall back to the plain front sprite.
        let sprite_url = self
            .sprites
            .other
            .and_then(|o| o.official_artwork)
            .and_then(|a| a.front_default)
            .or(self.sprites.front_default);

        self.types.sort_by_key(|t| t.slot);
        let types = self
            .types
            .into_iter()
            .filter_map(|t| TypeTag::parse(&t.kind.name))
            .collect();

        let stats = self
            .stats
            .into_iter()
            .map(|st| (st.stat.name, st.base_stat))
            .collect();

        SpeciesInfo { species: self.name, sprite_url, types, stats }
    }
}

/* ---------- cache ---------- */

#[derive(Clone, Debug, PartialEq)]
enum CacheSlot {
    /// A lookup is in flight; don't start another.
    Pending,
    Found(SpeciesInfo),
    Missing,
}

/// In-memory lookup results, keyed by lowercased species name. "Missing"
/// is cached too, so a bad name doesn't hammer the catalog; transient
/// failures are forgotten and retried on next demand.
#[derive(Default)]
pub struct CatalogCache {
    slots: HashMap<String, CacheSlot>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, species: &str) -> Option<&SpeciesInfo> {
        match self.slots.get(&key(species)) {
            Some(CacheSlot::Found(info)) => Some(info),
            _ => None,
        }
    }

    pub fn is_pending(&self, species: &str) -> bool {
        matches!(self.slots.get(&key(species)), Some(CacheSlot::Pending))
    }

    pub fn is_missing(&self, species: &str) -> bool {
        matches!(self.slots.get(&key(species)), Some(CacheSlot::Missing))
    }

    /// Claim a lookup. True means the caller should spawn the fetch;
    /// false means the answer is cached or someone already claimed it.
    pub fn begin(&mut self, species: &str) -> bool {
        let k = key(species);
        if self.slots.contains_key(&k) {
            return false;
        }
        self.slots.insert(k, CacheSlot::Pending);
        true
    }

    pub fn resolve(&mut self, species: &str, result: Result<SpeciesInfo, CatalogError>) {
        let k = key(species);
        match result {
            Ok(info) => {
                self.slots.insert(k, CacheSlot::Found(info));
            }
            Err(CatalogError::UnknownSpecies(_)) => {
                self.slots.insert(k, CacheSlot::Missing);
            }
            Err(_) => {
                // Transient. Clear the claim so a later demand retries.
                self.slots.remove(&k);
            }
        }
    }

    /// Drop an in-flight claim whose result will never arrive (the fetch
    /// belonged to a superseded load). Settled slots stay.
    pub fn cancel(&mut self, species: &str) {
        let k = key(species);
        if matches!(self.slots.get(&k), Some(CacheSlot::Pending)) {
            self.slots.remove(&k);
        }
    }

    pub fn has_pending(&self) -> bool {
        self.slots.values().any(|s| matches!(s, CacheSlot::Pending))
    }
}

fn key(species: &str) -> String {
    species.trim().to_lowercase()
}

/* ---------- tests ---------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str) -> SpeciesInfo {
        SpeciesInfo {
            species: s!(name),
            sprite_url: None,
            types: vec![TypeTag::Electric],
            stats: vec![(s!("speed"), 90)],
        }
    }

    #[test]
    fn decode_prefers_official_artwork() {
        let body = r#"{
            "name": "pikachu",
            "sprites": {
                "front_default": "http://img/front.png",
                "other": { "official-artwork": { "front_default": "http://img/art.png" } }
            },
            "types": [
                { "slot": 2, "type": { "name": "flying" } },
                { "slot": 1, "type": { "name": "electric" } }
            ],
            "stats": [
                { "base_stat": 35, "stat": { "name": "hp" } }
            ]
        }"#;
        let api: ApiPokemon = serde_json::from_str(body).unwrap();
        let info = api.into_info();
        assert_eq!(info.sprite_url.as_deref(), Some("http://img/art.png"));
        assert_eq!(info.types, vec![TypeTag::Electric, TypeTag::Flying]);
        assert_eq!(info.stats, vec![(s!("hp"), 35)]);
    }

    #[test]
    fn decode_falls_back_to_front_sprite() {
        let body = r#"{ "name": "ditto", "sprites": { "front_default": "http://img/d.png" } }"#;
        let api: ApiPokemon = serde_json::from_str(body).unwrap();
        assert_eq!(api.into_info().sprite_url.as_deref(), Some("http://img/d.png"));
    }

    #[test]
    fn begin_claims_once() {
        let mut cache = CatalogCache::new();
        assert!(cache.begin("Pikachu"));
        assert!(!cache.begin("pikachu"));
        assert!(cache.is_pending("PIKACHU"));
    }

    #[test]
    fn resolve_settles_found_and_missing() {
        let mut cache = CatalogCache::new();
        cache.begin("pikachu");
        cache.resolve("pikachu", Ok(info("pikachu")));
        assert!(cache.get("pikachu").is_some());

        cache.begin("pikachuu");
        cache.resolve("pikachuu", Err(CatalogError::UnknownSpecies(s!("pikachuu"))));
        assert!(cache.is_missing("pikachuu"));
        assert!(cache.get("pikachuu").is_none());
    }

    #[test]
    fn transient_failure_allows_retry() {
        let mut cache = CatalogCache::new();
        cache.begin("eevee");
        let err = CatalogError::Fetch(NetError::Status {
            code: 500,
            host: s!("pokeapi.lan"),
            path: s!("/api/v2/pokemon/eevee"),
        });
        cache.resolve("eevee", Err(err));
        assert!(!cache.is_pending("eevee"));
        assert!(cache.begin("eevee"));
    }

    #[test]
    fn cancel_only_clears_pending() {
        let mut cache = CatalogCache::new();
        cache.begin("mew");
        cache.resolve("mew", Ok(info("mew")));
        cache.cancel("mew");
        assert!(cache.get("mew").is_some());

        cache.begin("mewtwo");
        cache.cancel("mewtwo");
        assert!(!cache.is_pending("mewtwo"));
        assert!(cache.begin("mewtwo"));
    }
}
