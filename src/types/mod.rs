// src/types/mod.rs
//
// The 18 elemental type tags and the effectiveness machinery built on them.
// Tags are canonical lowercase on the wire; anything unrecognized normalizes
// to "no type" at the parse site instead of erroring.

pub mod chart;
pub mod matchup;

pub use chart::multiplier;
pub use matchup::{ Matchups, matchups };

use std::fmt;
use serde::{ Deserialize, Deserializer, Serialize, Serializer };

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeTag {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

use TypeTag::*;

impl TypeTag {
    pub const ALL: [TypeTag; 18] = [
        Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Normal => "normal",
            Fire => "fire",
            Water => "water",
            Electric => "electric",
            Grass => "grass",
            Ice => "ice",
            Fighting => "fighting",
            Poison => "poison",
            Ground => "ground",
            Flying => "flying",
            Psychic => "psychic",
            Bug => "bug",
            Rock => "rock",
            Ghost => "ghost",
            Dragon => "dragon",
            Dark => "dark",
            Steel => "steel",
            Fairy => "fairy",
        }
    }

    /// Capitalized form for labels.
    pub fn label(self) -> &'static str {
        match self {
            Normal => "Normal",
            Fire => "Fire",
            Water => "Water",
            Electric => "Electric",
            Grass => "Grass",
            Ice => "Ice",
            Fighting => "Fighting",
            Poison => "Poison",
            Ground => "Ground",
            Flying => "Flying",
            Psychic => "Psychic",
            Bug => "Bug",
            Rock => "Rock",
            Ghost => "Ghost",
            Dragon => "Dragon",
            Dark => "Dark",
            Steel => "Steel",
            Fairy => "Fairy",
        }
    }

    /// Case-insensitive tag lookup. Unknown strings are None, never an error.
    pub fn parse(raw: &str) -> Option<TypeTag> {
        let tag = raw.trim().to_ascii_lowercase();
        match tag.as_str() {
            "normal" => Some(Normal),
            "fire" => Some(Fire),
            "water" => Some(Water),
            "electric" => Some(Electric),
            "grass" => Some(Grass),
            "ice" => Some(Ice),
            "fighting" => Some(Fighting),
            "poison" => Some(Poison),
            "ground" => Some(Ground),
            "flying" => Some(Flying),
            "psychic" => Some(Psychic),
            "bug" => Some(Bug),
            "rock" => Some(Rock),
            "ghost" => Some(Ghost),
            "dragon" => Some(Dragon),
            "dark" => Some(Dark),
            "steel" => Some(Steel),
            "fairy" => Some(Fairy),
            _ => None,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TypeTag::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown type tag: {raw}")))
    }
}
