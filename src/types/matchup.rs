// src/types/matchup.rs
//
// Combined matchups for a defender with up to two types: every attacking
// type's multiplier is the product of its per-type effectiveness, with an
// absent defending slot contributing ×1. Neutral results (×1) are excluded
// from all three lists.

use super::{ TypeTag, chart };

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matchups {
    /// Combined multiplier > 1, sorted multiplier desc then name asc.
    pub weaknesses: Vec<(TypeTag, f32)>,
    /// Combined multiplier in (0, 1), sorted multiplier asc then name asc.
    pub resistances: Vec<(TypeTag, f32)>,
    /// Combined multiplier 0, sorted by name.
    pub immunities: Vec<(TypeTag, f32)>,
}

pub fn matchups(def1: Option<TypeTag>, def2: Option<TypeTag>) -> Matchups {
    let mut out = Matchups::default();

    for attack in TypeTag::ALL {
        let m1 = def1.map_or(1.0, |d| chart::multiplier(attack, d));
        let m2 = def2.map_or(1.0, |d| chart::multiplier(attack, d));
        let mult = m1 * m2;

        if mult == 0.0 {
            out.immunities.push((attack, mult));
        } else if mult > 1.0 {
            out.weaknesses.push((attack, mult));
        } else if mult < 1.0 {
            out.resistances.push((attack, mult));
        }
        // mult == 1.0 → neutral, excluded
    }

    out.weaknesses.sort_by(|a, b| {
        b.1.total_cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str()))
    });
    out.resistances.sort_by(|a, b| {
        a.1.total_cmp(&b.1).then_with(|| a.0.as_str().cmp(b.0.as_str()))
    });
    out.immunities.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));

    out
}

impl Matchups {
    pub fn is_empty(&self) -> bool {
        self.weaknesses.is_empty() && self.resistances.is_empty() && self.immunities.is_empty()
    }
}
