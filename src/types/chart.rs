// src/types/chart.rs
//
// Static effectiveness table. For each attacking type: the defending types
// it is strong against (×2), weak against (×0.5), and has no effect on (×0).
// Every unlisted pair is neutral (×1).
//
// The table is the tracker's own chart, kept verbatim; note grass lists
// flying among its strong targets.

use super::TypeTag::{ self, * };

pub struct ChartRow {
    pub strong: &'static [TypeTag],
    pub weak: &'static [TypeTag],
    pub immune: &'static [TypeTag],
}

// Indexed by the attacking TypeTag's discriminant (declaration order).
pub static CHART: [ChartRow; 18] = [
    // Normal
    ChartRow {
        strong: &[],
        weak: &[Rock, Steel],
        immune: &[Ghost],
    },
    // Fire
    ChartRow {
        strong: &[Grass, Ice, Bug, Steel],
        weak: &[Fire, Water, Rock, Dragon],
        immune: &[],
    },
    // Water
    ChartRow {
        strong: &[Fire, Ground, Rock],
        weak: &[Water, Grass, Dragon],
        immune: &[],
    },
    // Electric
    ChartRow {
        strong: &[Water, Flying],
        weak: &[Electric, Grass, Dragon],
        immune: &[Ground],
    },
    // Grass
    ChartRow {
        strong: &[Water, Ground, Rock, Flying],
        weak: &[Fire, Grass, Poison, Bug, Dragon, Steel],
        immune: &[],
    },
    // Ice
    ChartRow {
        strong: &[Grass, Ground, Flying, Dragon],
        weak: &[Fire, Water, Ice, Steel],
        immune: &[],
    },
    // Fighting
    ChartRow {
        strong: &[Normal, Ice, Rock, Dark, Steel],
        weak: &[Poison, Flying, Psychic, Bug, Fairy],
        immune: &[Ghost],
    },
    // Poison
    ChartRow {
        strong: &[Grass, Fairy],
        weak: &[Poison, Ground, Rock, Ghost],
        immune: &[Steel],
    },
    // Ground
    ChartRow {
        strong: &[Fire, Electric, Poison, Rock, Steel],
        weak: &[Grass, Bug],
        immune: &[Flying],
    },
    // Flying
    ChartRow {
        strong: &[Grass, Fighting, Bug],
        weak: &[Electric, Rock, Steel],
        immune: &[],
    },
    // Psychic
    ChartRow {
        strong: &[Fighting, Poison],
        weak: &[Psychic, Steel],
        immune: &[Dark],
    },
    // Bug
    ChartRow {
        strong: &[Grass, Psychic, Dark],
        weak: &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy],
        immune: &[],
    },
    // Rock
    ChartRow {
        strong: &[Fire, Ice, Flying, Bug],
        weak: &[Fighting, Ground, Steel],
        immune: &[],
    },
    // Ghost
    ChartRow {
        strong: &[Psychic, Ghost],
        weak: &[Dark],
        immune: &[Normal],
    },
    // Dragon
    ChartRow {
        strong: &[Dragon],
        weak: &[Steel],
        immune: &[Fairy],
    },
    // Dark
    ChartRow {
        strong: &[Psychic, Ghost],
        weak: &[Fighting, Dark, Fairy],
        immune: &[],
    },
    // Steel
    ChartRow {
        strong: &[Ice, Rock, Fairy],
        weak: &[Fire, Water, Electric, Steel],
        immune: &[],
    },
    // Fairy
    ChartRow {
        strong: &[Fighting, Dragon, Dark],
        weak: &[Fire, Poison, Steel],
        immune: &[],
    },
];

/// Effectiveness of one attacking type against one defending type.
pub fn multiplier(attack: TypeTag, defend: TypeTag) -> f32 {
    let row = &CHART[attack as usize];
    if row.immune.contains(&defend) {
        0.0
    } else if row.strong.contains(&defend) {
        2.0
    } else if row.weak.contains(&defend) {
        0.5
    } else {
        1.0
    }
}
