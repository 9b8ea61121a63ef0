// tests/matchups.rs
//
// Type-effectiveness engine against known defenders.

use pokebox::types::{ TypeTag, matchups, multiplier };

fn names(list: &[(TypeTag, f32)]) -> Vec<&str> {
    list.iter().map(|(t, _)| t.as_str()).collect()
}

fn mult_of(list: &[(TypeTag, f32)], tag: TypeTag) -> Option<f32> {
    list.iter().find(|(t, _)| *t == tag).map(|(_, m)| *m)
}

#[test]
fn fire_flying_worked_example() {
    let m = matchups(Some(TypeTag::Fire), Some(TypeTag::Flying));

    // rock is double-strong: x2 against fire, x2 against flying
    assert_eq!(mult_of(&m.weaknesses, TypeTag::Rock), Some(4.0));
    assert_eq!(mult_of(&m.weaknesses, TypeTag::Water), Some(2.0));

    // flying is immune to ground, so the combined multiplier is 0
    assert_eq!(names(&m.immunities), vec!["ground"]);

    // grass: x0.5 against fire, x2 against flying, combined x1 -> excluded
    assert!(mult_of(&m.weaknesses, TypeTag::Grass).is_none());
    assert!(mult_of(&m.resistances, TypeTag::Grass).is_none());
    assert!(mult_of(&m.immunities, TypeTag::Grass).is_none());
}

#[test]
fn fire_flying_full_ordering() {
    let m = matchups(Some(TypeTag::Fire), Some(TypeTag::Flying));

    // Multiplier descending, names ascending within a tie.
    assert_eq!(names(&m.weaknesses), vec!["rock", "electric", "water"]);

    // Multiplier ascending; bug stacks to x0.25, the rest tie at x0.5.
    assert_eq!(
        names(&m.resistances),
        vec!["bug", "fairy", "fighting", "fire", "steel"]
    );
    assert_eq!(mult_of(&m.resistances, TypeTag::Bug), Some(0.25));
    assert_eq!(mult_of(&m.resistances, TypeTag::Fairy), Some(0.5));
}

#[test]
fn single_type_defender_uses_neutral_second_slot() {
    let m = matchups(Some(TypeTag::Normal), None);
    assert_eq!(names(&m.weaknesses), vec!["fighting"]);
    assert_eq!(names(&m.immunities), vec!["ghost"]);
    assert!(m.resistances.is_empty());
}

#[test]
fn typeless_defender_has_no_matchups() {
    assert!(matchups(None, None).is_empty());
}

#[test]
fn neutral_pairs_never_appear() {
    for d1 in TypeTag::ALL {
        for d2 in TypeTag::ALL {
            let m = matchups(Some(d1), Some(d2));
            for attack in TypeTag::ALL {
                let combined = multiplier(attack, d1) * multiplier(attack, d2);
                let listed = mult_of(&m.weaknesses, attack)
                    .or(mult_of(&m.resistances, attack))
                    .or(mult_of(&m.immunities, attack));
                if combined == 1.0 {
                    assert!(listed.is_none(), "{attack} vs {d1}/{d2} is neutral");
                } else {
                    assert_eq!(listed, Some(combined), "{attack} vs {d1}/{d2}");
                }
            }
        }
    }
}

#[test]
fn immunities_sort_by_name() {
    // Dark/ghost: immune to normal, fighting and psychic.
    let m = matchups(Some(TypeTag::Dark), Some(TypeTag::Ghost));
    assert_eq!(names(&m.immunities), vec!["fighting", "normal", "psychic"]);
}

#[test]
fn chart_keeps_the_trackers_grass_row() {
    // The tracker's chart lists flying among grass's strong targets.
    assert_eq!(multiplier(TypeTag::Grass, TypeTag::Flying), 2.0);
    assert_eq!(multiplier(TypeTag::Ground, TypeTag::Flying), 0.0);
    assert_eq!(multiplier(TypeTag::Water, TypeTag::Fire), 2.0);
    assert_eq!(multiplier(TypeTag::Normal, TypeTag::Normal), 1.0);
}

#[test]
fn duplicated_defender_type_squares_the_multiplier() {
    // Degenerate input, but the combination rule still holds: x2 * x2.
    let m = matchups(Some(TypeTag::Grass), Some(TypeTag::Grass));
    assert_eq!(mult_of(&m.weaknesses, TypeTag::Fire), Some(4.0));
}
