// benches/matchups.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use pokebox::model::{ ContextId, EntryId, Gender, RosterEntry };
use pokebox::roster::{ RosterView, SortMode, SortState };
use pokebox::session::Session;
use pokebox::types::{ TypeTag, matchups };

fn synthetic_roster(n: usize) -> Vec<RosterEntry> {
    (0..n)
        .map(|i| RosterEntry {
            id: EntryId::new(i.to_string()),
            nickname: (i % 3 == 0).then(|| format!("nick-{i}")),
            species: format!("species-{}", i % 151),
            sprite_url: None,
            type1: Some(TypeTag::ALL[i % 18]),
            type2: (i % 2 == 0).then(|| TypeTag::ALL[(i + 7) % 18]),
            is_active: i % 4 != 0,
            gender: Gender::Unknown,
            created_at: chrono::DateTime::from_timestamp((i as i64 * 37) % 100_000, 0),
            context_id: ContextId::new("1"),
        })
        .collect()
}

fn bench_matchups(c: &mut Criterion) {
    c.bench_function("matchups_all_pairs", |b| {
        b.iter(|| {
            let mut n = 0;
            for d1 in TypeTag::ALL {
                for d2 in TypeTag::ALL {
                    let m = matchups(black_box(Some(d1)), black_box(Some(d2)));
                    n += m.weaknesses.len() + m.resistances.len() + m.immunities.len();
                }
            }
            black_box(n)
        })
    });

    c.bench_function("matchups_single_type", |b| {
        b.iter(|| {
            let m = matchups(black_box(Some(TypeTag::Fire)), black_box(Some(TypeTag::Flying)));
            black_box(m.weaknesses.len())
        })
    });
}

fn bench_view(c: &mut Criterion) {
    let mut session = Session::new();
    session.context_id = Some(ContextId::new("1"));
    session.snapshot = synthetic_roster(500);
    session.query = "nick".into();
    session.sort = SortState { mode: SortMode::AlphaAscending, prior: SortMode::None };

    c.bench_function("view_build_500", |b| {
        b.iter(|| {
            let view = RosterView::build(black_box(&session));
            black_box(view.total())
        })
    });
}

criterion_group!(benches, bench_matchups, bench_view);
criterion_main!(benches);
