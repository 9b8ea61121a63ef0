// tests/session.rs
//
// The session reducer: sort-toggle cycles, the page-reset policy, and the
// generation check that drops stale fetch results.

use pokebox::model::{ ContextId, EntryId, Gender, RosterEntry };
use pokebox::roster::{ FilterSpec, SortMode, SortState, SortToggle, StatusFilter, transition };
use pokebox::session::{ Event, Session };

fn entry(id: &str, species: &str) -> RosterEntry {
    RosterEntry {
        id: EntryId::new(id),
        nickname: None,
        species: species.into(),
        sprite_url: None,
        type1: None,
        type2: None,
        is_active: true,
        gender: Gender::Unknown,
        created_at: None,
        context_id: ContextId::new("1"),
    }
}

fn session_with_snapshot() -> Session {
    let mut s = Session::new();
    s.apply(Event::SelectContext(Some(ContextId::new("1"))));
    let generation = s.generation;
    s.apply(Event::SnapshotLoaded {
        generation,
        entries: vec![entry("10", "bulbasaur"), entry("11", "pidgey")],
    });
    s
}

/* ---------- sort state machine ---------- */

#[test]
fn alpha_toggle_cycles_back_to_none() {
    let mut s = SortState::default();
    s = s.toggle(SortToggle::Alpha);
    assert_eq!(s.mode, SortMode::AlphaAscending);
    s = s.toggle(SortToggle::Alpha);
    assert_eq!(s.mode, SortMode::AlphaDescending);
    s = s.toggle(SortToggle::Alpha);
    assert_eq!(s.mode, SortMode::None);
}

#[test]
fn recency_toggle_is_an_on_off_switch() {
    let mut s = SortState::default();
    s = s.toggle(SortToggle::Recency);
    assert_eq!(s.mode, SortMode::RecentFirst);
    s = s.toggle(SortToggle::Recency);
    assert_eq!(s.mode, SortMode::None);
}

#[test]
fn alpha_cycle_returns_to_recent_first() {
    let mut s = SortState::default();
    s = s.toggle(SortToggle::Recency);
    s = s.toggle(SortToggle::Alpha);
    assert_eq!(s.mode, SortMode::AlphaAscending);
    s = s.toggle(SortToggle::Alpha);
    s = s.toggle(SortToggle::Alpha);
    assert_eq!(s.mode, SortMode::RecentFirst);
}

#[test]
fn recency_from_alpha_remembers_the_alpha_mode() {
    // Interrupting the alpha cycle with the recency toggle stores the
    // alpha mode; finishing a later alpha cycle hands it back.
    let (mode, prior) =
        transition(SortMode::AlphaDescending, SortMode::None, SortToggle::Recency);
    assert_eq!(mode, SortMode::RecentFirst);
    assert_eq!(prior, SortMode::AlphaDescending);

    let (mode, prior) = transition(mode, prior, SortToggle::Alpha);
    assert_eq!(mode, SortMode::AlphaAscending);
    assert_eq!(prior, SortMode::RecentFirst);
}

/* ---------- page reset policy ---------- */

#[test]
fn changing_inputs_resets_the_page_index() {
    let mut s = session_with_snapshot();

    s.apply(Event::SetPageIndex(4));
    assert_eq!(s.page.index, 4);
    assert!(s.apply(Event::SetQuery("pika".into())));
    assert_eq!(s.page.index, 0);

    s.apply(Event::SetPageIndex(4));
    let spec = FilterSpec { status: StatusFilter::Active, types: Default::default() };
    assert!(s.apply(Event::SetFilter(spec)));
    assert_eq!(s.page.index, 0);

    s.apply(Event::SetPageIndex(4));
    assert!(s.apply(Event::ToggleSort(SortToggle::Alpha)));
    assert_eq!(s.page.index, 0);

    s.apply(Event::SetPageIndex(4));
    assert!(s.apply(Event::EntrySaved(entry("12", "rattata"))));
    assert_eq!(s.page.index, 0);
}

#[test]
fn redundant_events_are_not_dirty() {
    let mut s = session_with_snapshot();
    assert!(!s.apply(Event::SetQuery(String::new())));
    assert!(!s.apply(Event::SetFilter(FilterSpec::default())));
    assert!(!s.apply(Event::SetPageIndex(0)));
    assert!(!s.apply(Event::SelectContext(Some(ContextId::new("1")))));
}

/* ---------- fetch generations ---------- */

#[test]
fn stale_snapshot_is_dropped_whole() {
    let mut s = session_with_snapshot();
    let stale = s.generation - 1;
    assert!(!s.apply(Event::SnapshotLoaded {
        generation: stale,
        entries: vec![entry("99", "mewtwo")],
    }));
    assert_eq!(s.snapshot.len(), 2);
}

#[test]
fn refresh_bumps_generation_without_touching_data() {
    let mut s = session_with_snapshot();
    let before = s.generation;
    assert!(!s.apply(Event::Refresh));
    assert_eq!(s.generation, before + 1);
    assert_eq!(s.snapshot.len(), 2);
}

/* ---------- local edit lifecycle ---------- */

#[test]
fn saved_entry_upserts_into_pending() {
    let mut s = session_with_snapshot();
    s.apply(Event::EntrySaved(entry("12", "rattata")));
    assert_eq!(s.pending.len(), 1);

    let mut renamed = entry("12", "rattata");
    renamed.nickname = Some("Chewy".into());
    s.apply(Event::EntrySaved(renamed));
    assert_eq!(s.pending.len(), 1);
    assert_eq!(s.pending[0].nickname.as_deref(), Some("Chewy"));
}

#[test]
fn delete_tombstones_and_clears_pending() {
    let mut s = session_with_snapshot();
    s.apply(Event::EntrySaved(entry("12", "rattata")));
    s.apply(Event::EntryDeleted(EntryId::new("12")));
    assert!(s.pending.is_empty());
    assert!(s.tombstones.contains(&EntryId::new("12")));

    s.apply(Event::EntryDeleted(EntryId::new("10")));
    assert!(s.tombstones.contains(&EntryId::new("10")));
}

#[test]
fn reload_confirms_pending_and_clears_tombstones() {
    let mut s = session_with_snapshot();
    s.apply(Event::EntrySaved(entry("12", "rattata")));
    s.apply(Event::EntrySaved(entry("13", "ekans")));
    s.apply(Event::EntryDeleted(EntryId::new("10")));

    s.apply(Event::Refresh);
    let generation = s.generation;
    // The reload confirms 12 but raced the save of 13.
    s.apply(Event::SnapshotLoaded {
        generation,
        entries: vec![entry("11", "pidgey"), entry("12", "rattata")],
    });

    assert_eq!(s.pending.len(), 1);
    assert_eq!(s.pending[0].id.as_str(), "13");
    assert!(s.tombstones.is_empty());
}

#[test]
fn context_switch_wipes_local_edits() {
    let mut s = session_with_snapshot();
    s.apply(Event::EntrySaved(entry("12", "rattata")));
    s.apply(Event::EntryDeleted(EntryId::new("10")));
    let before = s.generation;

    assert!(s.apply(Event::SelectContext(Some(ContextId::new("2")))));
    assert!(s.snapshot.is_empty());
    assert!(s.pending.is_empty());
    assert!(s.tombstones.is_empty());
    assert_eq!(s.page.index, 0);
    assert_eq!(s.generation, before + 1);
}

#[test]
fn page_size_floor_is_one() {
    let mut s = session_with_snapshot();
    s.apply(Event::SetPageSize(0));
    assert_eq!(s.page.size, 1);
    assert_eq!(s.page.index, 0);
}
