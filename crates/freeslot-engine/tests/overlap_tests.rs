//! Tests for two-party schedule overlap and the slot intersection sweep.

use chrono::NaiveDate;
use freeslot_engine::{
    intersect_slots, EngineError, IdentityId, MemoryStore, Scheduler, Slot, Weekday,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn slot(start: u16, end: u16) -> Slot {
    Slot { start, end }
}

/// Scheduler with one weekly entry per (user, weekday) pair.
fn scheduler_with(
    entries: &[(IdentityId, Weekday, Vec<Slot>)],
) -> Scheduler<MemoryStore> {
    let mut sched = Scheduler::new(MemoryStore::new());
    for (user, day, slots) in entries {
        let pattern = [(*day, slots.clone())].into_iter().collect();
        sched.set_weekly_pattern(*user, pattern).unwrap();
    }
    sched
}

// 2025-01-06 is a Monday, 2025-01-07 a Tuesday, 2025-01-08 a Wednesday.

// ── Intersection sweep ───────────────────────────────────────────────────────

#[test]
fn overlapping_slots_intersect_to_their_shared_interval() {
    let a = vec![slot(540, 720)];
    let b = vec![slot(600, 780)];
    assert_eq!(intersect_slots(&a, &b), vec![slot(600, 720)]);
}

#[test]
fn touching_slots_do_not_intersect() {
    let a = vec![slot(540, 600)];
    let b = vec![slot(600, 660)];
    assert!(intersect_slots(&a, &b).is_empty());
}

#[test]
fn disjoint_slots_do_not_intersect() {
    let a = vec![slot(60, 120)];
    let b = vec![slot(600, 660)];
    assert!(intersect_slots(&a, &b).is_empty());
}

#[test]
fn containment_intersects_to_the_inner_slot() {
    let a = vec![slot(0, 1440)];
    let b = vec![slot(600, 660)];
    assert_eq!(intersect_slots(&a, &b), vec![slot(600, 660)]);
}

#[test]
fn one_slot_can_intersect_several_on_the_other_side() {
    let a = vec![slot(540, 900)];
    let b = vec![slot(500, 600), slot(660, 720), slot(840, 960)];
    assert_eq!(
        intersect_slots(&a, &b),
        vec![slot(540, 600), slot(660, 720), slot(840, 900)]
    );
}

#[test]
fn sweep_output_is_sorted_ascending() {
    let a = vec![slot(60, 180), slot(300, 420), slot(600, 720)];
    let b = vec![slot(0, 1440)];
    let out = intersect_slots(&a, &b);
    assert_eq!(out, vec![slot(60, 180), slot(300, 420), slot(600, 720)]);
    assert!(out.windows(2).all(|w| w[0].start < w[1].start));
}

#[test]
fn equal_ends_advance_deterministically() {
    // Both first slots end at 600; the left cursor advances on the tie.
    let a = vec![slot(540, 600), slot(600, 620)];
    let b = vec![slot(560, 600), slot(610, 660)];
    assert_eq!(
        intersect_slots(&a, &b),
        vec![slot(560, 600), slot(610, 620)]
    );
    // Swapped arguments walk the lists differently but emit the same slots.
    assert_eq!(intersect_slots(&a, &b), intersect_slots(&b, &a));
}

#[test]
fn empty_input_yields_empty_intersection() {
    assert!(intersect_slots(&[], &[slot(540, 720)]).is_empty());
    assert!(intersect_slots(&[slot(540, 720)], &[]).is_empty());
}

// ── Two-party overlap ────────────────────────────────────────────────────────

#[test]
fn overlap_of_two_monday_schedules() {
    // Scenario 3: U1 Monday 9:00-12:00, U2 Monday 10:00-13:00 → 10:00-12:00.
    let u1 = IdentityId::generate();
    let u2 = IdentityId::generate();
    let sched = scheduler_with(&[
        (u1, Weekday::Monday, vec![slot(540, 720)]),
        (u2, Weekday::Monday, vec![slot(600, 780)]),
    ]);

    let monday = date(2025, 1, 6);
    let overlap = sched.overlap(u1, u2, monday, monday).unwrap();

    assert_eq!(overlap.len(), 1);
    assert_eq!(overlap[&monday], vec![slot(600, 720)]);
}

#[test]
fn date_missing_on_one_side_is_absent_from_overlap() {
    // Scenario 4: U1 has nothing on Tuesday, U2 does → no entry at all.
    let u1 = IdentityId::generate();
    let u2 = IdentityId::generate();
    let sched = scheduler_with(&[
        (u1, Weekday::Monday, vec![slot(540, 720)]),
        (u2, Weekday::Tuesday, vec![slot(540, 600)]),
    ]);

    let tuesday = date(2025, 1, 7);
    let overlap = sched.overlap(u1, u2, tuesday, tuesday).unwrap();
    assert!(overlap.is_empty());
}

#[test]
fn dates_with_empty_intersection_are_omitted() {
    // Scenario 5 over three days: overlap on day 1 and day 3, none on day 2
    // (both sides resolve Tuesday, but to disjoint slots).
    let u1 = IdentityId::generate();
    let u2 = IdentityId::generate();
    let mut sched = scheduler_with(&[
        (u1, Weekday::Monday, vec![slot(540, 720)]),
        (u2, Weekday::Monday, vec![slot(600, 780)]),
    ]);
    sched.set_date_override(u1, date(2025, 1, 7), vec![slot(60, 120)]).unwrap();
    sched.set_date_override(u2, date(2025, 1, 7), vec![slot(600, 660)]).unwrap();
    sched.set_date_override(u1, date(2025, 1, 8), vec![slot(900, 960)]).unwrap();
    sched.set_date_override(u2, date(2025, 1, 8), vec![slot(930, 990)]).unwrap();

    let overlap = sched.overlap(u1, u2, date(2025, 1, 6), date(2025, 1, 8)).unwrap();

    assert_eq!(
        overlap.keys().copied().collect::<Vec<_>>(),
        vec![date(2025, 1, 6), date(2025, 1, 8)]
    );
    assert_eq!(overlap[&date(2025, 1, 6)], vec![slot(600, 720)]);
    assert_eq!(overlap[&date(2025, 1, 8)], vec![slot(930, 960)]);
}

#[test]
fn overlap_is_symmetric() {
    let u1 = IdentityId::generate();
    let u2 = IdentityId::generate();
    let mut sched = scheduler_with(&[
        (u1, Weekday::Monday, vec![slot(540, 720), slot(840, 960)]),
        (u2, Weekday::Monday, vec![slot(600, 900)]),
    ]);
    sched.set_date_override(u2, date(2025, 1, 6), vec![slot(500, 870)]).unwrap();

    let from = date(2025, 1, 6);
    let to = date(2025, 1, 12);
    let ab = sched.overlap(u1, u2, from, to).unwrap();
    let ba = sched.overlap(u2, u1, from, to).unwrap();
    assert_eq!(ab, ba);
}

#[test]
fn overlap_respects_date_overrides() {
    // U2's override removes the weekly Monday slots, shifting the overlap.
    let u1 = IdentityId::generate();
    let u2 = IdentityId::generate();
    let mut sched = scheduler_with(&[
        (u1, Weekday::Monday, vec![slot(540, 720)]),
        (u2, Weekday::Monday, vec![slot(600, 780)]),
    ]);
    let monday = date(2025, 1, 6);
    sched.set_date_override(u2, monday, vec![slot(660, 690)]).unwrap();

    let overlap = sched.overlap(u1, u2, monday, monday).unwrap();
    assert_eq!(overlap[&monday], vec![slot(660, 690)]);
}

#[test]
fn same_identity_is_an_input_error() {
    let u1 = IdentityId::generate();
    let sched = scheduler_with(&[(u1, Weekday::Monday, vec![slot(540, 720)])]);
    let err = sched.overlap(u1, u1, date(2025, 1, 6), date(2025, 1, 6));
    assert!(matches!(err, Err(EngineError::SameIdentity(_))));
}

#[test]
fn inverted_range_is_rejected_before_resolution() {
    let u1 = IdentityId::generate();
    let u2 = IdentityId::generate();
    let sched = Scheduler::new(MemoryStore::new());
    let err = sched.overlap(u1, u2, date(2025, 1, 9), date(2025, 1, 6));
    assert!(matches!(err, Err(EngineError::InvalidDateRange { .. })));
}
