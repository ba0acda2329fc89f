//! Tests for the slot value type and the write-side normalizer.

use freeslot_engine::{normalize_and_validate, EngineError, Slot, MINUTES_PER_DAY};

fn slot(start: u16, end: u16) -> Slot {
    Slot { start, end }
}

// ── Construction & validation ───────────────────────────────────────────────

#[test]
fn valid_slots_construct() {
    assert_eq!(Slot::new(540, 720).unwrap(), slot(540, 720));
    // Boundary values: first minute, last minute, full day.
    assert!(Slot::new(0, 1).is_ok());
    assert!(Slot::new(1439, 1440).is_ok());
    assert!(Slot::new(0, MINUTES_PER_DAY).is_ok());
}

#[test]
fn out_of_bounds_slots_rejected() {
    // start at or past end of day
    assert!(matches!(
        Slot::new(1440, 1441),
        Err(EngineError::InvalidSlot { start: 1440, .. })
    ));
    // end past end of day
    assert!(Slot::new(540, 1441).is_err());
    // zero-length
    assert!(Slot::new(540, 540).is_err());
    // inverted
    assert!(Slot::new(720, 540).is_err());
    // end == 0 implies start >= end
    assert!(Slot::new(0, 0).is_err());
}

#[test]
fn duration_is_end_minus_start() {
    assert_eq!(slot(540, 720).duration_minutes(), 180);
    assert_eq!(slot(0, 1440).duration_minutes(), 1440);
}

// ── Normalizer ───────────────────────────────────────────────────────────────

#[test]
fn normalize_sorts_by_start() {
    let out = normalize_and_validate(vec![slot(780, 900), slot(540, 720), slot(60, 120)]).unwrap();
    assert_eq!(out, vec![slot(60, 120), slot(540, 720), slot(780, 900)]);
}

#[test]
fn normalize_rejects_empty_list() {
    // Writing an empty list is a validation error, not a deletion.
    assert!(matches!(
        normalize_and_validate(vec![]),
        Err(EngineError::EmptySlots)
    ));
}

#[test]
fn normalize_rejects_any_invalid_slot() {
    let err = normalize_and_validate(vec![slot(540, 720), slot(900, 900)]);
    assert!(matches!(err, Err(EngineError::InvalidSlot { .. })));
}

#[test]
fn normalize_coalesces_strictly_overlapping_slots() {
    // 9:00-12:00 overlaps 11:00-13:00 → one 9:00-13:00 slot.
    let out = normalize_and_validate(vec![slot(660, 780), slot(540, 720)]).unwrap();
    assert_eq!(out, vec![slot(540, 780)]);
}

#[test]
fn normalize_coalesces_contained_slots() {
    let out = normalize_and_validate(vec![slot(540, 900), slot(600, 660)]).unwrap();
    assert_eq!(out, vec![slot(540, 900)]);
}

#[test]
fn normalize_keeps_touching_slots_distinct() {
    // 9:00-10:00 and 10:00-11:00 only touch; they are preserved as written.
    let out = normalize_and_validate(vec![slot(600, 660), slot(540, 600)]).unwrap();
    assert_eq!(out, vec![slot(540, 600), slot(600, 660)]);
}

#[test]
fn normalize_is_identity_for_sorted_non_overlapping_input() {
    let input = vec![slot(60, 120), slot(540, 720), slot(780, 900)];
    assert_eq!(normalize_and_validate(input.clone()).unwrap(), input);
}
