//! Interval intersection of two sorted slot lists.
//!
//! A two-pointer sweep: both lists are ascending by start and internally
//! non-overlapping (the write-side normalizer guarantees this), so each
//! cursor only ever moves forward and the result comes out already sorted.

use crate::slot::Slot;

/// Intersect two slot lists, both sorted ascending by start.
///
/// Two slots overlap iff `a.end > b.start && b.end > a.start`; the emitted
/// slot is `[max(starts), min(ends))`. Slots that merely touch do not
/// intersect. After comparing, the cursor whose slot ends first advances;
/// on equal ends the left cursor advances — the tie-break is arbitrary but
/// must be deterministic.
///
/// The operation is symmetric: swapping `a` and `b` yields the same result.
pub fn intersect_slots(a: &[Slot], b: &[Slot]) -> Vec<Slot> {
    let mut result = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        let s1 = a[i];
        let s2 = b[j];

        if s1.end > s2.start && s2.end > s1.start {
            result.push(Slot {
                start: s1.start.max(s2.start),
                end: s1.end.min(s2.end),
            });
        }

        if s1.end <= s2.end {
            i += 1;
        } else {
            j += 1;
        }
    }

    result
}
