//! The elementary availability value: a half-open minute-of-day interval.
//!
//! A `Slot` is `[start, end)` in minutes since midnight, so `{540, 720}` reads
//! as 09:00–12:00. Slots carry no date or timezone — the surrounding pattern
//! or override supplies the calendar context.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Upper bound for slot offsets: minutes in one day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// A half-open `[start, end)` interval within a single day.
///
/// Ordering is by `start`, then `end`, which is the order stored lists are
/// kept in and the order the intersection sweep depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    /// Minutes since midnight, inclusive.
    pub start: u16,
    /// Minutes since midnight, exclusive.
    pub end: u16,
}

impl Slot {
    /// Construct a slot, rejecting out-of-bounds or inverted intervals.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidSlot`] unless `start < end ≤ 1440`.
    pub fn new(start: u16, end: u16) -> Result<Self> {
        let slot = Self { start, end };
        slot.validate()?;
        Ok(slot)
    }

    /// Check the slot invariant: `start < end ≤ 1440`.
    ///
    /// With unsigned offsets the written rule (`start ≥ 0, end > 0,
    /// start < 1440, end ≤ 1440, start < end`) collapses to the three
    /// comparisons below: `end > 0` follows from `start < end`.
    pub fn validate(&self) -> Result<()> {
        if self.start >= MINUTES_PER_DAY || self.end > MINUTES_PER_DAY || self.start >= self.end {
            return Err(EngineError::InvalidSlot {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end - self.start
    }
}

/// Normalize a slot list for storage: validate every slot, sort ascending by
/// `(start, end)`, and coalesce slots that strictly overlap.
///
/// Slots that merely touch (`a.end == b.start`) stay distinct, so a
/// non-overlapping write round-trips unchanged apart from ordering.
/// Coalescing guarantees every stored list is internally non-overlapping,
/// the precondition [`crate::intersect::intersect_slots`] relies on.
///
/// # Errors
/// Returns [`EngineError::EmptySlots`] for an empty input (deleting
/// availability is an explicit operation, not an empty write) and
/// [`EngineError::InvalidSlot`] for any out-of-bounds slot.
pub fn normalize_and_validate(mut slots: Vec<Slot>) -> Result<Vec<Slot>> {
    if slots.is_empty() {
        return Err(EngineError::EmptySlots);
    }
    for slot in &slots {
        slot.validate()?;
    }
    slots.sort();

    let mut normalized: Vec<Slot> = Vec::with_capacity(slots.len());
    for slot in slots {
        if let Some(last) = normalized.last_mut() {
            if slot.start < last.end {
                // Strict overlap with the previous slot: extend it.
                last.end = last.end.max(slot.end);
                continue;
            }
        }
        normalized.push(slot);
    }

    Ok(normalized)
}
