//! Storage contract for weekly patterns and date overrides.
//!
//! The engine depends on this trait by contract only — no query building, no
//! persistence assumptions. Implementations must preserve the stored slot
//! order on reads; the resolver and intersection sweep assume lists come back
//! exactly as the normalizer wrote them.
//!
//! [`MemoryStore`] is the bundled implementation, used by the tests and as a
//! reference for the atomicity rules.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::Result;
use crate::identity::IdentityId;
use crate::slot::Slot;
use crate::weekday::Weekday;

/// A full weekly pattern: at most one slot list per weekday.
pub type WeeklyPattern = BTreeMap<Weekday, Vec<Slot>>;

/// Date-specific overrides: exactly one slot list per overridden date.
pub type DateOverrides = BTreeMap<NaiveDate, Vec<Slot>>;

/// Read and write operations the engine needs from its storage collaborator.
///
/// Writes carry already-normalized slot lists (sorted, validated, internally
/// non-overlapping). `replace_weekly_pattern` is a full replace and must be
/// atomic: no observable state where the old pattern is gone but the new one
/// is not yet present. Deletes are idempotent.
pub trait AvailabilityStore {
    /// Load the identity's entire weekly pattern. Empty map when none is set.
    fn load_weekly_pattern(&self, identity: IdentityId) -> Result<WeeklyPattern>;

    /// Load all date overrides with `from ≤ date ≤ to`. Empty map when none.
    fn load_date_overrides(
        &self,
        identity: IdentityId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<DateOverrides>;

    /// Atomically replace the identity's weekly pattern. A weekday absent
    /// from `pattern` has no availability afterwards.
    fn replace_weekly_pattern(&mut self, identity: IdentityId, pattern: WeeklyPattern)
        -> Result<()>;

    /// Insert or replace the override for `(identity, date)`.
    fn upsert_date_override(
        &mut self,
        identity: IdentityId,
        date: NaiveDate,
        slots: Vec<Slot>,
    ) -> Result<()>;

    /// Remove the identity's weekly pattern, if any.
    fn delete_weekly_pattern(&mut self, identity: IdentityId) -> Result<()>;

    /// Remove one date override, or all of the identity's overrides when
    /// `date` is `None`.
    fn delete_date_overrides(&mut self, identity: IdentityId, date: Option<NaiveDate>)
        -> Result<()>;
}

/// In-memory store backed by ordered maps.
///
/// Full-replace is a single map insert, so the atomicity requirement holds
/// trivially under `&mut self`. Identities with no records read back as
/// empty, never as not-found — an identity directory is a concern of richer
/// store implementations.
#[derive(Debug, Default)]
pub struct MemoryStore {
    weekly: BTreeMap<IdentityId, WeeklyPattern>,
    overrides: BTreeMap<IdentityId, DateOverrides>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AvailabilityStore for MemoryStore {
    fn load_weekly_pattern(&self, identity: IdentityId) -> Result<WeeklyPattern> {
        Ok(self.weekly.get(&identity).cloned().unwrap_or_default())
    }

    fn load_date_overrides(
        &self,
        identity: IdentityId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<DateOverrides> {
        let Some(overrides) = self.overrides.get(&identity) else {
            return Ok(DateOverrides::new());
        };
        Ok(overrides
            .range(from..=to)
            .map(|(date, slots)| (*date, slots.clone()))
            .collect())
    }

    fn replace_weekly_pattern(
        &mut self,
        identity: IdentityId,
        pattern: WeeklyPattern,
    ) -> Result<()> {
        self.weekly.insert(identity, pattern);
        Ok(())
    }

    fn upsert_date_override(
        &mut self,
        identity: IdentityId,
        date: NaiveDate,
        slots: Vec<Slot>,
    ) -> Result<()> {
        self.overrides.entry(identity).or_default().insert(date, slots);
        Ok(())
    }

    fn delete_weekly_pattern(&mut self, identity: IdentityId) -> Result<()> {
        self.weekly.remove(&identity);
        Ok(())
    }

    fn delete_date_overrides(
        &mut self,
        identity: IdentityId,
        date: Option<NaiveDate>,
    ) -> Result<()> {
        match date {
            Some(date) => {
                if let Some(overrides) = self.overrides.get_mut(&identity) {
                    overrides.remove(&date);
                }
            }
            None => {
                self.overrides.remove(&identity);
            }
        }
        Ok(())
    }
}
