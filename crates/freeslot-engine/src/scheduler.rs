//! Availability resolution and two-party overlap over an injected store.
//!
//! [`Scheduler`] is the engine's entry point. It owns its storage
//! collaborator by constructor injection — there is no ambient or global
//! state — and splits cleanly into a read side (`resolve`, `overlap`: pure
//! functions over fetched data, safe to run concurrently) and a write side
//! that pushes every slot list through the normalizer before it reaches
//! storage.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::identity::IdentityId;
use crate::intersect::intersect_slots;
use crate::slot::{normalize_and_validate, Slot};
use crate::store::{AvailabilityStore, WeeklyPattern};
use crate::weekday::Weekday;

/// Per-date availability over a queried range. Absence of a date key means
/// no availability that day — never an empty list.
pub type ResolvedAvailability = BTreeMap<NaiveDate, Vec<Slot>>;

/// Resolves availability and computes schedule overlap against a store.
pub struct Scheduler<S> {
    store: S,
}

impl<S: AvailabilityStore> Scheduler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. so a file-backed store can be persisted.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Replace the identity's entire weekly pattern.
    ///
    /// Every slot list is normalized first; the replace is atomic, and a
    /// weekday omitted from `pattern` has no availability until a future
    /// write adds it back. Returns the pattern as stored.
    ///
    /// # Errors
    /// Validation errors from the normalizer, or store failures.
    pub fn set_weekly_pattern(
        &mut self,
        identity: IdentityId,
        pattern: WeeklyPattern,
    ) -> Result<WeeklyPattern> {
        let mut normalized = WeeklyPattern::new();
        for (day, slots) in pattern {
            normalized.insert(day, normalize_and_validate(slots)?);
        }
        debug!(%identity, days = normalized.len(), "replacing weekly pattern");
        self.store.replace_weekly_pattern(identity, normalized.clone())?;
        Ok(normalized)
    }

    /// Insert or replace the override for `(identity, date)`.
    ///
    /// The override applies to that date unconditionally, whether or not a
    /// weekly entry exists for its weekday. Returns the slots as stored.
    ///
    /// # Errors
    /// Validation errors from the normalizer, or store failures.
    pub fn set_date_override(
        &mut self,
        identity: IdentityId,
        date: NaiveDate,
        slots: Vec<Slot>,
    ) -> Result<Vec<Slot>> {
        let normalized = normalize_and_validate(slots)?;
        debug!(%identity, %date, slots = normalized.len(), "upserting date override");
        self.store
            .upsert_date_override(identity, date, normalized.clone())?;
        Ok(normalized)
    }

    /// Remove the identity's weekly pattern.
    pub fn clear_weekly_pattern(&mut self, identity: IdentityId) -> Result<()> {
        debug!(%identity, "deleting weekly pattern");
        self.store.delete_weekly_pattern(identity)
    }

    /// Remove one date override, or all of them when `date` is `None`.
    pub fn clear_date_overrides(
        &mut self,
        identity: IdentityId,
        date: Option<NaiveDate>,
    ) -> Result<()> {
        debug!(%identity, date = ?date, "deleting date overrides");
        self.store.delete_date_overrides(identity, date)
    }

    /// Resolve the identity's availability for every date in `[from, to]`.
    ///
    /// A date override wins unconditionally over the weekly pattern for that
    /// date's weekday; with neither source, the date is absent from the
    /// result.
    ///
    /// # Errors
    /// [`EngineError::InvalidDateRange`] when `from > to` (checked before any
    /// store access), plus whatever the store surfaces. A failed fetch aborts
    /// the whole resolution; there are no partial results.
    pub fn resolve(
        &self,
        identity: IdentityId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<ResolvedAvailability> {
        if from > to {
            return Err(EngineError::InvalidDateRange { from, to });
        }

        let weekly = self.store.load_weekly_pattern(identity)?;
        let overrides = self.store.load_date_overrides(identity, from, to)?;

        let mut resolved = ResolvedAvailability::new();
        for date in from.iter_days().take_while(|d| *d <= to) {
            if let Some(slots) = overrides.get(&date) {
                resolved.insert(date, slots.clone());
            } else if let Some(slots) = weekly.get(&Weekday::from(date.weekday())) {
                resolved.insert(date, slots.clone());
            }
        }

        debug!(%identity, %from, %to, dates = resolved.len(), "resolved availability");
        Ok(resolved)
    }

    /// Compute the overlapping free time of two identities over `[from, to]`.
    ///
    /// Both schedules are resolved independently; a date appears in the
    /// result only when both sides resolved it and their slot lists actually
    /// intersect. The result is symmetric in `a` and `b`.
    ///
    /// # Errors
    /// [`EngineError::SameIdentity`] when `a == b` (checked before any
    /// computation), plus any error either resolution surfaces.
    pub fn overlap(
        &self,
        a: IdentityId,
        b: IdentityId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<ResolvedAvailability> {
        if a == b {
            return Err(EngineError::SameIdentity(a));
        }

        let left = self.resolve(a, from, to)?;
        let right = self.resolve(b, from, to)?;

        let mut overlap = ResolvedAvailability::new();
        for (date, slots_a) in &left {
            if let Some(slots_b) = right.get(date) {
                let shared = intersect_slots(slots_a, slots_b);
                if !shared.is_empty() {
                    overlap.insert(*date, shared);
                }
            }
        }

        debug!(%a, %b, %from, %to, dates = overlap.len(), "computed schedule overlap");
        Ok(overlap)
    }
}
