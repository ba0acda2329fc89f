//! # freeslot-engine
//!
//! Resolves a person's availability for arbitrary calendar dates and computes
//! the overlapping free time between two people's schedules.
//!
//! Two layers of scheduling rules feed the engine: a recurring weekly pattern
//! (slot lists keyed by weekday) and date-specific overrides (slot lists
//! keyed by calendar date). An override replaces the weekly pattern for its
//! date entirely — slots are never merged across the two layers. Times are
//! abstract minute-of-day offsets; timezone semantics belong to the caller.
//!
//! ## Modules
//!
//! - [`slot`] — the `[start, end)` minute interval and the write-side normalizer
//! - [`weekday`] — closed seven-value weekday enumeration
//! - [`identity`] — opaque schedule-owner handles
//! - [`store`] — the storage contract and an in-memory implementation
//! - [`scheduler`] — resolution and two-party overlap over an injected store
//! - [`intersect`] — the two-pointer slot intersection sweep
//! - [`error`] — error types

pub mod error;
pub mod identity;
pub mod intersect;
pub mod scheduler;
pub mod slot;
pub mod store;
pub mod weekday;

pub use error::{EngineError, Result};
pub use identity::IdentityId;
pub use intersect::intersect_slots;
pub use scheduler::{ResolvedAvailability, Scheduler};
pub use slot::{normalize_and_validate, Slot, MINUTES_PER_DAY};
pub use store::{AvailabilityStore, DateOverrides, MemoryStore, WeeklyPattern};
pub use weekday::Weekday;
