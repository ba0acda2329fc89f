//! Error types for engine operations.

use chrono::NaiveDate;
use thiserror::Error;

use crate::identity::IdentityId;

/// Errors surfaced by write validation, resolution, and overlap queries.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A slot violated the minute-of-day bounds (write path).
    #[error("invalid slot: start ({start}) and end ({end}) must be in range 0-1440 and start < end")]
    InvalidSlot { start: u16, end: u16 },

    /// An empty slot list was written. Removing availability goes through the
    /// explicit delete operations, never through an empty write.
    #[error("slots should not be empty")]
    EmptySlots,

    /// A string did not name one of the seven weekdays.
    #[error("invalid weekday: {0}")]
    InvalidWeekday(String),

    /// A string was not a valid identity handle.
    #[error("invalid identity: {0}")]
    InvalidIdentity(String),

    /// A query range where the start date falls after the end date.
    #[error("invalid date range: {from} is after {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    /// Overlap was asked for one identity against itself.
    #[error("overlap requires two distinct identities, got {0} twice")]
    SameIdentity(IdentityId),

    /// The storage collaborator has no record of this identity.
    #[error("identity not found: {0}")]
    IdentityNotFound(String),

    /// Opaque storage failure, surfaced unchanged. The engine never retries.
    #[error("data access error: {0}")]
    Store(String),
}

/// Convenience alias used throughout freeslot-engine.
pub type Result<T> = std::result::Result<T, EngineError>;
