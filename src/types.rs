use std::fmt::{Display, Formatter};

use diesel::result::{DatabaseErrorKind, Error as DieselError};
#[derive(Debug)]
pub struct PoolInitializationError(pub String);

impl Display for PoolInitializationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl std::error::Error for PoolInitializationError {}

/// One of the two occupancy ledgers kept against every table.
///
/// Reservations are the pre-event guest list, guests are the day-of check-ins.
/// Both are bounded by the same table capacity but are never summed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Reservation,
    Guest,
}

impl Display for Track {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Track::Reservation => f.pad("reservation"),
            Track::Guest => f.pad("guest"),
        }
    }
}

/// Failures surfaced by the seating core.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SeatingError {
    /// Malformed input, the caller has to fix it.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced table or reservation does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Admitting the party would seat `by` people more than the table holds.
    #[error("table capacity is exceeded by: {by}")]
    CapacityExceeded { by: i64 },

    /// The name is already taken on this track.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Connection, pool or transaction failure.
    #[error("store error: {0}")]
    Store(String),
}

impl SeatingError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, SeatingError::Store(_))
    }
}

impl From<DieselError> for SeatingError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => SeatingError::NotFound("record not found".into()),
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                SeatingError::Conflict(info.message().to_owned())
            }
            other => SeatingError::Store(other.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for SeatingError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        SeatingError::Store(format!("failed to establish connection: {err}"))
    }
}
