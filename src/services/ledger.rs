//! Occupancy arithmetic over a table's committed parties.
//!
//! Nothing in here touches the store. The admission transaction feeds the
//! loaded rows through these functions so the capacity decision can be tested
//! on plain values.

use crate::services::db_models::{Guest, PartyTable, Reservation};
use crate::types::SeatingError;

pub const MIN_NAME_LEN: usize = 6;

/// Anything that takes seats at a table.
pub trait Occupant {
    fn accompanying_guests(&self) -> i32;

    /// The named person plus everyone they bring along.
    fn party_size(&self) -> i64 {
        1 + i64::from(self.accompanying_guests())
    }
}

impl Occupant for Reservation {
    fn accompanying_guests(&self) -> i32 {
        self.accompanying_guests
    }
}

impl Occupant for Guest {
    fn accompanying_guests(&self) -> i32 {
        self.accompanying_guests
    }
}

/// Bare companion count, as loaded by the occupant scan.
impl Occupant for i32 {
    fn accompanying_guests(&self) -> i32 {
        *self
    }
}

pub fn total_occupancy<O: Occupant>(occupants: &[O]) -> i64 {
    occupants.iter().map(Occupant::party_size).sum()
}

pub fn remaining_capacity<O: Occupant>(table: &PartyTable, occupants: &[O]) -> i64 {
    i64::from(table.capacity) - total_occupancy(occupants)
}

/// Seats left across the whole venue, counted against checked-in guests only.
pub fn venue_remaining_capacity(total_capacity: i64, guest_count: i64, companions: i64) -> i64 {
    total_capacity - (guest_count + companions)
}

/// Decides whether `candidate` fits next to the already seated `occupants`.
///
/// Filling the table exactly is allowed, going one seat over is not.
pub fn check_fits<O: Occupant, C: Occupant>(
    table: &PartyTable,
    occupants: &[O],
    candidate: &C,
) -> Result<(), SeatingError> {
    let total = total_occupancy(occupants) + candidate.party_size();
    let capacity = i64::from(table.capacity);

    if total > capacity {
        return Err(SeatingError::CapacityExceeded { by: total - capacity });
    }

    Ok(())
}

/// Shape checks that run before any connection is taken from the pool.
pub fn validate_party(name: &str, accompanying_guests: i32) -> Result<(), SeatingError> {
    if name.chars().count() < MIN_NAME_LEN {
        return Err(SeatingError::Validation("name too short".into()));
    }

    if accompanying_guests < 0 {
        return Err(SeatingError::Validation("negative accompanying guests".into()));
    }

    Ok(())
}

pub fn validate_capacity(capacity: i32) -> Result<(), SeatingError> {
    if capacity <= 0 {
        return Err(SeatingError::Validation(format!(
            "capacity \"{capacity}\" is not valid"
        )));
    }

    Ok(())
}
