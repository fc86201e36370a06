//! Transactional admission of reservations and guests.
//!
//! Every admission runs in one READ COMMITTED transaction that starts by
//! taking a row lock on the target table (`SELECT ... FOR UPDATE`). Admissions
//! to the same table therefore queue on that lock, and each one scans the
//! occupants only after every earlier admission has committed or rolled back.
//! Two admitters can never both see the last seat as free.

use chrono::Utc;
use diesel::{ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl};

use crate::services::db_models::{PartyTable, Reservation};
use crate::services::insertable::{NewGuest, NewReservation};
use crate::services::ledger::{self, Occupant};
use crate::types::{SeatingError, Track};

/// A party asking to be seated on one of the tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub accompanying_guests: i32,
    pub table_id: i64,
}

impl Occupant for Candidate {
    fn accompanying_guests(&self) -> i32 {
        self.accompanying_guests
    }
}

/// Adds a reservation to the guest list of `table_id`.
#[tracing::instrument(skip(conn), fields(track = %Track::Reservation))]
pub fn admit_reservation(
    conn: &mut PgConnection,
    name: &str,
    table_id: i64,
    accompanying_guests: i32,
) -> Result<String, SeatingError> {
    let candidate = Candidate {
        name: name.to_owned(),
        accompanying_guests,
        table_id,
    };

    admit(conn, &candidate, Track::Reservation)
}

/// Checks in a guest at the table their reservation points to.
#[tracing::instrument(skip(conn), fields(track = %Track::Guest))]
pub fn admit_guest(
    conn: &mut PgConnection,
    name: &str,
    accompanying_guests: i32,
) -> Result<String, SeatingError> {
    // shape first, the reservation lookup already needs a connection
    ledger::validate_party(name, accompanying_guests)?;

    let table_id = reserved_table(conn, name)?;
    let candidate = Candidate {
        name: name.to_owned(),
        accompanying_guests,
        table_id,
    };

    admit(conn, &candidate, Track::Guest)
}

fn reserved_table(conn: &mut PgConnection, guest_name: &str) -> Result<i64, SeatingError> {
    use crate::schema::reservations::dsl::{name, reservations};

    reservations
        .filter(name.eq(guest_name))
        .first::<Reservation>(conn)
        .optional()?
        .map(|reservation| reservation.table_id)
        .ok_or_else(|| SeatingError::NotFound("no reservation for name".into()))
}

/// Validate-lock-scan-insert for an already shaped candidate.
///
/// Commits exactly one row on success and nothing on any error.
pub fn admit(
    conn: &mut PgConnection,
    candidate: &Candidate,
    track: Track,
) -> Result<String, SeatingError> {
    ledger::validate_party(&candidate.name, candidate.accompanying_guests)?;

    let outcome = conn.build_transaction().read_committed().run(|trx_conn| {
        let table = lock_table(trx_conn, candidate.table_id)?;
        let occupants = load_occupants(trx_conn, table.id, track)?;

        ledger::check_fits(&table, &occupants, candidate)?;
        insert_occupant(trx_conn, candidate, track)?;

        Ok::<_, SeatingError>(ledger::remaining_capacity(&table, &occupants) - candidate.party_size())
    });

    match outcome {
        Ok(remaining) => {
            tracing::info!(
                table_id = candidate.table_id,
                name = %candidate.name,
                party_size = candidate.party_size(),
                remaining,
                "{track} admitted"
            );
            Ok(candidate.name.clone())
        }
        Err(SeatingError::CapacityExceeded { by }) => {
            tracing::warn!(
                table_id = candidate.table_id,
                name = %candidate.name,
                by,
                "{track} rejected, table is full"
            );
            Err(SeatingError::CapacityExceeded { by })
        }
        Err(err @ SeatingError::Store(_)) => {
            tracing::error!(table_id = candidate.table_id, error = %err, "{track} admission failed");
            Err(err)
        }
        Err(err) => Err(err),
    }
}

fn lock_table(conn: &mut PgConnection, table_id: i64) -> Result<PartyTable, SeatingError> {
    use crate::schema::party_tables::dsl::party_tables;

    party_tables
        .find(table_id)
        .for_update()
        .get_result::<PartyTable>(conn)
        .optional()?
        .ok_or_else(|| SeatingError::NotFound("table not found".into()))
}

/// Companion counts of everyone already committed on `track` at the table.
fn load_occupants(
    conn: &mut PgConnection,
    table: i64,
    track: Track,
) -> Result<Vec<i32>, SeatingError> {
    let occupants = match track {
        Track::Reservation => {
            use crate::schema::reservations::dsl::{accompanying_guests, reservations, table_id};

            reservations
                .filter(table_id.eq(table))
                .select(accompanying_guests)
                .load::<i32>(conn)?
        }
        Track::Guest => {
            use crate::schema::guests::dsl::{accompanying_guests, guests, table_id};

            guests
                .filter(table_id.eq(table))
                .select(accompanying_guests)
                .load::<i32>(conn)?
        }
    };

    Ok(occupants)
}

fn insert_occupant(
    conn: &mut PgConnection,
    candidate: &Candidate,
    track: Track,
) -> Result<(), SeatingError> {
    match track {
        Track::Reservation => {
            use crate::schema::reservations::dsl::reservations;

            diesel::insert_into(reservations)
                .values(NewReservation {
                    name: candidate.name.clone(),
                    accompanying_guests: candidate.accompanying_guests,
                    table_id: candidate.table_id,
                })
                .execute(conn)?;
        }
        Track::Guest => {
            use crate::schema::guests::dsl::guests;

            diesel::insert_into(guests)
                .values(NewGuest {
                    name: candidate.name.clone(),
                    accompanying_guests: candidate.accompanying_guests,
                    table_id: candidate.table_id,
                    created_at: Utc::now(),
                })
                .execute(conn)?;
        }
    }

    Ok(())
}

/// Deletes an occupant by name. A missing name is not an error.
#[tracing::instrument(skip(conn))]
pub fn remove(conn: &mut PgConnection, track: Track, occupant: &str) -> Result<(), SeatingError> {
    let deleted = match track {
        Track::Reservation => {
            use crate::schema::reservations::dsl::{name, reservations};

            diesel::delete(reservations.filter(name.eq(occupant))).execute(conn)?
        }
        Track::Guest => {
            use crate::schema::guests::dsl::{guests, name};

            diesel::delete(guests.filter(name.eq(occupant))).execute(conn)?
        }
    };

    tracing::info!(deleted, "{track} removed");
    Ok(())
}
