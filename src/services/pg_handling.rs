use actix::Handler;
use diesel::dsl::{count_star, sum};
use diesel::{PgConnection, QueryDsl, RunQueryDsl};

use crate::services::admission;
use crate::services::db_models::{Guest, PartyTable, Reservation};
use crate::services::db_utils::{establish_connection, PgActor};
use crate::services::insertable::NewPartyTable;
use crate::services::ledger;
use crate::services::messages::{
    AdmitGuest, AdmitReservation, CreateTable, FetchGuests, FetchReservations, FetchSeatsEmpty,
    FetchTables, RemoveOccupant,
};
use crate::types::SeatingError;

pub fn create_table(conn: &mut PgConnection, table_capacity: i32) -> Result<PartyTable, SeatingError> {
    use crate::schema::party_tables::dsl::party_tables;

    ledger::validate_capacity(table_capacity)?;

    let table = diesel::insert_into(party_tables)
        .values(NewPartyTable {
            capacity: table_capacity,
        })
        .get_result::<PartyTable>(conn)?;

    tracing::info!(table_id = table.id, capacity = table.capacity, "table created");
    Ok(table)
}

pub fn list_tables(conn: &mut PgConnection) -> Result<Vec<PartyTable>, SeatingError> {
    use crate::schema::party_tables::dsl::{id, party_tables};

    Ok(party_tables.order(id).load::<PartyTable>(conn)?)
}

pub fn list_reservations(conn: &mut PgConnection) -> Result<Vec<Reservation>, SeatingError> {
    use crate::schema::reservations::dsl::{name, reservations};

    Ok(reservations.order(name).load::<Reservation>(conn)?)
}

pub fn list_guests(conn: &mut PgConnection) -> Result<Vec<Guest>, SeatingError> {
    use crate::schema::guests::dsl::{created_at, guests};

    Ok(guests.order(created_at).load::<Guest>(conn)?)
}

/// Total capacity of the venue minus everyone who has checked in.
///
/// Reservations are not part of this figure.
pub fn venue_remaining_capacity(conn: &mut PgConnection) -> Result<i64, SeatingError> {
    use crate::schema::guests::dsl::{accompanying_guests, guests};
    use crate::schema::party_tables::dsl::{capacity, party_tables};

    let total_capacity = party_tables
        .select(sum(capacity))
        .get_result::<Option<i64>>(conn)?
        .unwrap_or(0);

    let guest_count = guests.select(count_star()).get_result::<i64>(conn)?;
    let companions = guests
        .select(sum(accompanying_guests))
        .get_result::<Option<i64>>(conn)?
        .unwrap_or(0);

    tracing::debug!(total_capacity, guest_count, companions, "venue occupancy scanned");
    Ok(ledger::venue_remaining_capacity(
        total_capacity,
        guest_count,
        companions,
    ))
}

impl Handler<CreateTable> for PgActor {
    type Result = Result<PartyTable, SeatingError>;

    fn handle(&mut self, msg: CreateTable, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = establish_connection(&self.0)?;

        create_table(&mut conn, msg.capacity)
    }
}

impl Handler<AdmitReservation> for PgActor {
    type Result = Result<String, SeatingError>;

    fn handle(&mut self, msg: AdmitReservation, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = establish_connection(&self.0)?;

        admission::admit_reservation(&mut conn, &msg.name, msg.table_id, msg.accompanying_guests)
    }
}

impl Handler<AdmitGuest> for PgActor {
    type Result = Result<String, SeatingError>;

    fn handle(&mut self, msg: AdmitGuest, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = establish_connection(&self.0)?;

        admission::admit_guest(&mut conn, &msg.name, msg.accompanying_guests)
    }
}

impl Handler<RemoveOccupant> for PgActor {
    type Result = Result<(), SeatingError>;

    fn handle(&mut self, msg: RemoveOccupant, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = establish_connection(&self.0)?;

        admission::remove(&mut conn, msg.track, &msg.name)
    }
}

impl Handler<FetchTables> for PgActor {
    type Result = Result<Vec<PartyTable>, SeatingError>;

    fn handle(&mut self, _msg: FetchTables, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = establish_connection(&self.0)?;

        list_tables(&mut conn)
    }
}

impl Handler<FetchReservations> for PgActor {
    type Result = Result<Vec<Reservation>, SeatingError>;

    fn handle(&mut self, _msg: FetchReservations, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = establish_connection(&self.0)?;

        list_reservations(&mut conn)
    }
}

impl Handler<FetchGuests> for PgActor {
    type Result = Result<Vec<Guest>, SeatingError>;

    fn handle(&mut self, _msg: FetchGuests, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = establish_connection(&self.0)?;

        list_guests(&mut conn)
    }
}

impl Handler<FetchSeatsEmpty> for PgActor {
    type Result = Result<i64, SeatingError>;

    fn handle(&mut self, _msg: FetchSeatsEmpty, _ctx: &mut Self::Context) -> Self::Result {
        let mut conn = establish_connection(&self.0)?;

        venue_remaining_capacity(&mut conn)
    }
}
