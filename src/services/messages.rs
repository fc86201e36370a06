use actix::Message;

use crate::services::db_models::{Guest, PartyTable, Reservation};
use crate::types::{SeatingError, Track};

#[derive(Message)]
#[rtype(result = "Result<PartyTable, SeatingError>")]
pub struct CreateTable {
    pub capacity: i32,
}

#[derive(Message)]
#[rtype(result = "Result<String, SeatingError>")]
pub struct AdmitReservation {
    pub name: String,
    pub table_id: i64,
    pub accompanying_guests: i32,
}

/// Day-of check-in; the table comes from the guest's reservation.
#[derive(Message)]
#[rtype(result = "Result<String, SeatingError>")]
pub struct AdmitGuest {
    pub name: String,
    pub accompanying_guests: i32,
}

#[derive(Message)]
#[rtype(result = "Result<(), SeatingError>")]
pub struct RemoveOccupant {
    pub track: Track,
    pub name: String,
}

#[derive(Message)]
#[rtype(result = "Result<Vec<PartyTable>, SeatingError>")]
pub struct FetchTables;

#[derive(Message)]
#[rtype(result = "Result<Vec<Reservation>, SeatingError>")]
pub struct FetchReservations;

#[derive(Message)]
#[rtype(result = "Result<Vec<Guest>, SeatingError>")]
pub struct FetchGuests;

#[derive(Message)]
#[rtype(result = "Result<i64, SeatingError>")]
pub struct FetchSeatsEmpty;
