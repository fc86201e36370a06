use chrono::{DateTime, Utc};
use diesel::Insertable;

use crate::schema::guests;
use crate::schema::party_tables;
use crate::schema::reservations;

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = party_tables)]
pub struct NewPartyTable {
    pub capacity: i32,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = reservations)]
pub struct NewReservation {
    pub name: String,
    pub accompanying_guests: i32,
    pub table_id: i64,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = guests)]
pub struct NewGuest {
    pub name: String,
    pub accompanying_guests: i32,
    pub table_id: i64,
    pub created_at: DateTime<Utc>,
}
