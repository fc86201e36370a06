use chrono::{DateTime, Utc};
use diesel::{Queryable, Selectable};
use serde::Serialize;

use crate::schema::{guests, party_tables, reservations};

#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq, Serialize)]
#[diesel(table_name = party_tables)]
pub struct PartyTable {
    pub id: i64,
    pub capacity: i32,
}

#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq, Serialize)]
#[diesel(table_name = reservations)]
pub struct Reservation {
    pub name: String,
    pub accompanying_guests: i32,
    #[serde(rename = "table")]
    pub table_id: i64,
}

#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq, Serialize)]
#[diesel(table_name = guests)]
pub struct Guest {
    pub name: String,
    pub accompanying_guests: i32,
    #[serde(rename = "table")]
    pub table_id: i64,
    #[serde(rename = "time_arrived")]
    pub created_at: DateTime<Utc>,
}
