use actix_web::{get, HttpResponse, Responder};

use crate::types::SeatingError;

pub mod admission;
pub mod db_models;
pub mod db_utils;
pub mod insertable;
pub mod ledger;
pub mod messages;
pub mod pg_handling;

#[get("/")]
pub async fn home_page() -> impl Responder {
    HttpResponse::Ok().body("Party seating service")
}

pub fn error_response(err: &SeatingError) -> HttpResponse {
    match err {
        SeatingError::Validation(_) => HttpResponse::BadRequest().json(err.to_string()),
        SeatingError::NotFound(_) => HttpResponse::NotFound().json(err.to_string()),
        SeatingError::CapacityExceeded { .. } | SeatingError::Conflict(_) => {
            HttpResponse::Conflict().json(err.to_string())
        }
        SeatingError::Store(_) => HttpResponse::InternalServerError().json(err.to_string()),
    }
}

fn mailbox_error(err: actix::MailboxError) -> HttpResponse {
    tracing::error!(error = %err, "store worker unavailable");
    HttpResponse::InternalServerError().json(format!("Unable to perform action: {err}"))
}

#[derive(serde::Serialize)]
pub struct NameResponse {
    pub name: String,
}

// sub-route "/tables"
pub mod tables_route {
    use actix_web::web::{Data, Json};
    use actix_web::{get, post, HttpResponse, Responder};
    use serde::{Deserialize, Serialize};

    use super::{error_response, mailbox_error};
    use crate::services::db_utils::AppState;
    use crate::services::messages::{CreateTable, FetchSeatsEmpty, FetchTables};

    #[derive(Deserialize)]
    pub struct CreateTableBody {
        pub capacity: i32,
    }

    #[derive(Serialize)]
    pub struct SeatsEmptyResponse {
        pub seats_empty: i64,
    }

    #[get("/tables")]
    pub async fn fetch_tables(state: Data<AppState>) -> impl Responder {
        match state.pg_db.send(FetchTables).await {
            Ok(Ok(resp)) => HttpResponse::Ok().json(resp),
            Ok(Err(err)) => error_response(&err),
            Err(err) => mailbox_error(err),
        }
    }

    #[post("/tables")]
    pub async fn create_table(state: Data<AppState>, body: Json<CreateTableBody>) -> impl Responder {
        match state.pg_db.send(CreateTable { capacity: body.capacity }).await {
            Ok(Ok(resp)) => HttpResponse::Created().json(resp),
            Ok(Err(err)) => error_response(&err),
            Err(err) => mailbox_error(err),
        }
    }

    #[get("/seats_empty")]
    pub async fn seats_empty(state: Data<AppState>) -> impl Responder {
        match state.pg_db.send(FetchSeatsEmpty).await {
            Ok(Ok(seats_empty)) => HttpResponse::Ok().json(SeatsEmptyResponse { seats_empty }),
            Ok(Err(err)) => error_response(&err),
            Err(err) => mailbox_error(err),
        }
    }
}

// sub-route "/guest_list"
pub mod guest_list_route {
    use actix_web::web::{Data, Json, Path};
    use actix_web::{get, post, HttpResponse, Responder};
    use serde::{Deserialize, Serialize};

    use super::{error_response, mailbox_error, NameResponse};
    use crate::services::db_models::Reservation;
    use crate::services::db_utils::AppState;
    use crate::services::messages::{AdmitReservation, FetchReservations};

    #[derive(Deserialize)]
    pub struct AddReservationBody {
        pub table: i64,
        pub accompanying_guests: i32,
    }

    #[derive(Serialize)]
    pub struct ReservationsResponse {
        pub guests: Vec<Reservation>,
    }

    #[post("/guest_list/{name}")]
    pub async fn add_reservation(
        state: Data<AppState>,
        path: Path<String>,
        body: Json<AddReservationBody>,
    ) -> impl Responder {
        let name = path.into_inner();

        match state
            .pg_db
            .send(AdmitReservation {
                name,
                table_id: body.table,
                accompanying_guests: body.accompanying_guests,
            })
            .await
        {
            Ok(Ok(name)) => HttpResponse::Created().json(NameResponse { name }),
            Ok(Err(err)) => error_response(&err),
            Err(err) => mailbox_error(err),
        }
    }

    #[get("/guest_list")]
    pub async fn fetch_reservations(state: Data<AppState>) -> impl Responder {
        match state.pg_db.send(FetchReservations).await {
            Ok(Ok(guests)) => HttpResponse::Ok().json(ReservationsResponse { guests }),
            Ok(Err(err)) => error_response(&err),
            Err(err) => mailbox_error(err),
        }
    }
}

// sub-route "/guests"
pub mod guests_route {
    use actix_web::web::{Data, Json, Path};
    use actix_web::{delete, get, put, HttpResponse, Responder};
    use serde::{Deserialize, Serialize};

    use super::{error_response, mailbox_error, NameResponse};
    use crate::services::db_models::Guest;
    use crate::services::db_utils::AppState;
    use crate::services::messages::{AdmitGuest, FetchGuests, RemoveOccupant};
    use crate::types::Track;

    #[derive(Deserialize)]
    pub struct CheckInBody {
        pub accompanying_guests: i32,
    }

    #[derive(Serialize)]
    pub struct GuestsResponse {
        pub guests: Vec<Guest>,
    }

    #[put("/guests/{name}")]
    pub async fn check_in(
        state: Data<AppState>,
        path: Path<String>,
        body: Json<CheckInBody>,
    ) -> impl Responder {
        let name = path.into_inner();

        match state
            .pg_db
            .send(AdmitGuest {
                name,
                accompanying_guests: body.accompanying_guests,
            })
            .await
        {
            Ok(Ok(name)) => HttpResponse::Created().json(NameResponse { name }),
            Ok(Err(err)) => error_response(&err),
            Err(err) => mailbox_error(err),
        }
    }

    #[get("/guests")]
    pub async fn fetch_guests(state: Data<AppState>) -> impl Responder {
        match state.pg_db.send(FetchGuests).await {
            Ok(Ok(guests)) => HttpResponse::Ok().json(GuestsResponse { guests }),
            Ok(Err(err)) => error_response(&err),
            Err(err) => mailbox_error(err),
        }
    }

    #[delete("/guests/{name}")]
    pub async fn check_out(state: Data<AppState>, path: Path<String>) -> impl Responder {
        let name = path.into_inner();

        match state.pg_db.send(RemoveOccupant { track: Track::Guest, name }).await {
            Ok(Ok(())) => HttpResponse::Accepted().finish(),
            Ok(Err(err)) => error_response(&err),
            Err(err) => mailbox_error(err),
        }
    }
}
