use std::io;

use actix::{Addr, SyncArbiter};
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use party_seating::config::Settings;
use party_seating::services;
use party_seating::services::db_utils::{get_db_pool, run_migrations, AppState, PgActor};

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log.filter.as_str()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn init_pg_db(settings: &Settings) -> io::Result<Addr<PgActor>> {
    let pool = get_db_pool(&settings.database).map_err(io::Error::other)?;

    if settings.database.run_migrations {
        run_migrations(&pool).map_err(io::Error::other)?;
    }

    let workers = settings.database.pool_size as usize;
    Ok(SyncArbiter::start(workers, move || PgActor(pool.clone())))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    let settings = Settings::load().map_err(io::Error::other)?;
    init_tracing(&settings);

    let pg_db = init_pg_db(&settings)?;
    let (host, port) = settings.bind_address();

    tracing::info!(%host, port, "party seating service starting");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(Data::new(AppState { pg_db: pg_db.clone() }))
            .service(services::home_page)
            .service(services::tables_route::fetch_tables)
            .service(services::tables_route::create_table)
            .service(services::tables_route::seats_empty)
            .service(services::guest_list_route::add_reservation)
            .service(services::guest_list_route::fetch_reservations)
            .service(services::guests_route::check_in)
            .service(services::guests_route::fetch_guests)
            .service(services::guests_route::check_out)
    })
        .bind((host, port))?
        .run()
        .await
}
