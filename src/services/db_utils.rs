use std::time::Duration;

use actix::{Actor, Addr, SyncContext};
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::PgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::config::DatabaseSettings;
use crate::types::{PoolInitializationError, SeatingError};

pub type PgPool = Pool<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub struct PgActor(pub PgPool);

pub struct AppState {
    pub pg_db: Addr<PgActor>,
}

impl Actor for PgActor {
    type Context = SyncContext<Self>;
}

pub fn get_db_pool(settings: &DatabaseSettings) -> Result<PgPool, PoolInitializationError> {
    let manager = ConnectionManager::<PgConnection>::new(settings.url.as_str());

    Pool::builder()
        .max_size(settings.pool_size)
        .connection_timeout(Duration::from_secs(settings.connect_timeout_secs))
        .build(manager)
        .map_err(|err| PoolInitializationError(err.to_string()))
}

pub fn establish_connection(
    pool: &PgPool,
) -> Result<PooledConnection<ConnectionManager<PgConnection>>, SeatingError> {
    Ok(pool.get()?)
}

/// Applies every embedded migration that has not run yet on this database.
pub fn run_migrations(pool: &PgPool) -> Result<(), SeatingError> {
    let mut pooled = establish_connection(pool)?;
    let conn: &mut PgConnection = &mut pooled;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| SeatingError::Store(format!("failed to run migrations: {err}")))?;

    for version in &applied {
        tracing::info!(%version, "migration applied");
    }
    tracing::info!(applied = applied.len(), "seating schema is up to date");
    Ok(())
}
