use crate::config::Config;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub type DbPool = r2d2::Pool<r2d2::ConnectionManager<PgConnection>>;
pub type DbError = Box<dyn std::error::Error + Send + Sync>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn initialize_db_pool(config: &Config) -> Result<DbPool, r2d2::PoolError> {
    let manager = r2d2::ConnectionManager::<PgConnection>::new(&config.database_url);
    r2d2::Pool::builder()
        .max_size(config.pool_size)
        .build(manager)
}

pub fn establish_connection(config: &Config) -> ConnectionResult<PgConnection> {
    PgConnection::establish(&config.database_url)
}

/// Applies every embedded migration the database has not seen yet.
pub fn run_migrations(conn: &mut PgConnection) -> Result<(), DbError> {
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    for version in applied {
        tracing::info!(%version, "applied migration");
    }
    Ok(())
}
