use corner_store_api::config::Config;
use corner_store_api::db::{run_migrations, DbPool};
use corner_store_api::seed::SeedData;
use diesel::r2d2::{self, ConnectionManager, TestCustomizer};
use diesel::PgConnection;

/// Single-connection pool over `DATABASE_URL`, migrated and seeded inside a
/// test transaction (`TestCustomizer`) that is never committed. Expects an empty
/// database.
pub fn seeded_pool() -> DbPool {
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("config");
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .connection_customizer(Box::new(TestCustomizer))
        .build(ConnectionManager::<PgConnection>::new(config.database_url))
        .expect("pool");

    let mut conn = pool.get().expect("connection");
    run_migrations(&mut conn).expect("migrations");
    SeedData::load()
        .expect("seed data")
        .insert(&mut conn)
        .expect("seed insert");
    pool
}
