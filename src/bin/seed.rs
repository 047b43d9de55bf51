use corner_store_api::config::Config;
use corner_store_api::db::run_migrations;
use corner_store_api::establish_connection;
use corner_store_api::seed::SeedData;
use dotenvy::dotenv;
use std::io;

fn main() -> io::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt().init();

    let config = Config::from_env().map_err(io::Error::other)?;
    let connection = &mut establish_connection(&config).map_err(io::Error::other)?;
    run_migrations(connection).map_err(io::Error::other)?;

    let seed = SeedData::load().map_err(io::Error::other)?;
    seed.insert(connection).map_err(io::Error::other)?;
    Ok(())
}
