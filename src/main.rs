mod controllers {
    pub mod cashiers;
    pub mod functions;
    pub mod orders;
    pub mod products;
    #[cfg(test)]
    pub mod test_support;
}
mod insertables;
use actix_web::{middleware::Logger, web, App, HttpServer};
use controllers::cashiers;
use controllers::orders;
use controllers::products;
use corner_store_api::config::Config;
use corner_store_api::db::{initialize_db_pool, run_migrations};
use dotenvy::dotenv;
use std::io;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env().map_err(io::Error::other)?;
    let db_pool = initialize_db_pool(&config).map_err(io::Error::other)?;
    {
        let mut conn = db_pool.get().map_err(io::Error::other)?;
        run_migrations(&mut conn).map_err(io::Error::other)?;
    }

    tracing::info!(host = %config.host, port = config.port, "starting corner store api");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(db_pool.clone()))
            .service(cashiers::get_cashier)
            .service(cashiers::create_cashier)
            .service(products::get_products)
            .service(products::create_product)
            .service(products::update_product)
            .service(orders::get_orders)
            .service(orders::get_order)
            .service(orders::create_order)
            .service(orders::delete_order)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
