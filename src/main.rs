use std::io;

use commerce_api::{build_server, create_pool, run_migrations, Config};
use dotenvy::dotenv;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        io::Error::other(e)
    })?;

    let pool = create_pool(&config.database_url, config.pool_size).map_err(|e| {
        log::error!("Failed to create database connection pool: {}", e);
        io::Error::other(e)
    })?;

    let applied = run_migrations(&pool).map_err(|e| {
        log::error!("Failed to run database migrations: {}", e);
        io::Error::other(e)
    })?;
    log::info!("Applied {} pending migration(s)", applied);

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    build_server(pool, &config.host, config.port)?.await
}
