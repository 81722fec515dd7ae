use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use intern_backend::cache::redis_service::RedisService;
use intern_backend::config::EnvConfig;
use intern_backend::db::postgres_service::PostgresService;
use intern_backend::routes::configure_routes;
use intern_backend::utils::{auth::AuthService, scheduler};
use intern_backend::logging;
use std::io;
use std::sync::Arc;
use tracing::info;

fn startup_error<E: std::fmt::Display>(what: &str) -> impl FnOnce(E) -> io::Error + '_ {
    move |e| io::Error::new(io::ErrorKind::Other, format!("{}: {}", what, e))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = EnvConfig::from_env().map_err(startup_error("Invalid configuration"))?;
    let _log_guard = logging::init(&config.log_dir).map_err(startup_error("Failed to set up logging"))?;

    let postgres_service = Arc::new(
        PostgresService::new(&config.database_url())
            .await
            .map_err(startup_error("Failed to initialize PostgresService"))?,
    );
    let redis_service = Arc::new(
        RedisService::new(&config.redis_url()).map_err(startup_error("Failed to initialize RedisService"))?,
    );
    let auth_service = Arc::new(
        AuthService::new(&config.auth, &config.auth0).map_err(startup_error("Failed to initialize auth"))?,
    );

    scheduler::spawn_daily_reminders(Arc::clone(&postgres_service))
        .map_err(startup_error("Invalid reminder schedule"))?;

    let addr = config.bind_address();
    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(web::Data::new(Arc::clone(&redis_service)))
            .app_data(web::Data::new(Arc::clone(&auth_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
