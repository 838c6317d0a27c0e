use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;
use std::sync::Arc;
use watchplanner::config::Config;
use watchplanner::host::section::{self, LoggingSectionRegistry};
use watchplanner::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let state = AppState::from_config(&config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Register the home section once the host has had time to load its plugins.
    let _registration =
        section::schedule_registration(Arc::new(LoggingSectionRegistry), config.section_delay);

    info!("Server running at {}", config.url());

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| state.configure(cfg))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
