mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{info, warn};
use mongodb::bson::doc;
use mongodb::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::config::CONFIG;
use crate::repositories::MongoSettingsRepository;
use crate::services::{
    PreferencesService, RbacServer, RestNotificationSystem, RestRbacServer, SettingsTemplate,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .map_err(startup_error)?;

    let db = client.database(&CONFIG.database_name);

    // Test MongoDB connection
    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(startup_error)?;
    info!("Connected to MongoDB successfully!");

    let repository = MongoSettingsRepository::new(&db);
    if let Err(e) = repository.create_indexes().await {
        warn!("Could not create settings indexes: {}", e);
    }

    // Outbound clients
    let timeout = Duration::from_secs(CONFIG.rest_client_timeout_secs);
    let notifications =
        RestNotificationSystem::new(&CONFIG.notifications_url, timeout).map_err(startup_error)?;
    let rbac: Arc<dyn RbacServer> =
        Arc::new(RestRbacServer::new(&CONFIG.rbac_url, timeout).map_err(startup_error)?);

    // Initialize services
    let template = SettingsTemplate::bundled().map_err(startup_error)?;
    let preferences_service = web::Data::new(PreferencesService::new(
        Arc::new(repository),
        Arc::new(notifications),
        template,
    ));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        let rbac = Arc::clone(&rbac);
        App::new()
            .wrap(Logger::default())
            .app_data(preferences_service.clone())
            .configure(move |cfg| routes::configure_routes(cfg, rbac))
    })
    .bind(&server_addr)?
    .run()
    .await
}

fn startup_error(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(err.to_string())
}
