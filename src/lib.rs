use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use crate::models::config::ServerConfig;
use crate::repository::StorageBackend;
use crate::routes::advocates::{list_advocates, seed_advocates};

pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod seed;
pub mod services;

/// Selects the record store for the process lifetime.
///
/// A configured database URL selects the persistent backend; its absence
/// selects the built-in static directory.
pub fn select_backend(server_config: &ServerConfig) -> std::io::Result<StorageBackend> {
    match server_config.database_url.as_deref() {
        Some(database_url) => {
            let pool = db::establish_connection_pool(database_url).map_err(|e| {
                std::io::Error::other(format!("Failed to establish database connection: {e}"))
            })?;
            log::info!("Serving advocates from the database");
            Ok(StorageBackend::Persistent(pool))
        }
        None => {
            log::info!("No database configured; serving the built-in advocate directory");
            Ok(StorageBackend::Static(seed::advocates()))
        }
    }
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let backend = web::Data::new(select_backend(&server_config)?);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(backend.clone())
            .service(
                web::scope("/api")
                    .service(list_advocates)
                    .service(seed_advocates),
            )
    })
    .bind(bind_address)?
    .run()
    .await
}
