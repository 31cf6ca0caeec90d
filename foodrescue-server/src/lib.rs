//! foodrescue-server: HTTP backend for donation and NGO records
//!
//! Exposes create/list endpoints for each record type over a MongoDB
//! document store, plus a root message and a `/test` diagnostic.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;
pub mod tracing_setup;

use std::sync::Arc;

pub use config::{Config, DatabaseConfig};
pub use http::{build_router, ServerError};
pub use state::AppState;

use db::{DocumentStore, MongoStore};

/// Build the store handle described by `database`.
///
/// Returns `None` when the configuration is incomplete or the client cannot
/// be built. The server still starts; record endpoints then answer 500.
pub async fn connect_store(database: &DatabaseConfig) -> Option<Arc<dyn DocumentStore>> {
    let (Some(url), Some(name)) = (&database.url, &database.name) else {
        tracing::warn!("DATABASE_URL or DATABASE_NAME not set, running without a database");
        return None;
    };

    match MongoStore::connect(url, name).await {
        Ok(store) => {
            tracing::info!(database = %name, "MongoDB client ready");
            Some(Arc::new(store))
        }
        Err(e) => {
            tracing::warn!("Database connection failed, running without a database: {}", e);
            None
        }
    }
}

/// Start the HTTP server and release the store once it stops.
pub async fn serve(config: Config) -> Result<(), ServerError> {
    let store = connect_store(&config.database).await;
    let state = AppState::new(store, config.database.clone());

    tracing::info!("Starting server on {}", config.bind_addr);
    let result = http::run_server(state.clone(), config.bind_addr).await;

    state.shutdown().await;
    result
}
