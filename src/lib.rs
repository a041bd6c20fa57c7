//! dualstore - one CRUD API, two interchangeable backends
//!
//! Identical resources (name, description) exposed over REST under two
//! parallel namespaces: `/api/pg/resources` persisted in PostgreSQL and
//! `/api/mongo/resources` persisted in MongoDB. The two backends hold
//! independent data and are selected per-request by URL, not by
//! configuration.

pub mod config;
pub mod http;
pub mod model;
pub mod store;
pub mod validation;

use thiserror::Error;

use config::AppConfig;
use http::HttpServer;
use store::{MongoResourceStore, PgResourceStore, StoreError};

/// Fatal startup or serve failures.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Boots the process: config, both store connections, relational schema,
/// then the HTTP listener. Serves until shutdown, then releases both
/// connections. Any startup failure aborts with an error.
pub async fn run() -> Result<(), RunError> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let pg = PgResourceStore::connect(&config.postgres).await?;
    pg.ensure_schema().await?;
    tracing::info!(host = %config.postgres.host, "postgres connected, schema ensured");

    let mongo = MongoResourceStore::connect(&config.mongo).await?;
    tracing::info!(host = %config.mongo.host, "mongo connected");

    let server = HttpServer::new(config.http, pg.clone(), mongo.clone());
    server.start().await?;

    pg.close().await;
    mongo.close().await;
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
