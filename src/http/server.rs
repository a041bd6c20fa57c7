//! # HTTP Server
//!
//! Router assembly and listener lifecycle for both backend namespaces.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes::resource_routes;
use crate::config::HttpConfig;
use crate::store::ResourceStore;

/// Builds the full application router.
///
/// Each namespace gets its own route group with its concrete store
/// injected; the two backends share no state. Generic over the store
/// types so tests can drive the router with in-memory stores.
pub fn build_router<P, M>(pg: P, mongo: M) -> Router
where
    P: ResourceStore,
    M: ResourceStore,
{
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/pg/resources", resource_routes(pg))
        .nest("/api/mongo/resources", resource_routes(mongo))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// HTTP server bound to the configured address.
pub struct HttpServer {
    config: HttpConfig,
    router: Router,
}

impl HttpServer {
    /// Creates a server from the configured listener address and one
    /// store per namespace.
    pub fn new<P, M>(config: HttpConfig, pg: P, mongo: M) -> Self
    where
        P: ResourceStore,
        M: ResourceStore,
    {
        let router = build_router(pg, mongo);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds the listener and serves until a shutdown signal arrives.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!(%addr, "http server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    // Serve until ctrl-c; errors registering the handler also stop the
    // server rather than leaving it unkillable.
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
