//! # HTTP Server
//!
//! Combines the enrollment routes into one router and serves it.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::txn::Coordinator;

use super::routes::{api_routes, health_routes, AppState};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub listen: SocketAddr,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        HttpServerConfig {
            listen: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

/// Build the full application router over a coordinator.
pub fn router(coordinator: Arc<Coordinator>) -> Router {
    let state = Arc::new(AppState { coordinator });
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health_routes())
        .nest("/api", api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// HTTP server for the enrollment API.
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(coordinator: Arc<Coordinator>, config: HttpServerConfig) -> Self {
        let router = router(coordinator);
        HttpServer { config, router }
    }

    /// Bind and serve until the process is stopped.
    pub async fn serve(self) -> io::Result<()> {
        let listener = TcpListener::bind(self.config.listen).await?;
        info!(listen = %self.config.listen, "enrollment API listening");
        axum::serve(listener, self.router).await
    }
}
