//! API Server - HTTP server for the analysis REST API

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::analysis::EmailAnalyzer;
use crate::api::handlers::{self, AppState};

/// API Server
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(analyzer: EmailAnalyzer, addr: String) -> Self {
        Self {
            state: Arc::new(AppState { analyzer }),
            addr,
        }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        // CORS configuration: the analyzer is called from browser frontends
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/api/health", get(handlers::health))
            .route("/api/analyze", post(handlers::analyze))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> std::io::Result<()> {
        let router = self.router();

        info!("Starting API server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
