//! HTTP server: browseable listings over the tree index and raw media bytes.

use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::{error, info, Level};

use crate::config::MediaTreeConfig;
use crate::error::AppError;
use crate::tree::TreeIndex;

pub mod error;
mod handlers;
pub mod render;

pub use render::Prefixes;

pub const HEALTH_ROUTE: &str = "/health";
pub const API_LIST_ROUTE: &str = "/api/list";

/// Fixed routes that configurable prefixes must stay clear of
pub const RESERVED_ROUTES: [&str; 2] = [HEALTH_ROUTE, API_LIST_ROUTE];

/// State shared by every request handler
pub struct AppState {
    pub index: Arc<TreeIndex>,
    pub prefixes: Prefixes,
}

/// Build the application router
///
/// The index must be fully built before the router serves requests. Prefixes
/// are expected to have passed [`crate::config::ServerConfig::validate`];
/// overlapping routes make axum panic.
pub fn router(state: Arc<AppState>, media_root: &Path) -> Router {
    let listing = state.prefixes.listing.clone();
    let media = state.prefixes.media.clone();

    Router::new()
        .route("/", get(handlers::redirect_home))
        .route(HEALTH_ROUTE, get(handlers::health))
        .route(&listing, get(handlers::redirect_home))
        .route(&format!("{}/", listing), get(handlers::listing_root))
        .route(&format!("{}/*path", listing), get(handlers::listing))
        .route(API_LIST_ROUTE, get(handlers::api_listing_root))
        .route(&format!("{}/", API_LIST_ROUTE), get(handlers::api_listing_root))
        .route(&format!("{}/*path", API_LIST_ROUTE), get(handlers::api_listing))
        .nest_service(&media, ServeDir::new(media_root))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}

/// A running server bound to a socket
pub struct Server {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Server {
    /// Bind the configured address and start serving `index`
    pub async fn start(config: &MediaTreeConfig, index: Arc<TreeIndex>) -> Result<Self, AppError> {
        config
            .server
            .validate()
            .map_err(|errors| AppError::ConfigError(errors.join("; ")))?;
        let bind = config.server.bind_addr().map_err(AppError::ConfigError)?;
        let state = Arc::new(AppState {
            index,
            prefixes: Prefixes {
                listing: config.server.listing_prefix(),
                media: config.server.media_prefix(),
            },
        });
        let app = router(state, &config.media_root);

        let listener = TcpListener::bind(bind)
            .await
            .map_err(|e| AppError::ServerError(format!("Failed to bind {}: {}", bind, e)))?;
        let addr = listener
            .local_addr()
            .map_err(|e| AppError::ServerError(e.to_string()))?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
            if let Err(e) = result {
                error!("Server stopped with error: {}", e);
            }
        });

        info!(%addr, "Listening");
        Ok(Server {
            addr,
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Signal graceful shutdown; in-flight requests are allowed to finish
    pub fn shutdown(&mut self) -> Result<(), AppError> {
        if let Some(sender) = self.shutdown.take() {
            sender
                .send(())
                .map_err(|_| AppError::ServerError("server already stopped".to_string()))
        } else {
            Ok(())
        }
    }

    /// Wait for the serving task to finish
    pub async fn stopped(&mut self) -> Result<(), AppError> {
        if let Some(handle) = self.handle.take() {
            handle
                .await
                .map_err(|e| AppError::ServerError(format!("Server task failed: {}", e)))?;
        }
        Ok(())
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}
