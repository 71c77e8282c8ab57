//! # Kebab Express Static Host
//!
//! Serves the built storefront from `DIST_DIR` on `PORT`.
//!
//! - Fingerprinted assets are cached for a year, HTML for an hour.
//! - `/health` answers a fixed-shape JSON liveness payload.
//! - Any path with no matching file falls back to the entry document, so
//!   client-side routes survive a full page load.
//!
//! No order state lives here: the cart, the menu listing, and the payment QR are
//! all client-side. The host only ships the assets.

use axum::{Router, middleware, routing::get};
use tokio::{net::TcpListener, signal};
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use routes::{health_handler, set_cache_control, spa_handler};
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading configuration...");
    let state = AppState::new();

    info!("Starting server...");

    let spa_fallback = get(spa_handler).with_state(state.clone());
    let assets = ServeDir::new(&state.config.dist_dir).fallback(spa_fallback);

    let app = Router::new()
        .route("/health", get(health_handler))
        .fallback_service(assets)
        .layer(middleware::from_fn(set_cache_control));

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
