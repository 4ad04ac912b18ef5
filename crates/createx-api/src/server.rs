//! Serving the API, alone or in front of a built site.

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::routes::router;
use crate::state::AppState;

/// Prefix the content API is mounted under when serving a site.
pub const API_PREFIX: &str = "/api";

/// The content API under [`API_PREFIX`], with every other path served from
/// the static site in `site_dir`.
pub fn site_router(state: AppState, site_dir: impl AsRef<Path>) -> Router {
    let files = ServeDir::new(site_dir.as_ref()).append_index_html_on_directories(true);
    Router::new()
        .nest(API_PREFIX, router(state))
        .fallback_service(files)
}

/// Serve `app` on `addr` until Ctrl-C.
pub async fn serve(app: Router, addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let bound = listener.local_addr()?;
    tracing::info!(%bound, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
