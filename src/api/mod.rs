//! HTTP API module: routes, handlers, and the serve loop.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;

/// Bind the configured port and serve requests until the process is killed.
pub async fn serve(config: &Config, state: AppState) -> crate::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(state);
    axum::serve(listener, router).await?;

    Ok(())
}
