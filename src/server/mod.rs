// file: src/server/mod.rs
// description: HTTP surface: router, handlers, page templates, serve loop
// reference: https://docs.rs/axum

pub mod handlers;
pub mod router;
pub mod templates;

pub use router::{AppState, create_router};
pub use templates::PageTemplate;

use crate::config::ServerConfig;
use crate::error::Result;
use tracing::info;

/// Bind and serve until ctrl-c. Bootstrap has already completed by the
/// time this is called, so every request sees a provisioned index.
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<()> {
    let app = create_router(state);
    let addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Received shutdown signal, shutting down");
            }
        })
        .await?;

    Ok(())
}
