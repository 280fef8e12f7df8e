// src/server/mod.rs

//! HTTP front for the validation service.
//!
//! The router in [`routes`] is a thin shell: it parses JSON, hands the body
//! to [`crate::service::Validator`] and relays the result verbatim.

pub mod routes;

use std::future::Future;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ConfigFile;
use crate::errors::Result;
use crate::service::Validator;

pub use routes::{AppState, router};

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(cfg: &ConfigFile) -> Result<()> {
    let addr = cfg.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    serve_listener(listener, cfg, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve_listener<F>(listener: TcpListener, cfg: &ConfigFile, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local = listener.local_addr()?;
    let validator = Validator::new(cfg.validation.into());
    let app = router(AppState::new(validator), cfg.server.max_body_bytes);

    info!(%local, "pipedag listening; POST pipelines to /api/pipelines/parse");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl+C: {e}");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
