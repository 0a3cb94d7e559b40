//! tally gateway binary.
//!
//! Usage: `tally-gateway [config.yaml]`. Without a path the built-in defaults
//! are used (listen on 0.0.0.0:8080, ops endpoints on).

use std::future::IntoFuture;
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use tally_core::error::{Result, TallyError};
use tally_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.client_code().as_str(), error = %e, "tally-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(%path, "loading config");
            config::load_from_file(&path)?
        }
        None => config::TallyConfig::default(),
    };
    let listen = cfg.server.listen_addr()?;
    let grace = cfg.server.shutdown_grace();

    let state = AppState::new(cfg)?;
    let app = router::build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| TallyError::Internal(format!("failed to bind {listen}: {e}")))?;
    tracing::info!(%listen, "tally-gateway starting");

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => {
            result.map_err(|e| TallyError::Internal(format!("server failed: {e}")))?;
        }
        _ = shutdown_signal() => {
            state.set_draining();
            tracing::info!(grace_ms = grace.as_millis() as u64, "draining");
            let _ = shutdown_tx.send(());
            match tokio::time::timeout(grace, &mut server).await {
                Ok(result) => {
                    result.map_err(|e| TallyError::Internal(format!("server failed: {e}")))?
                }
                Err(_) => tracing::warn!("shutdown grace elapsed with requests in flight"),
            }
        }
    }

    tracing::info!(counters = state.registry().len(), "tally-gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
