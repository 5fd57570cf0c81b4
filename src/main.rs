//! Final Countdown - A countdown to a target timestamp
//!
//! This is the main entry point for the final-countdown application.

use std::sync::Arc;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use final_countdown::{
    config::Config,
    state::{AppState, CountdownEngine},
    api::create_router,
    presenter::{StatusPresenter, TerminalPresenter},
    services::{Clock, HttpTimeSource, SystemClock},
    tasks::countdown_timer_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("final_countdown={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting final-countdown v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: end_time={:?}, time_api={}", config.end_time, config.time_api);

    let countdown_config = config.countdown_config();
    let clock = SystemClock;

    // Configuration errors stop us before any countdown starts
    let engine = CountdownEngine::new(countdown_config.clone(), clock.now_millis())
        .context("invalid countdown configuration")?;
    let source = HttpTimeSource::new(&countdown_config.time_api, &countdown_config.time_field)?;

    let state = Arc::new(AppState::new(config.port.unwrap_or_default(), config.host.clone()));
    if let Err(e) = state.mark_syncing(engine.target()) {
        tracing::warn!("{}", e);
    }

    if let Some(addr) = config.address() {
        let listener = TcpListener::bind(&addr).await?;
        let app = create_router(Arc::clone(&state));

        info!("Status server running on http://{}", addr);
        info!("Endpoints:");
        info!("  GET  /status     - Current countdown state");
        info!("  GET  /health     - Health check");

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Server error: {}", e);
            }
        });
    }

    let presenter = (TerminalPresenter::stdout(), StatusPresenter::new(Arc::clone(&state)));

    tokio::select! {
        result = countdown_timer_task(engine, &source, &clock, presenter) => {
            result.with_context(|| format!("countdown against {} failed", source.endpoint()))?;
        }
        result = shutdown_signal() => {
            result?;
            info!("Shutdown signal received");
            return Ok(());
        }
    }

    // Keep reporting the final state until asked to stop
    if config.port.is_some() {
        shutdown_signal().await?;
        info!("Shutdown signal received");
    }

    info!("Countdown finished");
    Ok(())
}
