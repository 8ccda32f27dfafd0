use std::net::SocketAddr;
use streak_tracker::{
    load_progress, persist_progress, router, AppConfig, AppState, DateKey, DayStatusController,
};
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = AppConfig::from_env()?;
    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let progress = load_progress(&config.data_path).await;
    let today = DateKey::today();
    let mut controller = DayStatusController::new(config.mode, progress);
    let rollover = controller.check_day_change(today);
    controller.recalculate(today);
    if let Err(err) = persist_progress(&config.data_path, controller.progress()).await {
        warn!("failed to save progress on startup: {}", err.message);
    }
    info!(
        mode = %config.mode,
        ?rollover,
        current = controller.progress().current_streak,
        best = controller.progress().best_streak,
        "progress loaded"
    );

    let app = router(AppState::new(config.data_path, controller));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
