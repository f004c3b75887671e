use anyhow::Context;
use tokio::signal;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use bestmusic::{AppState, build_router, config::Settings, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .init();

    let settings = Settings::from_env().context("Invalid configuration")?;
    let store = db::connect(&settings).await;
    info!(
        "🎵 Store: {:?} (table={}, region={})",
        settings.store, settings.table_name, settings.region
    );

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let app = build_router(AppState::new(store));

    info!("🎧 bestmusic listening on http://{}", addr);
    info!("📡 Endpoints: GET /v1/bestmusic/90s/{{artist}}, POST /v1/bestmusic/90s");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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
    info!("Shutdown signal received");
}
