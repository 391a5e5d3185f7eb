use anyhow::Context;
use tracing_subscriber::EnvFilter;

use filediff::bootstrap::app_context::AppContext;
use filediff::bootstrap::config::Config;
use filediff::presentation::http;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let cfg = Config::from_env()?;
    let addr = cfg.bind_addr;
    tracing::info!(
        %addr,
        granularity = ?cfg.diff_granularity,
        timeout = ?cfg.diff_timeout,
        "starting_filediff"
    );

    let ctx = AppContext::from_config(cfg);
    let app = http::router(ctx)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server_error")?;

    tracing::info!("filediff_stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?err, "shutdown_signal_failed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown_requested");
}
