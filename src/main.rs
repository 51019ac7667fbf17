use std::net::SocketAddr;
use task_tamer::{router, AppState, Config, HttpTaskApi};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let api = HttpTaskApi::new(config.api_url.clone(), config.request_timeout)?;
    let state = AppState::new(api);

    state.controller.load_sample_tasks();
    let controller = state.controller.clone();
    tokio::spawn(async move { controller.refresh().await });

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!(api = %config.api_url, "listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
