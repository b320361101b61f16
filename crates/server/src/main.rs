use anyhow::Context;
use db::DBService;
use server::{AppState, app_router, config::Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = DBService::new(&config.database_url)
        .await
        .context("failed to open the page database")?;

    let router = app_router(AppState::new(db));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("listening on http://{addr}");

    axum::serve(listener, router).await?;

    Ok(())
}
