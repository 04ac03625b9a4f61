use anyhow::Context;
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    server::telemetry::init_tracing().context("Failed to install tracing subscriber")?;

    let config = server::config::load_config();
    server::health::record_start_time();

    let state = AppState::from_config(&config.calendar)?;
    let router = server::openapi::api_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.addr))?;
    tracing::info!(addr = %config.server.addr, "appeal timetable service listening");

    axum::serve(listener, router).await?;
    Ok(())
}
