use anyhow::Context;
use codec_service::{
    app_config::AppConfig, app_module::AppState, app_router::application_router,
    telemetry::init_tracing,
};
use dotenvy::dotenv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env()?;
    init_tracing(config.environment).context("setting tracing subscriber failed")?;

    let app = application_router(AppState::new());

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("unable to bind port {}", config.port))?;

    tracing::info!("Server running on port {}", config.port);
    axum::serve(listener, app)
        .await
        .context("unable to start server")?;

    Ok(())
}
