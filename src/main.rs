use std::sync::Arc;

use anyhow::Context;
use chatbot_gateway::{
    config::GatewayConfig,
    routes,
    services::completion::OpenAiClient,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chatbot_gateway=debug,tower_http=debug".into()),
        )
        .init();

    let config = GatewayConfig::from_env().context("loading configuration")?;
    tracing::info!(?config, "configuration loaded");

    let client = OpenAiClient::from_config(&config).context("building upstream client")?;
    let state = AppState::new(Arc::new(client), config.chat.clone())
        .with_admin_key(config.admin_key.clone());

    let app = routes::create_router().with_state(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    tracing::info!("chatbot gateway listening on http://{}", config.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
