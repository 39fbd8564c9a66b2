use anyhow::Result;
use meeting_notes_backend::{create_router, AppState, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = Config::from_env()?;

    info!("Meeting Notes AI backend v0.1.0");
    info!(
        "OpenAI {}",
        if cfg.openai_enabled() {
            "enabled"
        } else {
            "disabled (mock summaries active)"
        }
    );

    let port = cfg.port;
    let state = AppState::new(cfg);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server running on port {}", port);
    axum::serve(listener, router).await?;

    Ok(())
}
