use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pantry_api::{
    api::{create_router, AppState},
    artifacts::{create_artifact_store, load_catalog, load_rating_model},
    config::Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pantry_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Artifacts must be in memory before the listener accepts anything
    let store = create_artifact_store(&config)?;
    let catalog = load_catalog(store.as_ref(), &config.catalog_key).await?;
    let oracle = load_rating_model(store.as_ref(), &config.model_key).await?;

    let state = AppState::new(catalog, oracle);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
