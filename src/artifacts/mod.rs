//! Artifact storage abstraction
//!
//! The catalog and the rating model are read once at startup from either a
//! local directory or a remote object store. Both backends implement
//! [`ArtifactStore`] and are selected by configuration.

use std::sync::Arc;

use crate::{
    catalog::Catalog,
    config::{ArtifactBackend, Config},
    error::{AppError, AppResult},
    services::oracle::{LinearRatingModel, RatingOracle},
};

pub mod local;
pub mod remote;

pub use local::LocalArtifactStore;
pub use remote::RemoteArtifactStore;

/// Trait for artifact storage backends
#[async_trait::async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Fetch the raw bytes stored under `key`
    async fn fetch(&self, key: &str) -> AppResult<Vec<u8>>;

    /// Backend name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Builds the artifact store selected by configuration
pub fn create_artifact_store(config: &Config) -> AppResult<Arc<dyn ArtifactStore>> {
    match config.artifact_backend {
        ArtifactBackend::Local => Ok(Arc::new(LocalArtifactStore::new(
            config.artifacts_dir.clone(),
        ))),
        ArtifactBackend::Remote => {
            let base_url = config.artifacts_base_url.clone().ok_or_else(|| {
                AppError::Artifact("remote backend needs ARTIFACTS_BASE_URL".to_string())
            })?;
            Ok(Arc::new(RemoteArtifactStore::new(
                base_url,
                config.artifacts_token.clone(),
            )))
        }
    }
}

/// Fetches and validates the recipe catalog
pub async fn load_catalog(store: &dyn ArtifactStore, key: &str) -> AppResult<Catalog> {
    let bytes = store.fetch(key).await?;
    let catalog = Catalog::from_json_slice(&bytes)?;

    tracing::info!(
        backend = store.name(),
        key = %key,
        recipes = catalog.len(),
        has_ingredients = catalog.has_ingredients(),
        "Loaded recipe catalog"
    );

    Ok(catalog)
}

/// Fetches and validates the rating model
pub async fn load_rating_model(
    store: &dyn ArtifactStore,
    key: &str,
) -> AppResult<Arc<dyn RatingOracle>> {
    let bytes = store.fetch(key).await?;
    let model = LinearRatingModel::from_json_slice(&bytes)?;

    tracing::info!(
        backend = store.name(),
        key = %key,
        model = model.name(),
        "Loaded rating model"
    );

    Ok(Arc::new(model))
}
