use std::path::{Component, Path, PathBuf};

use crate::{
    artifacts::ArtifactStore,
    error::{AppError, AppResult},
};

/// Reads artifacts from a directory on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalArtifactStore {
    root: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves `key` under the root, refusing keys that would escape it
    fn resolve(&self, key: &str) -> AppResult<PathBuf> {
        let relative = Path::new(key);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if key.is_empty() || escapes {
            return Err(AppError::Artifact(format!("invalid artifact key '{}'", key)));
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait::async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn fetch(&self, key: &str) -> AppResult<Vec<u8>> {
        let path = self.resolve(key)?;
        tracing::debug!(path = %path.display(), "Reading local artifact");

        tokio::fs::read(&path).await.map_err(|e| {
            AppError::Artifact(format!("failed to read {}: {}", path.display(), e))
        })
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
