use reqwest::Client as HttpClient;

use crate::{
    artifacts::ArtifactStore,
    error::{AppError, AppResult},
};

/// Fetches artifacts from an HTTP object store (`GET <base_url>/<key>`)
#[derive(Clone)]
pub struct RemoteArtifactStore {
    http_client: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl RemoteArtifactStore {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
            token,
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            key.trim_start_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl ArtifactStore for RemoteArtifactStore {
    async fn fetch(&self, key: &str) -> AppResult<Vec<u8>> {
        let url = self.object_url(key);
        tracing::debug!(url = %url, "Fetching remote artifact");

        let mut request = self.http_client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Artifact(format!(
                "object store returned status {} for '{}': {}",
                status, key, body
            )));
        }

        let bytes = response.bytes().await?;
        tracing::debug!(key = %key, size = bytes.len(), "Fetched remote artifact");

        Ok(bytes.to_vec())
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
