use serde::Deserialize;
use std::path::PathBuf;

/// Where model and catalog artifacts are read from
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactBackend {
    /// Files under `artifacts_dir`
    Local,
    /// Objects under `artifacts_base_url`, fetched over HTTP
    Remote,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Artifact storage backend
    #[serde(default = "default_artifact_backend")]
    pub artifact_backend: ArtifactBackend,

    /// Directory holding artifacts for the local backend
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: PathBuf,

    /// Base URL of the object store for the remote backend
    #[serde(default)]
    pub artifacts_base_url: Option<String>,

    /// Bearer token sent to the object store, if any
    #[serde(default)]
    pub artifacts_token: Option<String>,

    /// Key of the recipe catalog artifact
    #[serde(default = "default_catalog_key")]
    pub catalog_key: String,

    /// Key of the rating model artifact
    #[serde(default = "default_model_key")]
    pub model_key: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_artifact_backend() -> ArtifactBackend {
    ArtifactBackend::Local
}

fn default_artifacts_dir() -> PathBuf {
    PathBuf::from("artifacts")
}

fn default_catalog_key() -> String {
    "recipes.json".to_string()
}

fn default_model_key() -> String {
    "recipe_rating_model.json".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Build configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.artifact_backend == ArtifactBackend::Remote && self.artifacts_base_url.is_none() {
            anyhow::bail!("ARTIFACTS_BASE_URL is required when ARTIFACT_BACKEND=remote");
        }
        Ok(())
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
