use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name the dataset is published under.
pub const DATASET_FILE_NAME: &str = "bhagavad_gita_dataset_expanded.json";

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "BhagavadGPT";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Explicit dataset location. When set, no other candidates are tried.
    pub dataset_path: Option<PathBuf>,
    /// Directory holding `index.html` and other frontend assets
    pub public_dir: PathBuf,
    /// Build the search index before accepting requests
    pub eager_init: bool,
    /// Embedding provider configuration
    pub embedding: EmbeddingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// "hash", "ollama" or "openai"
    pub provider: String,
    /// Base URL for the embedding API (ignored by "hash")
    pub base_url: String,
    /// Model name for embeddings
    pub model: String,
    /// API key (only needed for cloud providers)
    pub api_key: Option<String>,
    /// Embedding vector dimension
    pub dim: usize,
    /// Request timeout in seconds (capped at 120).
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            dataset_path: None,
            public_dir: PathBuf::from("./public"),
            eager_init: true,
            embedding: EmbeddingConfig::default(),
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(),
            base_url: "http://localhost:11434".to_string(),
            model: "all-minilm".to_string(),
            api_key: None,
            dim: 384,
            timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("VERSE_SEARCH_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(path) = std::env::var("VERSE_SEARCH_DATASET") {
            config.dataset_path = Some(PathBuf::from(path));
        }
        if let Ok(dir) = std::env::var("VERSE_SEARCH_PUBLIC_DIR") {
            config.public_dir = PathBuf::from(dir);
        }
        if let Ok(val) = std::env::var("VERSE_SEARCH_EAGER_INIT") {
            if let Ok(v) = val.parse() {
                config.eager_init = v;
            }
        }

        if let Ok(provider) = std::env::var("EMBEDDING_PROVIDER") {
            config.embedding.provider = provider;
        }
        if let Ok(url) = std::env::var("EMBEDDING_BASE_URL") {
            config.embedding.base_url = url;
        }
        if let Ok(model) = std::env::var("EMBEDDING_MODEL") {
            config.embedding.model = model;
        }
        if let Ok(key) = std::env::var("EMBEDDING_API_KEY") {
            config.embedding.api_key = Some(key);
        }
        if let Ok(dim) = std::env::var("EMBEDDING_DIM") {
            if let Ok(d) = dim.parse() {
                config.embedding.dim = d;
            }
        }
        if let Ok(val) = std::env::var("EMBEDDING_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.embedding.timeout_secs = v.min(120);
            }
        }

        config
    }

    /// Locations searched for the dataset, in priority order.
    pub fn dataset_candidates(&self) -> Vec<PathBuf> {
        if let Some(path) = &self.dataset_path {
            return vec![path.clone()];
        }
        vec![
            PathBuf::from(DATASET_FILE_NAME),
            PathBuf::from("data").join(DATASET_FILE_NAME),
            std::env::temp_dir().join(DATASET_FILE_NAME),
        ]
    }
}
