//! Text → dense vector capability.
//!
//! The hybrid scorer only ever sees [`EmbeddingProvider`]; which model sits
//! behind it is a configuration choice:
//!
//! - [`HashEmbedder`] - deterministic FNV-1a feature hashing, no model needed
//! - [`HttpEmbedder`] - Ollama `/api/embed` or an OpenAI-compatible `/v1/embeddings`

mod hash;
mod http;

pub use hash::HashEmbedder;
pub use http::HttpEmbedder;

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::EmbeddingConfig;

#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Short label for logs, e.g. `ollama/all-minilm`.
    fn name(&self) -> String;

    /// Encode a batch of texts. The output is parallel with `texts`.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Encode a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.embed_batch(&[text.to_string()])
            .await?
            .into_iter()
            .next()
            .context("No embedding returned")
    }
}

/// Build the provider selected by `config.provider`.
pub fn from_config(
    client: &reqwest::Client,
    config: &EmbeddingConfig,
) -> Result<Arc<dyn EmbeddingProvider>> {
    match config.provider.as_str() {
        "hash" => {
            tracing::warn!("Using hash embeddings; semantic scores are lexical approximations");
            Ok(Arc::new(HashEmbedder::new(config.dim)))
        }
        "ollama" | "openai" => Ok(Arc::new(HttpEmbedder::new(client.clone(), config.clone()))),
        other => anyhow::bail!("Unknown embedding provider: {other}"),
    }
}
