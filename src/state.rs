use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::corpus::Corpus;
use crate::embedding::{self, EmbeddingProvider};
use crate::error::{Result, SearchError};
use crate::search::hybrid::{self, ScoredResult};
use crate::search::vector::EmbeddingMatrix;

/// Corpus, its embeddings, and the provider that produced them.
///
/// Only constructible fully aligned: one embedding row per entry, same order.
pub struct SearchIndex {
    corpus: Corpus,
    matrix: EmbeddingMatrix,
    provider: Arc<dyn EmbeddingProvider>,
}

impl SearchIndex {
    pub fn new(
        corpus: Corpus,
        matrix: EmbeddingMatrix,
        provider: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self> {
        if corpus.is_empty() {
            return Err(SearchError::NotReady);
        }
        if corpus.len() != matrix.len() {
            return Err(SearchError::MisalignedIndex {
                entries: corpus.len(),
                embeddings: matrix.len(),
            });
        }
        Ok(Self {
            corpus,
            matrix,
            provider,
        })
    }

    /// Embed every entry's combined search text and assemble the index.
    pub async fn build(corpus: Corpus, provider: Arc<dyn EmbeddingProvider>) -> Result<Self> {
        if corpus.is_empty() {
            return Err(SearchError::NotReady);
        }
        let rows = provider
            .embed_batch(&corpus.search_texts())
            .await
            .map_err(|e| SearchError::Embedding(format!("{e:#}")))?;
        let matrix = EmbeddingMatrix::new(rows)?;
        Self::new(corpus, matrix, provider)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<ScoredResult<'_>>> {
        hybrid::search(&self.corpus, &self.matrix, self.provider.as_ref(), query).await
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }
}

impl fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchIndex")
            .field("entries", &self.corpus.len())
            .field("dim", &self.matrix.dim())
            .field("provider", &self.provider.name())
            .finish()
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
    index: Arc<RwLock<Option<Arc<SearchIndex>>>>,
    /// Serializes initialization so concurrent requests don't each load the corpus.
    init_lock: Arc<tokio::sync::Mutex<()>>,
}

impl AppState {
    /// Uninitialized state; call [`AppState::initialize`] or let the first
    /// request do it through [`AppState::ensure_ready`].
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.embedding.timeout_secs.max(1));
        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            config,
            http_client,
            index: Arc::new(RwLock::new(None)),
            init_lock: Arc::new(tokio::sync::Mutex::new(())),
        })
    }

    /// State that is ready from the start, e.g. for a fixture corpus.
    pub fn with_index(config: Config, index: SearchIndex) -> anyhow::Result<Self> {
        let state = Self::new(config)?;
        *state.index.write() = Some(Arc::new(index));
        Ok(state)
    }

    pub fn index(&self) -> Option<Arc<SearchIndex>> {
        self.index.read().clone()
    }

    pub fn is_ready(&self) -> bool {
        self.index.read().is_some()
    }

    /// Load the dataset and embed it, publishing the index only on success.
    /// A no-op returning the existing index if one is already published.
    pub async fn initialize(&self) -> Result<Arc<SearchIndex>> {
        let _guard = self.init_lock.lock().await;
        if let Some(index) = self.index() {
            return Ok(index);
        }

        let (path, corpus) = Corpus::discover(&self.config.dataset_candidates())?;
        tracing::info!("Loaded dataset with {} verses from {}", corpus.len(), path.display());
        if corpus.is_empty() {
            tracing::warn!("Dataset at {} is empty", path.display());
            return Err(SearchError::NotReady);
        }

        let provider = embedding::from_config(&self.http_client, &self.config.embedding)
            .map_err(|e| SearchError::Internal(format!("{e:#}")))?;
        tracing::info!("Embedding {} verses with {}", corpus.len(), provider.name());

        let index = Arc::new(SearchIndex::build(corpus, provider).await?);
        *self.index.write() = Some(index.clone());
        tracing::info!("Search index ready ({} verses)", index.len());
        Ok(index)
    }

    /// The published index, initializing it first if needed. Initialization
    /// failures are logged and leave the state uninitialized.
    pub async fn ensure_ready(&self) -> Option<Arc<SearchIndex>> {
        if let Some(index) = self.index() {
            return Some(index);
        }
        match self.initialize().await {
            Ok(index) => Some(index),
            Err(e) => {
                tracing::warn!("Search index initialization failed: {e}");
                None
            }
        }
    }
}
