use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the corpus, embedding, and search layers.
#[derive(Debug, Error)]
pub enum SearchError {
    /// None of the candidate dataset locations exist.
    #[error("Dataset not found (searched: {})", display_paths(.searched))]
    DatasetMissing { searched: Vec<PathBuf> },

    /// The dataset file exists but could not be read or parsed.
    #[error("Invalid dataset at {}: {source}", .path.display())]
    DatasetMalformed {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// Search invoked before a corpus and embedding matrix were loaded.
    #[error("Service not ready. Dataset failed to load.")]
    NotReady,

    /// The user query is blank after trimming.
    #[error("Empty message")]
    EmptyQuery,

    /// Corpus and embedding matrix disagree on length.
    #[error("Embedding matrix has {embeddings} rows for {entries} corpus entries")]
    MisalignedIndex { entries: usize, embeddings: usize },

    /// The embedding provider failed to encode text.
    #[error("Embedding failed: {0}")]
    Embedding(String),

    #[error("{0}")]
    Internal(String),
}

impl SearchError {
    /// Errors that mean "no usable index" rather than "this request broke".
    pub fn is_not_ready(&self) -> bool {
        matches!(
            self,
            Self::NotReady | Self::DatasetMissing { .. } | Self::DatasetMalformed { .. }
        )
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_missing_lists_searched_paths() {
        let err = SearchError::DatasetMissing {
            searched: vec![PathBuf::from("a.json"), PathBuf::from("/tmp/b.json")],
        };
        assert_eq!(
            err.to_string(),
            "Dataset not found (searched: a.json, /tmp/b.json)"
        );
    }

    #[test]
    fn test_not_ready_classification() {
        assert!(SearchError::NotReady.is_not_ready());
        assert!(SearchError::DatasetMissing { searched: vec![] }.is_not_ready());
        assert!(!SearchError::EmptyQuery.is_not_ready());
        assert!(!SearchError::Embedding("boom".into()).is_not_ready());
    }
}
