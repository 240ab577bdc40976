use anyhow::Context;
use std::path::{Path, PathBuf};

use crate::error::{Result, SearchError};
use crate::models::Entry;

/// The fixed, ordered verse collection.
///
/// Positions are stable for the lifetime of the value and line up with the
/// rows of the embedding matrix built from it.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<Entry>,
}

impl Corpus {
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Load from the first candidate path that exists.
    pub fn discover(candidates: &[PathBuf]) -> Result<(PathBuf, Self)> {
        let path = candidates
            .iter()
            .find(|p| p.is_file())
            .ok_or_else(|| SearchError::DatasetMissing {
                searched: candidates.to_vec(),
            })?;
        let corpus = Self::load(path)?;
        Ok((path.clone(), corpus))
    }

    /// Load a JSON array of entries.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SearchError::DatasetMissing {
                searched: vec![path.to_path_buf()],
            });
        }
        let malformed = |source: anyhow::Error| SearchError::DatasetMalformed {
            path: path.to_path_buf(),
            source,
        };
        let data = std::fs::read_to_string(path)
            .context("Failed to read dataset")
            .map_err(malformed)?;
        let entries: Vec<Entry> = serde_json::from_str(&data)
            .context("Invalid JSON format")
            .map_err(malformed)?;
        Ok(Self { entries })
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let entries: Vec<Entry> = serde_json::from_str(data)
            .context("Invalid JSON format")
            .map_err(|source| SearchError::DatasetMalformed {
                path: PathBuf::new(),
                source,
            })?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Texts to embed, in corpus order.
    pub fn search_texts(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| e.combined_search_text().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_preserves_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"chapter": 1, "verse": 1, "translation": "first"}},
                {{"chapter": 1, "verse": 2, "translation": "second", "themes": ["a"]}}
            ]"#
        )
        .unwrap();

        let corpus = Corpus::load(file.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(0).unwrap().translation(), "first");
        assert_eq!(corpus.get(1).unwrap().translation(), "second");
        assert_eq!(corpus.search_texts().len(), 2);
    }

    #[test]
    fn test_missing_file_is_dataset_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Corpus::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SearchError::DatasetMissing { .. }));
    }

    #[test]
    fn test_bad_json_is_dataset_malformed_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        match Corpus::load(file.path()).unwrap_err() {
            SearchError::DatasetMalformed { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_discover_picks_first_existing_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let present = dir.path().join("present.json");
        std::fs::write(&present, r#"[{"translation": "x"}]"#).unwrap();

        let (path, corpus) = Corpus::discover(&[missing.clone(), present.clone()]).unwrap();
        assert_eq!(path, present);
        assert_eq!(corpus.len(), 1);

        let err = Corpus::discover(&[missing]).unwrap_err();
        assert!(matches!(err, SearchError::DatasetMissing { searched } if searched.len() == 1));
    }

    #[test]
    fn test_empty_array_loads_as_empty_corpus() {
        let corpus = Corpus::from_json("[]").unwrap();
        assert!(corpus.is_empty());
    }
}
