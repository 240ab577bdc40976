use crate::error::{Result, SearchError};

/// One embedding per corpus entry, row `i` belonging to entry `i`.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingMatrix {
    rows: Vec<Vec<f32>>,
}

impl EmbeddingMatrix {
    /// All rows must share one dimension.
    pub fn new(rows: Vec<Vec<f32>>) -> Result<Self> {
        if let Some(first) = rows.first() {
            let dim = first.len();
            if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != dim) {
                return Err(SearchError::Internal(format!(
                    "Embedding row {i} has dimension {}, expected {dim}",
                    row.len()
                )));
            }
        }
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Cosine similarity of `query` against every row, in row order.
    pub fn similarities(&self, query: &[f32]) -> Vec<f32> {
        self.rows
            .iter()
            .map(|row| cosine_similarity(query, row))
            .collect()
    }
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_basics() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
        // Magnitude does not matter
        assert!((cosine_similarity(&[2.0, 2.0], &[0.5, 0.5]) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn test_similarities_follow_row_order() {
        let matrix = EmbeddingMatrix::new(vec![
            vec![0.1, 0.2, 0.9],
            vec![0.9, 0.1, 0.1],
            vec![0.2, 0.8, 0.3],
        ])
        .unwrap();
        let scores = matrix.similarities(&[0.95, 0.05, 0.05]);
        assert_eq!(scores.len(), 3);
        assert!(scores[1] > scores[0]);
        assert!(scores[1] > scores[2]);
        assert_eq!(matrix.dim(), 3);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = EmbeddingMatrix::new(vec![vec![1.0, 0.0], vec![1.0]]).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }
}
