use crate::corpus::Corpus;
use crate::embedding::EmbeddingProvider;
use crate::error::{Result, SearchError};
use crate::models::Entry;
use crate::search::keywords::extract_keywords;
use crate::search::vector::EmbeddingMatrix;

pub const SEMANTIC_WEIGHT: f32 = 0.7;
pub const KEYWORD_WEIGHT: f32 = 0.3;
/// Maximum results returned per query.
pub const TOP_K: usize = 3;
/// Results must score strictly above this to be returned.
pub const MIN_SCORE: f32 = 0.1;

/// A ranked corpus entry.
#[derive(Debug, Clone, Copy)]
pub struct ScoredResult<'a> {
    /// Position in the corpus.
    pub index: usize,
    pub entry: &'a Entry,
    pub score: f32,
}

/// Hybrid keyword + semantic search.
///
/// Pipeline:
/// 1. Extract query keywords and count, per entry, how many distinct keywords
///    occur as substrings of its keywords/themes/translation.
/// 2. Normalize those counts by the corpus-wide maximum.
/// 3. Cosine similarity between the query embedding and every entry embedding.
/// 4. `0.7 * semantic + 0.3 * keyword`, top 3, drop anything ≤ 0.1.
pub async fn search<'a>(
    corpus: &'a Corpus,
    matrix: &EmbeddingMatrix,
    provider: &dyn EmbeddingProvider,
    query: &str,
) -> Result<Vec<ScoredResult<'a>>> {
    if corpus.is_empty() {
        return Err(SearchError::NotReady);
    }
    if corpus.len() != matrix.len() {
        return Err(SearchError::MisalignedIndex {
            entries: corpus.len(),
            embeddings: matrix.len(),
        });
    }

    let keywords: Vec<String> = extract_keywords(query).into_iter().collect();
    let raw = keyword_scores(corpus, &keywords);
    let keyword = normalize_keyword_scores(&raw);

    let query_embedding = provider
        .embed(query)
        .await
        .map_err(|e| SearchError::Embedding(format!("{e:#}")))?;
    if query_embedding.len() != matrix.dim() {
        return Err(SearchError::Internal(format!(
            "Query embedding has dimension {}, index has {}",
            query_embedding.len(),
            matrix.dim()
        )));
    }
    let semantic = matrix.similarities(&query_embedding);

    let combined = fuse(&semantic, &keyword);
    let results = select_top(corpus, &combined);

    tracing::debug!(
        keywords = ?keywords,
        results = results.len(),
        top_score = results.first().map(|r| r.score),
        "hybrid search"
    );

    Ok(results)
}

/// Number of distinct `keywords` found as substrings of each entry's content.
pub fn keyword_scores(corpus: &Corpus, keywords: &[String]) -> Vec<u32> {
    corpus
        .entries()
        .iter()
        .map(|entry| {
            let content = entry.verse_content();
            keywords.iter().filter(|k| content.contains(k.as_str())).count() as u32
        })
        .collect()
}

/// Scale raw counts into [0, 1] by the maximum. All-zero input stays all zero.
pub fn normalize_keyword_scores(raw: &[u32]) -> Vec<f32> {
    let max = raw.iter().copied().max().unwrap_or(0);
    let divisor = if max == 0 { 1.0 } else { max as f32 };
    raw.iter().map(|&s| s as f32 / divisor).collect()
}

pub fn fuse(semantic: &[f32], keyword: &[f32]) -> Vec<f32> {
    semantic
        .iter()
        .zip(keyword)
        .map(|(s, k)| SEMANTIC_WEIGHT * s + KEYWORD_WEIGHT * k)
        .collect()
}

/// Best `TOP_K` entries by score, ties in corpus order, then the `MIN_SCORE` cut.
pub fn select_top<'a>(corpus: &'a Corpus, combined: &[f32]) -> Vec<ScoredResult<'a>> {
    let mut ranked: Vec<ScoredResult<'a>> = corpus
        .entries()
        .iter()
        .zip(combined)
        .enumerate()
        .map(|(index, (entry, &score))| ScoredResult {
            index,
            entry,
            // NaN/inf sink to the bottom and fall under the floor
            score: if score.is_finite() {
                score
            } else {
                f32::NEG_INFINITY
            },
        })
        .collect();

    // sort_by is stable, so equal scores keep corpus order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(TOP_K);
    ranked.retain(|r| r.score > MIN_SCORE);
    ranked
}
