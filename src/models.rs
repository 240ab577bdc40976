use serde::{Deserialize, Serialize};
use std::fmt;

/// Chapter or verse identifier as it appears in the dataset.
///
/// Most records use integers, but some editions number verses as ranges
/// ("20-21"), so strings are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Number(n)
    }
}

/// A dataset record exactly as stored on disk. Missing fields default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawEntry {
    #[serde(default)]
    chapter: Option<ItemId>,
    #[serde(default)]
    verse: Option<ItemId>,
    #[serde(default)]
    translation: String,
    #[serde(default)]
    themes: Vec<String>,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    context: String,
}

/// One verse of the corpus.
///
/// Fields are read-only after construction so `combined_search_text` and
/// `verse_content` can never drift from the fields they are derived from.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawEntry")]
pub struct Entry {
    chapter: Option<ItemId>,
    verse: Option<ItemId>,
    translation: String,
    themes: Vec<String>,
    keywords: Vec<String>,
    context: String,
    combined_search_text: String,
    verse_content: String,
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        Entry::new(
            raw.chapter,
            raw.verse,
            raw.translation,
            raw.themes,
            raw.keywords,
            raw.context,
        )
    }
}

impl Entry {
    pub fn new(
        chapter: Option<ItemId>,
        verse: Option<ItemId>,
        translation: impl Into<String>,
        themes: Vec<String>,
        keywords: Vec<String>,
        context: impl Into<String>,
    ) -> Self {
        let translation = translation.into();
        let context = context.into();
        let combined_search_text = combined_search_text(&themes, &keywords, &context, &translation);
        let verse_content = keywords
            .iter()
            .chain(themes.iter())
            .map(String::as_str)
            .chain(std::iter::once(translation.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        Self {
            chapter,
            verse,
            translation,
            themes,
            keywords,
            context,
            combined_search_text,
            verse_content,
        }
    }

    pub fn chapter(&self) -> Option<&ItemId> {
        self.chapter.as_ref()
    }

    pub fn verse(&self) -> Option<&ItemId> {
        self.verse.as_ref()
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// Text fed to the embedding provider for this entry.
    pub fn combined_search_text(&self) -> &str {
        &self.combined_search_text
    }

    /// Lowercased keywords, themes and translation, used for keyword matching.
    pub fn verse_content(&self) -> &str {
        &self.verse_content
    }
}

fn combined_search_text(
    themes: &[String],
    keywords: &[String],
    context: &str,
    translation: &str,
) -> String {
    format!(
        "Theme: {}. Keywords: {}. Context: {}. Translation: {}",
        themes.join(", "),
        keywords.join(", "),
        context,
        translation
    )
}

/// Chat request
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// One ranked verse in a chat response
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VerseRecord {
    pub chapter: Option<ItemId>,
    pub verse: Option<ItemId>,
    pub translation: String,
    pub themes: Vec<String>,
    pub context: String,
    pub score: f32,
}

/// Chat response
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub verses: Vec<VerseRecord>,
    pub confidence_score: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerseCountResponse {
    pub total_verses: usize,
}
