use crate::models::{ItemId, VerseRecord};
use crate::search::hybrid::ScoredResult;

pub const NO_MATCH_MESSAGE: &str =
    "I couldn't find a matching verse. Please try rephrasing your question.";

const RULE_WIDTH: usize = 60;

/// Ranked results rendered for a human and as structured records.
#[derive(Debug, Clone)]
pub struct FormattedResults {
    pub reply: String,
    pub verses: Vec<VerseRecord>,
    /// Highest score among `verses`, 0 when empty.
    pub confidence_score: f32,
}

pub fn format_results(results: &[ScoredResult<'_>]) -> FormattedResults {
    if results.is_empty() {
        return FormattedResults {
            reply: NO_MATCH_MESSAGE.to_string(),
            verses: Vec::new(),
            confidence_score: 0.0,
        };
    }

    let reply = results
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n");

    let verses = results
        .iter()
        .map(|r| VerseRecord {
            chapter: r.entry.chapter().cloned(),
            verse: r.entry.verse().cloned(),
            translation: r.entry.translation().to_string(),
            themes: r.entry.themes().to_vec(),
            context: r.entry.context().to_string(),
            score: r.score,
        })
        .collect();

    let confidence_score = results.iter().map(|r| r.score).fold(0.0f32, f32::max);

    FormattedResults {
        reply,
        verses,
        confidence_score,
    }
}

fn render_block(result: &ScoredResult<'_>) -> String {
    let entry = result.entry;
    let rule = "=".repeat(RULE_WIDTH);

    format!(
        "\n{rule}\n📖 Chapter {}, Verse {}\n{rule}\n\n{}\n\n📌 Themes: {}\n\n💭 Context: {}\n(Confidence: {:.1}%)",
        display_id(entry.chapter()),
        display_id(entry.verse()),
        entry.translation(),
        entry.themes().join(", "),
        entry.context(),
        result.score * 100.0,
    )
}

fn display_id(id: Option<&ItemId>) -> String {
    id.map_or_else(|| "N/A".to_string(), ToString::to_string)
}
