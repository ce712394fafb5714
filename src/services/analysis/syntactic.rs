// Syntactic Analysis
// Sentence length metrics and the syntactic complexity rank

use tracing::debug;

use super::ranking::{round1, SYNTACTIC_RANKS};
use crate::error::AnalysisError;
use crate::models::SyntacticReport;
use crate::services::text_processor::count_tokens;

/// Average words per sentence plus the share of long sentences, as a percentage of all words.
pub fn complexity_score(
    word_count: usize,
    sentence_count: usize,
    long_sentences: usize,
) -> Result<f64, AnalysisError> {
    if sentence_count == 0 {
        return Err(AnalysisError::DivisionByZero { quantity: "sentence count" });
    }
    if word_count == 0 {
        return Err(AnalysisError::DivisionByZero { quantity: "word count" });
    }
    let average = word_count as f64 / sentence_count as f64;
    Ok(average + (long_sentences as f64 * 100.0) / word_count as f64)
}

/// Classify sentences as short or long by token count and score the text.
pub fn analyze_syntax(
    sentences: &[String],
    word_count: usize,
    long_sentence_min_tokens: usize,
) -> Result<SyntacticReport, AnalysisError> {
    let long_sentences = sentences
        .iter()
        .filter(|s| count_tokens(s) > long_sentence_min_tokens)
        .count();
    let short_sentences = sentences.len() - long_sentences;

    let score = complexity_score(word_count, sentences.len(), long_sentences)?;
    let average_sentence_length = word_count as f64 / sentences.len() as f64;
    let rank = SYNTACTIC_RANKS.rank_for(score);

    debug!(
        short_sentences,
        long_sentences,
        average_sentence_length,
        score,
        rank,
        "syntax.analyzed"
    );

    Ok(SyntacticReport {
        short_sentences,
        long_sentences,
        average_sentence_length,
        complexity_score: round1(score),
        rank,
    })
}
