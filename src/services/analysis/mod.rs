// Analysis Module
// Readability analysis of one document, organized into submodules:
// - syntactic: sentence length metrics and syntactic rank
// - linguistic: keyword scans for stylistic features
// - aggregation: total complexity score and rank
// - ranking: rank tables and descriptions
// - report: console rendering of a summary

pub mod aggregation;
pub mod linguistic;
pub mod ranking;
pub mod report;
pub mod syntactic;

use tracing::{debug, info};

use crate::error::AnalysisError;
use crate::models::{
    AnalysisSummary, LinguisticReport, SyntacticReport, TextStats, TotalComplexityReport,
};
use crate::services::config_store::AnalysisConfig;
use crate::services::text_processor::{char_count, long_words, segment_sentences, segment_words};

use aggregation::{aggregate_complexity, ComplexityInputs};
pub use ranking::rank_description;

/// Readability analysis of a single text.
///
/// Sentences, words and counts are computed once in the constructor and never
/// change. The only mutable state is the archaic-language flag: the first
/// [`check_archaic_language`](Self::check_archaic_language) call that finds
/// archaic words sets it and reports them; later calls report nothing, while
/// [`total_complexity`](Self::total_complexity) keeps adding the archaic
/// penalty for as long as the flag is set (i.e. for the rest of the lifetime).
#[derive(Debug, Clone)]
pub struct TextAnalysis {
    text: String,
    config: AnalysisConfig,
    sentences: Vec<String>,
    words: Vec<String>,
    long_words: Vec<String>,
    word_count: usize,
    char_count: usize,
    sentence_count: usize,
    archaic_detected: bool,
}

impl TextAnalysis {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_config(text, AnalysisConfig::default())
    }

    pub fn with_config(text: impl Into<String>, config: AnalysisConfig) -> Self {
        let text = text.into();
        let sentences = segment_sentences(&text);
        let words = segment_words(&text);
        let long_words = long_words(&words, config.long_word_min_chars);
        let word_count = words.len();
        let char_count = char_count(&text);
        let sentence_count = sentences.len();

        debug!(word_count, char_count, sentence_count, "analysis.tokenized");

        Self {
            text,
            config,
            sentences,
            words,
            long_words,
            word_count,
            char_count,
            sentence_count,
            archaic_detected: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn long_words(&self) -> &[String] {
        &self.long_words
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    pub fn archaic_detected(&self) -> bool {
        self.archaic_detected
    }

    pub fn stats(&self) -> TextStats {
        TextStats {
            word_count: self.word_count,
            char_count: self.char_count,
            sentence_count: self.sentence_count,
            long_word_count: self.long_words.len(),
            long_words: self.long_words.clone(),
        }
    }

    pub fn syntactic_analysis(&self) -> Result<SyntacticReport, AnalysisError> {
        syntactic::analyze_syntax(
            &self.sentences,
            self.word_count,
            self.config.long_sentence_min_tokens,
        )
    }

    pub fn find_proverbs(&self) -> Vec<String> {
        linguistic::find_proverbs(&self.sentences, &self.config.proverbs)
    }

    pub fn find_symbolism(&self) -> Vec<String> {
        linguistic::find_symbolism(&self.words, &self.config.symbols)
    }

    pub fn find_metaphors(&self) -> Vec<String> {
        linguistic::find_metaphors(&self.sentences, &self.config.metaphor_markers)
    }

    /// One-shot archaic-spelling report.
    ///
    /// Returns a single message listing every archaic word the first time any
    /// are found and sets the archaic flag. Once the flag is set, every later
    /// call returns an empty list, even though the words are still there.
    pub fn check_archaic_language(&mut self) -> Vec<String> {
        if self.archaic_detected {
            return vec![];
        }
        let found = linguistic::find_archaic_words(&self.words, &self.config.archaic_markers);
        if found.is_empty() {
            return vec![];
        }
        self.archaic_detected = true;
        info!(archaic_words = found.len(), "analysis.archaic_detected");
        vec![linguistic::archaic_message(&found)]
    }

    pub fn linguistic_analysis(&mut self) -> LinguisticReport {
        LinguisticReport {
            proverbs: self.find_proverbs(),
            symbolism: self.find_symbolism(),
            metaphors: self.find_metaphors(),
            archaic_language: self.check_archaic_language(),
        }
    }

    /// Total complexity: syntactic score + length score + number of stylistic features.
    ///
    /// Runs the linguistic scans, so it may set the archaic flag itself.
    pub fn total_complexity(&mut self) -> Result<TotalComplexityReport, AnalysisError> {
        let syntax_score = self.syntactic_analysis()?.complexity_score;
        let linguistic_features = self.linguistic_analysis().feature_count();

        let report = aggregate_complexity(
            ComplexityInputs {
                syntax_score,
                char_count: self.char_count,
                linguistic_features,
                archaic_detected: self.archaic_detected,
            },
            &self.config,
        );

        info!(
            score = report.total_complexity_score,
            rank = report.rank,
            "analysis.total_complexity"
        );
        Ok(report)
    }

    /// Syntactic, linguistic and total analysis, in that order.
    pub fn summary(&mut self) -> Result<AnalysisSummary, AnalysisError> {
        let syntactic = self.syntactic_analysis()?;
        let linguistic = self.linguistic_analysis();
        let total = self.total_complexity()?;
        let description = rank_description(total.rank).to_string();

        Ok(AnalysisSummary {
            stats: self.stats(),
            syntactic,
            linguistic,
            total,
            description,
        })
    }
}
