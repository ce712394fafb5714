// Aggregation Logic
// Combines syntactic, length and stylistic signals into one complexity rank

use super::ranking::{round1, TOTAL_RANKS};
use crate::models::TotalComplexityReport;
use crate::services::config_store::AnalysisConfig;

/// Inputs to the total score, gathered by the analysis before aggregation.
#[derive(Debug, Clone, Copy)]
pub struct ComplexityInputs {
    /// Already rounded to one decimal.
    pub syntax_score: f64,
    pub char_count: usize,
    pub linguistic_features: usize,
    pub archaic_detected: bool,
}

/// Length score grows with text length; archaic spelling adds a flat penalty once.
pub fn length_score(char_count: usize, archaic_detected: bool, config: &AnalysisConfig) -> f64 {
    // The divisor is checked positive when the config is loaded.
    let mut score = char_count as f64 / config.length_score_divisor;
    if archaic_detected {
        score += config.archaic_penalty;
    }
    score
}

pub fn aggregate_complexity(inputs: ComplexityInputs, config: &AnalysisConfig) -> TotalComplexityReport {
    let total = inputs.syntax_score
        + length_score(inputs.char_count, inputs.archaic_detected, config)
        + inputs.linguistic_features as f64;

    TotalComplexityReport {
        total_complexity_score: round1(total),
        rank: TOTAL_RANKS.rank_for(total),
    }
}
