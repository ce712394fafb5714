// Laesbarhed Data Models
// Result records produced by the analysis

use serde::{Deserialize, Serialize};

// ============ Text Statistics ============

/// Counts fixed when the analysis is constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub word_count: usize,
    pub char_count: usize,
    pub sentence_count: usize,
    pub long_word_count: usize,
    pub long_words: Vec<String>,
}

// ============ Syntactic Analysis ============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SyntacticReport {
    pub short_sentences: usize,
    pub long_sentences: usize,
    pub average_sentence_length: f64,
    /// Rounded to one decimal.
    pub complexity_score: f64,
    pub rank: u8,
}

// ============ Linguistic Analysis ============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LinguisticReport {
    /// Sentences containing a known proverb or idiom.
    pub proverbs: Vec<String>,
    /// Words that are symbolic nouns.
    pub symbolism: Vec<String>,
    /// Sentences containing a metaphor connective.
    pub metaphors: Vec<String>,
    /// At most one message, reported once per analysis.
    pub archaic_language: Vec<String>,
}

impl LinguisticReport {
    /// Number of detected items across all categories.
    pub fn feature_count(&self) -> usize {
        self.proverbs.len() + self.symbolism.len() + self.metaphors.len() + self.archaic_language.len()
    }
}

// ============ Total Complexity ============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TotalComplexityReport {
    /// Rounded to one decimal.
    pub total_complexity_score: f64,
    pub rank: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub stats: TextStats,
    pub syntactic: SyntacticReport,
    pub linguistic: LinguisticReport,
    pub total: TotalComplexityReport,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count_sums_categories() {
        let report = LinguisticReport {
            proverbs: vec!["a".into()],
            symbolism: vec!["hav".into(), "sol".into()],
            metaphors: vec![],
            archaic_language: vec!["msg".into()],
        };
        assert_eq!(report.feature_count(), 4);
        assert_eq!(LinguisticReport::default().feature_count(), 0);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = TotalComplexityReport { total_complexity_score: 12.5, rank: 2 };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"totalComplexityScore":12.5,"rank":2}"#);
    }
}
