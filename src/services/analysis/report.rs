// Console report
// Danish plain-text rendering of an analysis summary

use std::fmt::Write;

use crate::models::{AnalysisSummary, LinguisticReport, SyntacticReport};

fn quoted_list(items: &[String]) -> String {
    let inner = items
        .iter()
        .map(|s| format!("'{}'", s))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", inner)
}

fn format_syntactic(report: &SyntacticReport) -> String {
    format!(
        "korte sætninger: {}, lange sætninger: {}, gennemsnitlig sætningslængde: {:.2}, kompleksitetsscore: {:.1}, rang: {}",
        report.short_sentences,
        report.long_sentences,
        report.average_sentence_length,
        report.complexity_score,
        report.rank
    )
}

fn format_linguistic(report: &LinguisticReport) -> String {
    format!(
        "ordsprog/talemåder: {}, symbolik: {}, metaforer: {}, gammeldags sprog: {}",
        quoted_list(&report.proverbs),
        quoted_list(&report.symbolism),
        quoted_list(&report.metaphors),
        quoted_list(&report.archaic_language)
    )
}

/// Render the summary the way the interactive tool prints it.
pub fn format_summary(summary: &AnalysisSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nSyntaktisk Analyse: {}", format_syntactic(&summary.syntactic));
    let _ = writeln!(out, "\nSproglig Analyse: {}", format_linguistic(&summary.linguistic));
    let _ = writeln!(
        out,
        "\nTotal Kompleksitet: {:.1} - Rank: {}",
        summary.total.total_complexity_score, summary.total.rank
    );
    let _ = writeln!(
        out,
        "\nRangliste (1-10): {} - {}",
        summary.total.rank, summary.description
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::analysis::TextAnalysis;

    #[test]
    fn test_format_summary_contains_sections() {
        let mut analysis = TextAnalysis::new("Kort sætning. Endnu en kort sætning.");
        let summary = analysis.summary().unwrap();
        let text = format_summary(&summary);

        assert!(text.contains("Syntaktisk Analyse: korte sætninger: 2, lange sætninger: 0"));
        assert!(text.contains("symbolik: []"));
        assert!(text.contains("Total Kompleksitet: 3.1 - Rank: 1"));
        assert!(text.contains("Rangliste (1-10): 1 - Meget let tekst for alle læsere, børnelitteratur."));
    }

    #[test]
    fn test_quoted_list() {
        assert_eq!(quoted_list(&[]), "[]");
        assert_eq!(quoted_list(&["hav".to_string(), "sol".to_string()]), "['hav', 'sol']");
    }
}
