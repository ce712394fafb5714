// Linguistic Feature Detection
// Keyword scans for proverbs, symbolism, metaphors and archaic spelling

pub const ARCHAIC_MESSAGE_PREFIX: &str = "Gammeldags sprog er fundet i teksten: ";

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| haystack.contains(n.as_str()))
}

/// Sentences containing any proverb (case-sensitive).
pub fn find_proverbs(sentences: &[String], proverbs: &[String]) -> Vec<String> {
    sentences
        .iter()
        .filter(|s| contains_any(s, proverbs))
        .cloned()
        .collect()
}

/// Words whose lowercase form is one of `symbols`.
pub fn find_symbolism(words: &[String], symbols: &[String]) -> Vec<String> {
    words
        .iter()
        .filter(|w| {
            let lower = w.to_lowercase();
            symbols.iter().any(|s| *s == lower)
        })
        .cloned()
        .collect()
}

/// Sentences containing a metaphor connective such as "som en".
pub fn find_metaphors(sentences: &[String], markers: &[String]) -> Vec<String> {
    sentences
        .iter()
        .filter(|s| contains_any(s, markers))
        .cloned()
        .collect()
}

/// Words carrying a legacy spelling marker (e.g. "aa" for "å").
pub fn find_archaic_words(words: &[String], markers: &[String]) -> Vec<String> {
    words
        .iter()
        .filter(|w| contains_any(w, markers))
        .cloned()
        .collect()
}

pub fn archaic_message(found: &[String]) -> String {
    format!("{}{}", ARCHAIC_MESSAGE_PREFIX, found.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::config_store::AnalysisConfig;
    use crate::services::text_processor::{segment_sentences, segment_words};

    #[test]
    fn test_find_proverbs_is_case_sensitive() {
        let config = AnalysisConfig::default();
        let sentences = segment_sentences(
            "Han er altid oppe i skyerne. Oppe i skyerne var der stille. Vi kan slå to fluer med ét smæk!",
        );
        let found = find_proverbs(&sentences, &config.proverbs);
        assert_eq!(
            found,
            vec!["Han er altid oppe i skyerne", "Vi kan slå to fluer med ét smæk"]
        );
    }

    #[test]
    fn test_find_symbolism_matches_lowercased_whole_words() {
        let config = AnalysisConfig::default();
        let words = segment_words("Blomst i mørke, havet og HAV under solen og sol.");
        let found = find_symbolism(&words, &config.symbols);
        assert_eq!(found, vec!["Blomst", "mørke", "HAV", "sol"]);
    }

    #[test]
    fn test_find_metaphors() {
        let config = AnalysisConfig::default();
        let sentences = segment_sentences("Hun er som en storm. Han løb hurtigt. Livet er som et spil.");
        let found = find_metaphors(&sentences, &config.metaphor_markers);
        assert_eq!(found, vec!["Hun er som en storm", "Livet er som et spil"]);
    }

    #[test]
    fn test_find_archaic_words_and_message() {
        let config = AnalysisConfig::default();
        let words = segment_words("Paa vejen saa han et Aeble og en baad.");
        let found = find_archaic_words(&words, &config.archaic_markers);
        assert_eq!(found, vec!["Paa", "saa", "baad"]);
        assert_eq!(
            archaic_message(&found),
            "Gammeldags sprog er fundet i teksten: Paa, saa, baad"
        );
    }

    #[test]
    fn test_empty_lists_find_nothing() {
        let sentences = segment_sentences("Solen er som en blomst.");
        let words = segment_words("Solen er som en blomst.");
        assert!(find_proverbs(&sentences, &[]).is_empty());
        assert!(find_symbolism(&words, &[]).is_empty());
        assert!(find_metaphors(&sentences, &[]).is_empty());
        assert!(find_archaic_words(&words, &[]).is_empty());
    }
}
