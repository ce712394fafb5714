// Text Processing Service
// Sentence and word segmentation for Danish text

use regex::Regex;
use std::sync::OnceLock;

/// Minimum run of dots treated as an ellipsis rather than sentence ends.
const ELLIPSIS_MIN_DOTS: usize = 3;

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w+\b").expect("word regex"))
}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

// Fragments without a single word (a lone "...", stray quotes) are not sentences.
fn push_trimmed(sentences: &mut Vec<String>, buffer: &str) {
    let trimmed = buffer.trim();
    if word_re().is_match(trimmed) {
        sentences.push(trimmed.to_string());
    }
}

/// Split text into sentences on `.`, `!` and `?`.
///
/// A run of three or more dots is an ellipsis and stays inside the sentence,
/// together with any `.`, `!` or `?` that directly follows it. Terminators are
/// dropped, pieces are trimmed and pieces without any word are discarded.
pub fn segment_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut buffer = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '.' {
            let run_end = chars[i..]
                .iter()
                .position(|c| *c != '.')
                .map(|p| i + p)
                .unwrap_or(chars.len());
            let run_len = run_end - i;

            if run_len >= ELLIPSIS_MIN_DOTS {
                buffer.extend(&chars[i..run_end]);
                i = run_end;
                // Terminators glued to the ellipsis belong to it.
                while i < chars.len() && is_terminator(chars[i]) {
                    buffer.push(chars[i]);
                    i += 1;
                }
                continue;
            }

            // One or two dots: each one ends a (possibly empty) sentence.
            for _ in 0..run_len {
                push_trimmed(&mut sentences, &buffer);
                buffer.clear();
            }
            i = run_end;
            continue;
        }

        if is_terminator(ch) {
            push_trimmed(&mut sentences, &buffer);
            buffer.clear();
        } else {
            buffer.push(ch);
        }
        i += 1;
    }

    push_trimmed(&mut sentences, &buffer);
    sentences
}

/// Extract every maximal run of word characters (Unicode letters, digits, `_`).
pub fn segment_words(text: &str) -> Vec<String> {
    word_re()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Words longer than `min_chars` characters, in document order.
pub fn long_words(words: &[String], min_chars: usize) -> Vec<String> {
    words
        .iter()
        .filter(|w| w.chars().count() > min_chars)
        .cloned()
        .collect()
}

/// Whitespace-delimited token count of a sentence.
pub fn count_tokens(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

/// Character count in Unicode scalar values, so `æ`, `ø` and `å` count once.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_sentences_basic() {
        let sentences = segment_sentences("Kort sætning. Endnu en kort sætning.");
        assert_eq!(sentences, vec!["Kort sætning", "Endnu en kort sætning"]);
    }

    #[test]
    fn test_segment_sentences_ellipsis_is_not_terminator() {
        let sentences = segment_sentences("Hun tænkte... måske.");
        assert_eq!(sentences, vec!["Hun tænkte... måske"]);
    }

    #[test]
    fn test_segment_sentences_terminator_after_ellipsis_is_absorbed() {
        let sentences = segment_sentences("Vent...! Nu går vi.");
        assert_eq!(sentences, vec!["Vent...! Nu går vi"]);
    }

    #[test]
    fn test_segment_sentences_spaced_terminator_after_ellipsis_splits() {
        let sentences = segment_sentences("Vent... ! Nu.");
        assert_eq!(sentences, vec!["Vent...", "Nu"]);
    }

    #[test]
    fn test_segment_sentences_drops_wordless_fragments() {
        assert_eq!(segment_sentences("Hej. ..."), vec!["Hej"]);
        assert_eq!(segment_sentences("Hej. - . Farvel."), vec!["Hej", "Farvel"]);
        assert!(segment_sentences("...").is_empty());
    }

    #[test]
    fn test_segment_sentences_mixed_terminators() {
        let sentences = segment_sentences("Hvor er du? Her! Godt.");
        assert_eq!(sentences, vec!["Hvor er du", "Her", "Godt"]);
    }

    #[test]
    fn test_segment_sentences_drops_empty_pieces() {
        let sentences = segment_sentences("Ja.. Nej!? ");
        assert_eq!(sentences, vec!["Ja", "Nej"]);
        assert!(segment_sentences("?!. ").is_empty());
    }

    #[test]
    fn test_segment_sentences_keeps_trailing_fragment() {
        let sentences = segment_sentences("Første sætning. Uden punktum");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], "Uden punktum");
    }

    #[test]
    fn test_sentence_count_matches_segmentation_and_no_empty_sentence() {
        let text = "Solen skinner. Havet er roligt! Kommer du i morgen? Ja.";
        let sentences = segment_sentences(text);
        assert_eq!(sentences.len(), 4);
        assert!(sentences.iter().all(|s| !s.trim().is_empty()));
    }

    #[test]
    fn test_segment_words_unicode() {
        let words = segment_words("Blåbærgrød, æbler og øl_2!");
        assert_eq!(words, vec!["Blåbærgrød", "æbler", "og", "øl_2"]);
    }

    #[test]
    fn test_segment_words_punctuation_only() {
        assert!(segment_words("... !? -- ,").is_empty());
        assert!(segment_words("").is_empty());
    }

    #[test]
    fn test_long_words_counts_chars_not_bytes() {
        let words = segment_words("kærlighed hus sommerfugl æøåæøå");
        let long = long_words(&words, 6);
        // "æøåæøå" is 6 chars (12 bytes) and must not count as long.
        assert_eq!(long, vec!["kærlighed", "sommerfugl"]);
    }

    #[test]
    fn test_count_tokens() {
        assert_eq!(count_tokens("  en  to\ttre "), 3);
        assert_eq!(count_tokens(""), 0);
    }
}
