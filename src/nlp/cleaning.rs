//! Word/punctuation tokenization with lowercasing.
//!
//! A token is either a maximal run of word characters (Unicode `\w`) or a
//! maximal run of characters that are neither word characters nor whitespace.
//! Whitespace only separates tokens and never appears in the output.
//!
//! `\w` follows Unicode's definition, which includes combining marks. A
//! decomposed letter such as `e` + U+0301 therefore stays inside its word
//! rather than being split off as punctuation.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

static WORD_PUNCT: OnceLock<Regex> = OnceLock::new();

fn word_punct() -> &'static Regex {
    WORD_PUNCT.get_or_init(|| Regex::new(r"\w+|[^\w\s]+").expect("static pattern is valid"))
}

/// Split `text` into lowercased word and punctuation tokens.
///
/// Returns the full token stream (order and repetition preserved) together
/// with the distinct tokens in ascending lexicographic order. Empty input
/// yields two empty vectors.
///
/// ```
/// let (tokens, vocab) = psycial_data::clean_and_tokenize("Hello, world!");
/// assert_eq!(tokens, ["hello", ",", "world", "!"]);
/// assert_eq!(vocab, ["!", ",", "hello", "world"]);
/// ```
pub fn clean_and_tokenize(text: &str) -> (Vec<String>, Vec<String>) {
    let tokens: Vec<String> = word_punct()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect();

    let vocabulary: Vec<String> = tokens
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    tracing::trace!(
        tokens = tokens.len(),
        vocabulary = vocabulary.len(),
        "tokenized text"
    );

    (tokens, vocabulary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let (tokens, vocab) = clean_and_tokenize("");
        assert!(tokens.is_empty());
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        let (tokens, vocab) = clean_and_tokenize("  \t\n ");
        assert!(tokens.is_empty());
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_hello_world() {
        let (tokens, vocab) = clean_and_tokenize("Hello, world!");
        assert_eq!(tokens, vec!["hello", ",", "world", "!"]);
        assert_eq!(vocab, vec!["!", ",", "hello", "world"]);
    }

    #[test]
    fn test_punctuation_runs_stay_together() {
        let (tokens, _) = clean_and_tokenize("Wait... what?!");
        assert_eq!(tokens, vec!["wait", "...", "what", "?!"]);
    }

    #[test]
    fn test_apostrophes_split_words() {
        let (tokens, _) = clean_and_tokenize("I'm an INTJ's friend");
        assert_eq!(tokens, vec!["i", "'", "m", "an", "intj", "'", "s", "friend"]);
    }

    #[test]
    fn test_digits_and_underscore_are_word_chars() {
        let (tokens, _) = clean_and_tokenize("Room_42 costs $15.50");
        assert_eq!(tokens, vec!["room_42", "costs", "$", "15", ".", "50"]);
    }

    #[test]
    fn test_repetition_preserved_vocab_deduplicated() {
        let (tokens, vocab) = clean_and_tokenize("The cat. THE CAT. the Cat.");
        assert_eq!(tokens.len(), 9);
        assert_eq!(vocab, vec![".", "cat", "the"]);
    }

    #[test]
    fn test_unicode_words() {
        let (tokens, vocab) = clean_and_tokenize("Café ÜBER naïve");
        assert_eq!(tokens, vec!["café", "über", "naïve"]);
        assert_eq!(vocab, vec!["café", "naïve", "über"]);
    }

    #[test]
    fn test_combining_marks_stay_in_word() {
        let (tokens, _) = clean_and_tokenize("Cafe\u{301} ok");
        assert_eq!(tokens, vec!["cafe\u{301}", "ok"]);
    }

    #[test]
    fn test_vocab_is_sorted_dedup_of_tokens() {
        let samples = [
            "Introverts recharge alone; extraverts recharge with others.",
            "http://example.com/?q=INFP&x=1",
            "a b a c b a -- -- !!",
        ];
        for text in samples {
            let (tokens, vocab) = clean_and_tokenize(text);
            let mut expected = tokens.clone();
            expected.sort();
            expected.dedup();
            assert_eq!(vocab, expected);
            assert!(vocab.iter().all(|t| *t == t.to_lowercase()));
        }
    }
}
