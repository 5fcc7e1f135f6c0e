//! Sentence-unit text shared by every sample record.

use serde::{Deserialize, Serialize};

use crate::config::SentencePolicy;

/// Text supplied when building a sample: either already split into
/// sentence units, or a single string still to be split.
///
/// Deserializes from a JSON/TOML string or a list of strings; anything else
/// is a type error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    Sentences(Vec<String>),
    Raw(String),
}

impl TextInput {
    /// Resolve into sentence units. Pre-split input is kept as-is.
    pub fn into_sentences(self, policy: &SentencePolicy) -> Vec<String> {
        match self {
            Self::Sentences(sentences) => sentences,
            Self::Raw(raw) => split_sentences(&raw, policy),
        }
    }
}

impl From<String> for TextInput {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<&str> for TextInput {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<Vec<String>> for TextInput {
    fn from(sentences: Vec<String>) -> Self {
        Self::Sentences(sentences)
    }
}

impl From<Vec<&str>> for TextInput {
    fn from(sentences: Vec<&str>) -> Self {
        Self::Sentences(sentences.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TextInput {
    fn from(sentences: [&str; N]) -> Self {
        Self::Sentences(sentences.into_iter().map(str::to_string).collect())
    }
}

/// Split `raw` on the policy terminator into sentence units.
pub fn split_sentences(raw: &str, policy: &SentencePolicy) -> Vec<String> {
    let sentences: Vec<String> = raw
        .split(policy.terminator)
        .map(|fragment| if policy.trim { fragment.trim() } else { fragment })
        .filter(|fragment| !(policy.drop_empty && fragment.is_empty()))
        .map(str::to_string)
        .collect();

    tracing::trace!(fragments = sentences.len(), "split raw text");
    sentences
}

/// Records that carry a body of sentence-unit text.
pub trait TextSample {
    /// Sentence units, in order.
    fn text(&self) -> &[String];

    /// All sentence units joined back with single spaces, e.g. to feed
    /// [`clean_and_tokenize`](crate::clean_and_tokenize).
    fn joined_text(&self) -> String {
        self.text().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_and_drops_empty() {
        let policy = SentencePolicy::default();
        assert_eq!(
            split_sentences("A sentence. Another one.", &policy),
            vec!["A sentence", "Another one"]
        );
    }

    #[test]
    fn test_split_keeps_interior_whitespace() {
        let policy = SentencePolicy::default();
        assert_eq!(
            split_sentences("  two   spaces inside .", &policy),
            vec!["two   spaces inside"]
        );
    }

    #[test]
    fn test_split_empty_and_terminators_only() {
        let policy = SentencePolicy::default();
        assert!(split_sentences("", &policy).is_empty());
        assert!(split_sentences(" . .. ", &policy).is_empty());
    }

    #[test]
    fn test_split_without_terminator() {
        let policy = SentencePolicy::default();
        assert_eq!(split_sentences("no terminator here", &policy), vec!["no terminator here"]);
    }

    #[test]
    fn test_split_untrimmed_keeps_empty() {
        let policy = SentencePolicy {
            trim: false,
            drop_empty: false,
            ..SentencePolicy::default()
        };
        assert_eq!(
            split_sentences("A sentence. Another one.", &policy),
            vec!["A sentence", " Another one", ""]
        );
    }

    #[test]
    fn test_split_custom_terminator() {
        let policy = SentencePolicy {
            terminator: '!',
            ..SentencePolicy::default()
        };
        assert_eq!(
            split_sentences("Wow! So loud. Yes!", &policy),
            vec!["Wow", "So loud. Yes"]
        );
    }

    #[test]
    fn test_presplit_input_is_untouched() {
        let input = TextInput::from(vec!["  kept as-is. ", ""]);
        assert_eq!(
            input.into_sentences(&SentencePolicy::default()),
            vec!["  kept as-is. ", ""]
        );
    }

    #[test]
    fn test_text_input_deserialization() {
        let raw: TextInput = serde_json::from_str("\"One. Two.\"").unwrap();
        assert_eq!(raw, TextInput::Raw("One. Two.".to_string()));

        let list: TextInput = serde_json::from_str("[\"One\", \"Two\"]").unwrap();
        assert_eq!(list, TextInput::from(["One", "Two"]));

        assert!(serde_json::from_str::<TextInput>("42").is_err());
        assert!(serde_json::from_str::<TextInput>("[1, 2]").is_err());
        assert!(serde_json::from_str::<TextInput>("null").is_err());
    }
}
