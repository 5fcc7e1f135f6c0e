//! Psycial data: text normalization and personality-labeled samples.
//!
//! Two independent pieces:
//!
//! - **Text normalization** ([`nlp`]): [`clean_and_tokenize`] turns raw text
//!   into lowercased word/punctuation tokens plus a sorted vocabulary.
//! - **Personality data model** ([`personality`]): the closed set of MBTI
//!   [`PersonalityType`]s and the [`MbtiSample`] / [`BigFiveSample`] records.
//!
//! ```
//! use psycial_data::{MbtiSample, PersonalityType, TextSample};
//!
//! let mbti: PersonalityType = "intj".parse()?;
//! let sample = MbtiSample::new("A sentence. Another one.", mbti);
//! assert_eq!(sample.text(), ["A sentence", "Another one"]);
//! # Ok::<(), psycial_data::PsyError>(())
//! ```

pub mod config;
pub mod error;
pub mod nlp;
pub mod personality;

pub use config::{Config, SentencePolicy};
pub use error::{PsyError, Result};
pub use nlp::clean_and_tokenize;
pub use personality::{
    split_sentences, BigFiveSample, BigFiveTrait, Dimension, MbtiSample, PersonalityType,
    TextInput, TextSample, TraitLevel,
};
