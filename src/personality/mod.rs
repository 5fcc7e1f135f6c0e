//! Personality data model: MBTI types and labeled text samples.
//!
//! - [`PersonalityType`]: the 16 MBTI types, resolved case-insensitively from
//!   their 4-letter code and backed by a 4-bit ordinal
//! - [`MbtiSample`]: text paired with one MBTI type
//! - [`BigFiveSample`]: text paired with five independent factor levels
//!
//! Both sample records implement [`TextSample`] and split a single raw string
//! into sentence units on construction.

pub mod mbti;
pub mod samples;
pub mod text;

pub use mbti::{Dimension, PersonalityType};
pub use samples::{BigFiveSample, BigFiveTrait, MbtiSample, TraitLevel};
pub use text::{split_sentences, TextInput, TextSample};
