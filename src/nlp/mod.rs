//! Text normalization helpers.

pub mod cleaning;

pub use cleaning::clean_and_tokenize;
