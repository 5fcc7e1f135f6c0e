use thiserror::Error;

/// Errors surfaced by the normalizer, the personality model and config loading.
#[derive(Error, Debug)]
pub enum PsyError {
    #[error("no personality type matches code: {0:?}")]
    UnknownPersonalityType(String),

    #[error("personality ordinal out of range: {0} (expected 0-15)")]
    InvalidOrdinal(u8),

    #[error("invalid pole letter {letter:?} at position {position}")]
    InvalidPole { letter: char, position: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PsyError>;
