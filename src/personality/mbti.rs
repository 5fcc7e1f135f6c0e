//! MBTI personality types with their 4-bit ordinal backing.
//!
//! Each of the 16 types is one combination of four binary dimensions. The
//! ordinal packs them high bit first, with the first pole of every dimension
//! encoded as `0`:
//!
//! | bit | dimension | 0 | 1 |
//! |-----|-----------|---|---|
//! | 3   | energy focus | E | I |
//! | 2   | perception   | S | N |
//! | 1   | judgement    | T | F |
//! | 0   | lifestyle    | J | P |
//!
//! `ESTJ` is therefore `0b0000` and `INFP` is `0b1111`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{PsyError, Result};

/// One of the 16 MBTI personality types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PersonalityType {
    Estj = 0b0000,
    Estp = 0b0001,
    Esfj = 0b0010,
    Esfp = 0b0011,
    Entj = 0b0100,
    Entp = 0b0101,
    Enfj = 0b0110,
    Enfp = 0b0111,
    Istj = 0b1000,
    Istp = 0b1001,
    Isfj = 0b1010,
    Isfp = 0b1011,
    Intj = 0b1100,
    Intp = 0b1101,
    Infj = 0b1110,
    Infp = 0b1111,
}

/// One of the four binary axes a personality type is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Extraversion (E) / Introversion (I)
    EnergyFocus,
    /// Sensing (S) / iNtuition (N)
    Perception,
    /// Thinking (T) / Feeling (F)
    Judgement,
    /// Judging (J) / Perceiving (P)
    Lifestyle,
}

impl Dimension {
    /// Dimensions in code-letter order.
    pub fn all() -> [Dimension; 4] {
        [
            Self::EnergyFocus,
            Self::Perception,
            Self::Judgement,
            Self::Lifestyle,
        ]
    }

    /// The two pole letters, first pole (bit `0`) first.
    pub fn poles(&self) -> (char, char) {
        match self {
            Self::EnergyFocus => ('E', 'I'),
            Self::Perception => ('S', 'N'),
            Self::Judgement => ('T', 'F'),
            Self::Lifestyle => ('J', 'P'),
        }
    }

    #[inline]
    fn bit(&self) -> u8 {
        match self {
            Self::EnergyFocus => 3,
            Self::Perception => 2,
            Self::Judgement => 1,
            Self::Lifestyle => 0,
        }
    }

    #[inline]
    fn position(&self) -> usize {
        3 - self.bit() as usize
    }
}

const ALL: [PersonalityType; 16] = [
    PersonalityType::Estj,
    PersonalityType::Estp,
    PersonalityType::Esfj,
    PersonalityType::Esfp,
    PersonalityType::Entj,
    PersonalityType::Entp,
    PersonalityType::Enfj,
    PersonalityType::Enfp,
    PersonalityType::Istj,
    PersonalityType::Istp,
    PersonalityType::Isfj,
    PersonalityType::Isfp,
    PersonalityType::Intj,
    PersonalityType::Intp,
    PersonalityType::Infj,
    PersonalityType::Infp,
];

static CODE_TABLE: OnceLock<HashMap<&'static str, PersonalityType>> = OnceLock::new();

fn code_table() -> &'static HashMap<&'static str, PersonalityType> {
    CODE_TABLE.get_or_init(|| ALL.iter().map(|&t| (t.code(), t)).collect())
}

impl PersonalityType {
    /// All 16 types in ordinal order.
    #[inline]
    pub fn all() -> [PersonalityType; 16] {
        ALL
    }

    /// Canonical uppercase code, e.g. `"INTJ"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Estj => "ESTJ",
            Self::Estp => "ESTP",
            Self::Esfj => "ESFJ",
            Self::Esfp => "ESFP",
            Self::Entj => "ENTJ",
            Self::Entp => "ENTP",
            Self::Enfj => "ENFJ",
            Self::Enfp => "ENFP",
            Self::Istj => "ISTJ",
            Self::Istp => "ISTP",
            Self::Isfj => "ISFJ",
            Self::Isfp => "ISFP",
            Self::Intj => "INTJ",
            Self::Intp => "INTP",
            Self::Infj => "INFJ",
            Self::Infp => "INFP",
        }
    }

    /// Lowercase alias accepted as equivalent input, e.g. `"intj"`.
    pub fn alias(&self) -> &'static str {
        match self {
            Self::Estj => "estj",
            Self::Estp => "estp",
            Self::Esfj => "esfj",
            Self::Esfp => "esfp",
            Self::Entj => "entj",
            Self::Entp => "entp",
            Self::Enfj => "enfj",
            Self::Enfp => "enfp",
            Self::Istj => "istj",
            Self::Istp => "istp",
            Self::Isfj => "isfj",
            Self::Isfp => "isfp",
            Self::Intj => "intj",
            Self::Intp => "intp",
            Self::Infj => "infj",
            Self::Infp => "infp",
        }
    }

    /// Reference 4-bit ordinal (0-15).
    #[inline]
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Inverse of [`ordinal`](Self::ordinal).
    pub fn from_ordinal(ordinal: u8) -> Result<Self> {
        ALL.get(ordinal as usize)
            .copied()
            .ok_or(PsyError::InvalidOrdinal(ordinal))
    }

    /// Resolve a code case-insensitively. Only ASCII letters are case-folded,
    /// so look-alike letters such as the dotless `ı` never match.
    ///
    /// Fails with [`PsyError::UnknownPersonalityType`] when the uppercased input
    /// is not one of the 16 canonical codes.
    pub fn resolve(code: &str) -> Result<Self> {
        let upper = code.to_ascii_uppercase();
        match code_table().get(upper.as_str()) {
            Some(&t) => Ok(t),
            None => {
                tracing::debug!(code, "rejected personality code");
                Err(PsyError::UnknownPersonalityType(code.to_string()))
            }
        }
    }

    /// Build a type from its four pole letters in E/I, S/N, T/F, J/P order.
    /// Letters are matched case-insensitively.
    pub fn from_poles(letters: [char; 4]) -> Result<Self> {
        let mut ordinal = 0u8;
        for (dim, letter) in Dimension::all().into_iter().zip(letters) {
            let (first, second) = dim.poles();
            let upper = letter.to_ascii_uppercase();
            if upper == second {
                ordinal |= 1 << dim.bit();
            } else if upper != first {
                return Err(PsyError::InvalidPole {
                    letter,
                    position: dim.position(),
                });
            }
        }
        Self::from_ordinal(ordinal)
    }

    /// True when this type sits on the second pole (I, N, F or P) of `dim`.
    #[inline]
    pub fn is_second_pole(&self, dim: Dimension) -> bool {
        self.ordinal() & (1 << dim.bit()) != 0
    }

    /// The letter this type carries for `dim`.
    pub fn pole(&self, dim: Dimension) -> char {
        let (first, second) = dim.poles();
        if self.is_second_pole(dim) {
            second
        } else {
            first
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PersonalityType {
    type Err = PsyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl TryFrom<&str> for PersonalityType {
    type Error = PsyError;

    fn try_from(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl Serialize for PersonalityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for PersonalityType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::resolve(&code).map_err(serde::de::Error::custom)
    }
}
