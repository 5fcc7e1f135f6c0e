//! Labeled text samples: MBTI-typed and Big Five-scored.

use serde::{Deserialize, Serialize};

use super::mbti::PersonalityType;
use super::text::{TextInput, TextSample};
use crate::config::SentencePolicy;
use crate::error::Result;

/// Associates text with an MBTI type.
///
/// See <https://en.wikipedia.org/wiki/Myers–Briggs_Type_Indicator>.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMbtiSample")]
pub struct MbtiSample {
    text: Vec<String>,
    mbti: PersonalityType,
}

#[derive(Deserialize)]
struct RawMbtiSample {
    text: TextInput,
    mbti: PersonalityType,
}

impl From<RawMbtiSample> for MbtiSample {
    fn from(raw: RawMbtiSample) -> Self {
        MbtiSample::new(raw.text, raw.mbti)
    }
}

impl MbtiSample {
    /// Build a sample, splitting raw text with the default sentence policy.
    pub fn new(text: impl Into<TextInput>, mbti: PersonalityType) -> Self {
        Self::with_policy(text, mbti, &SentencePolicy::default())
    }

    /// Build a sample, splitting raw text with an explicit sentence policy.
    pub fn with_policy(
        text: impl Into<TextInput>,
        mbti: PersonalityType,
        policy: &SentencePolicy,
    ) -> Self {
        MbtiSample {
            text: text.into().into_sentences(policy),
            mbti,
        }
    }

    /// Parse a sample from JSON such as `{"text": "...", "mbti": "intj"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The MBTI label.
    pub fn mbti(&self) -> PersonalityType {
        self.mbti
    }
}

impl TextSample for MbtiSample {
    fn text(&self) -> &[String] {
        &self.text
    }
}

/// A Big Five factor level: either simple presence or a measured score.
///
/// The two forms are never converted into one another.
///
/// Scores are not checked for finiteness. JSON has no NaN or infinity, so
/// `serde_json` writes a non-finite score as `null`, and `null` does not
/// deserialize back into a `TraitLevel`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraitLevel {
    Presence(bool),
    Score(f64),
}

impl TraitLevel {
    /// The flag, if this is a presence level.
    pub fn as_presence(&self) -> Option<bool> {
        match self {
            Self::Presence(p) => Some(*p),
            Self::Score(_) => None,
        }
    }

    /// The score, if this is a measured level.
    pub fn as_score(&self) -> Option<f64> {
        match self {
            Self::Score(s) => Some(*s),
            Self::Presence(_) => None,
        }
    }
}

impl From<bool> for TraitLevel {
    fn from(p: bool) -> Self {
        Self::Presence(p)
    }
}

impl From<f64> for TraitLevel {
    fn from(s: f64) -> Self {
        Self::Score(s)
    }
}

/// The five factors of the Big Five model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BigFiveTrait {
    Extraversion,
    Agreeableness,
    Openness,
    Conscientiousness,
    Neuroticism,
}

impl BigFiveTrait {
    /// Factors in (ext, agr, opn, con, neu) order.
    pub fn all() -> [BigFiveTrait; 5] {
        [
            Self::Extraversion,
            Self::Agreeableness,
            Self::Openness,
            Self::Conscientiousness,
            Self::Neuroticism,
        ]
    }

    /// Short field name used in serialized samples.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Extraversion => "ext",
            Self::Agreeableness => "agr",
            Self::Openness => "opn",
            Self::Conscientiousness => "con",
            Self::Neuroticism => "neu",
        }
    }
}

/// Holds text and factor levels w.r.t. the Big Five model.
///
/// See <https://en.wikipedia.org/wiki/Big_Five_personality_traits>.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBigFiveSample")]
pub struct BigFiveSample {
    text: Vec<String>,
    ext: TraitLevel,
    agr: TraitLevel,
    opn: TraitLevel,
    con: TraitLevel,
    neu: TraitLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    uid: Option<String>,
}

#[derive(Deserialize)]
struct RawBigFiveSample {
    text: TextInput,
    ext: TraitLevel,
    agr: TraitLevel,
    opn: TraitLevel,
    con: TraitLevel,
    neu: TraitLevel,
    #[serde(default)]
    uid: Option<String>,
}

impl From<RawBigFiveSample> for BigFiveSample {
    fn from(raw: RawBigFiveSample) -> Self {
        let sample = BigFiveSample::new(raw.text, raw.ext, raw.agr, raw.opn, raw.con, raw.neu);
        match raw.uid {
            Some(uid) => sample.with_uid(uid),
            None => sample,
        }
    }
}

impl BigFiveSample {
    /// Build a sample without a `uid`, splitting raw text with the default
    /// sentence policy. Trait arguments accept `bool` or `f64`.
    pub fn new(
        text: impl Into<TextInput>,
        ext: impl Into<TraitLevel>,
        agr: impl Into<TraitLevel>,
        opn: impl Into<TraitLevel>,
        con: impl Into<TraitLevel>,
        neu: impl Into<TraitLevel>,
    ) -> Self {
        Self::with_policy(
            text,
            [ext.into(), agr.into(), opn.into(), con.into(), neu.into()],
            &SentencePolicy::default(),
        )
    }

    /// Build a sample from levels in (ext, agr, opn, con, neu) order.
    pub fn with_policy(
        text: impl Into<TextInput>,
        levels: [TraitLevel; 5],
        policy: &SentencePolicy,
    ) -> Self {
        let [ext, agr, opn, con, neu] = levels;
        BigFiveSample {
            text: text.into().into_sentences(policy),
            ext,
            agr,
            opn,
            con,
            neu,
            uid: None,
        }
    }

    /// Attach a source-record identifier.
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Parse a sample from JSON with `text`, `ext`, `agr`, `opn`, `con`,
    /// `neu` and an optional `uid`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Extraversion level (`ext`).
    pub fn extraversion(&self) -> TraitLevel {
        self.ext
    }

    /// Agreeableness level (`agr`).
    pub fn agreeableness(&self) -> TraitLevel {
        self.agr
    }

    /// Openness-to-experience level (`opn`).
    pub fn openness(&self) -> TraitLevel {
        self.opn
    }

    /// Conscientiousness level (`con`).
    pub fn conscientiousness(&self) -> TraitLevel {
        self.con
    }

    /// Neuroticism level (`neu`).
    pub fn neuroticism(&self) -> TraitLevel {
        self.neu
    }

    /// Level of a single factor.
    pub fn get(&self, factor: BigFiveTrait) -> TraitLevel {
        match factor {
            BigFiveTrait::Extraversion => self.ext,
            BigFiveTrait::Agreeableness => self.agr,
            BigFiveTrait::Openness => self.opn,
            BigFiveTrait::Conscientiousness => self.con,
            BigFiveTrait::Neuroticism => self.neu,
        }
    }

    /// All five levels in (ext, agr, opn, con, neu) order.
    pub fn traits(&self) -> [TraitLevel; 5] {
        [self.ext, self.agr, self.opn, self.con, self.neu]
    }

    /// Source-record identifier, if one was attached.
    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }
}

impl TextSample for BigFiveSample {
    fn text(&self) -> &[String] {
        &self.text
    }
}
