// === PERSONALITY ASSESSMENT TYPES ===
// Questionnaire reference data, respondent answers, and the layered scores derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The eleven questionnaire domains.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonalityDomain {
    /// Extraversion
    Ex,
    /// Conscientiousness
    Co,
    /// Agreeableness
    Ag,
    /// Emotional stability (scored so that higher is calmer)
    Ne,
    /// Openness to experience
    Op,
    /// Machiavellianism
    Ma,
    /// Narcissism
    Na,
    /// Psychopathy
    Ps,
    /// Empathy
    Em,
    /// Work attitude
    Wr,
    /// Response validity (lie scale)
    Li,
}

impl PersonalityDomain {
    pub const ALL: [PersonalityDomain; 11] = [
        PersonalityDomain::Ex,
        PersonalityDomain::Co,
        PersonalityDomain::Ag,
        PersonalityDomain::Ne,
        PersonalityDomain::Op,
        PersonalityDomain::Ma,
        PersonalityDomain::Na,
        PersonalityDomain::Ps,
        PersonalityDomain::Em,
        PersonalityDomain::Wr,
        PersonalityDomain::Li,
    ];

    /// Two-letter code used in question ids and on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            PersonalityDomain::Ex => "EX",
            PersonalityDomain::Co => "CO",
            PersonalityDomain::Ag => "AG",
            PersonalityDomain::Ne => "NE",
            PersonalityDomain::Op => "OP",
            PersonalityDomain::Ma => "MA",
            PersonalityDomain::Na => "NA",
            PersonalityDomain::Ps => "PS",
            PersonalityDomain::Em => "EM",
            PersonalityDomain::Wr => "WR",
            PersonalityDomain::Li => "LI",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PersonalityDomain::Ex => "Extraversion",
            PersonalityDomain::Co => "Conscientiousness",
            PersonalityDomain::Ag => "Agreeableness",
            PersonalityDomain::Ne => "Emotional Stability",
            PersonalityDomain::Op => "Openness",
            PersonalityDomain::Ma => "Machiavellianism",
            PersonalityDomain::Na => "Narcissism",
            PersonalityDomain::Ps => "Psychopathy",
            PersonalityDomain::Em => "Empathy",
            PersonalityDomain::Wr => "Work Attitude",
            PersonalityDomain::Li => "Response Validity",
        }
    }

    pub fn category(&self) -> DomainCategory {
        match self {
            PersonalityDomain::Ex
            | PersonalityDomain::Co
            | PersonalityDomain::Ag
            | PersonalityDomain::Ne
            | PersonalityDomain::Op => DomainCategory::BigFive,
            PersonalityDomain::Ma | PersonalityDomain::Na | PersonalityDomain::Ps => {
                DomainCategory::DarkTriad
            }
            PersonalityDomain::Em | PersonalityDomain::Wr => DomainCategory::Additional,
            PersonalityDomain::Li => DomainCategory::Validity,
        }
    }
}

impl fmt::Display for PersonalityDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Grouping of domains for reporting.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DomainCategory {
    #[serde(rename = "bigfive")]
    BigFive,
    #[serde(rename = "darktriad")]
    DarkTriad,
    Additional,
    Validity,
}

impl DomainCategory {
    pub const ALL: [DomainCategory; 4] = [
        DomainCategory::BigFive,
        DomainCategory::DarkTriad,
        DomainCategory::Additional,
        DomainCategory::Validity,
    ];
}

/// Scoring direction of a question.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Keying {
    /// Agreement scores toward the high end of the trait
    Plus,
    /// Reverse-keyed: agreement scores toward the low end
    Minus,
}

/// A value on the fixed 1..=5 agreement scale.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnswerValue(u8);

impl AnswerValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const MIDPOINT: u8 = 3;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Reflects the value across the scale midpoint (`6 - v`).
    pub fn reversed(self) -> Self {
        Self(Self::MIN + Self::MAX - self.0)
    }

    /// The value as scored under the given keying.
    pub fn keyed(self, keying: Keying) -> Self {
        match keying {
            Keying::Plus => self,
            Keying::Minus => self.reversed(),
        }
    }

    pub fn is_extreme(self) -> bool {
        self.0 == Self::MIN || self.0 == Self::MAX
    }

    pub fn is_midpoint(self) -> bool {
        self.0 == Self::MIDPOINT
    }
}

impl TryFrom<u8> for AnswerValue {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        AnswerValue::new(value).ok_or_else(|| {
            format!(
                "answer value {} outside scale {}..={}",
                value,
                AnswerValue::MIN,
                AnswerValue::MAX
            )
        })
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> Self {
        value.0
    }
}

/// Questionnaire item (immutable reference data).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    /// "EX-1" style identifier
    pub id: String,
    pub text: String,
    pub domain: PersonalityDomain,
    pub category: DomainCategory,
    pub keyed: Keying,
    /// Display order
    pub order: u32,
}

/// A single respondent answer to one question.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityAnswer {
    pub question_id: String,
    pub value: AnswerValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<f64>,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl PersonalityAnswer {
    pub fn new(question_id: impl Into<String>, value: AnswerValue) -> Self {
        Self {
            question_id: question_id.into(),
            value,
            response_time_ms: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_response_time(mut self, response_time_ms: f64) -> Self {
        self.response_time_ms = Some(response_time_ms);
        self
    }
}

/// Five-band categorical reading of a T-score, ordered low to high.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TendencyLevel {
    /// T < 35
    NotCharacteristic,
    /// 35 <= T < 45
    LessCharacteristic,
    /// 45 <= T < 55
    Moderate,
    /// 55 <= T < 65
    Characteristic,
    /// T >= 65
    VeryCharacteristic,
}

impl TendencyLevel {
    pub const ALL: [TendencyLevel; 5] = [
        TendencyLevel::NotCharacteristic,
        TendencyLevel::LessCharacteristic,
        TendencyLevel::Moderate,
        TendencyLevel::Characteristic,
        TendencyLevel::VeryCharacteristic,
    ];

    pub fn is_extreme(&self) -> bool {
        matches!(
            self,
            TendencyLevel::VeryCharacteristic | TendencyLevel::NotCharacteristic
        )
    }
}

impl fmt::Display for TendencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TendencyLevel::NotCharacteristic => write!(f, "not_characteristic"),
            TendencyLevel::LessCharacteristic => write!(f, "less_characteristic"),
            TendencyLevel::Moderate => write!(f, "moderate"),
            TendencyLevel::Characteristic => write!(f, "characteristic"),
            TendencyLevel::VeryCharacteristic => write!(f, "very_characteristic"),
        }
    }
}

/// 95% band around the raw mean.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    pub confidence: f64,
}

/// Per-domain score at every layer of the transformation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MultiLayerScore {
    /// Mean item value after reverse keying, 1.0 - 5.0
    pub raw_score: f64,
    pub z_score: f64,
    /// Clamped to 20..=80
    pub t_score: u8,
    /// Clamped to 1..=99
    pub percentile: u8,
    pub tendency_level: TendencyLevel,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_interval: Option<ConfidenceInterval>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomainScore {
    pub domain: PersonalityDomain,
    pub score: MultiLayerScore,
    /// Number of answered items that contributed
    pub item_count: usize,
}

/// Calibration-sample statistics for one domain.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct NormDistribution {
    pub mean: f64,
    pub sd: f64,
    pub n: u32,
}

// === RELIABILITY ===

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReliabilityStatus {
    High,
    Moderate,
    Low,
}

impl fmt::Display for ReliabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReliabilityStatus::High => write!(f, "high"),
            ReliabilityStatus::Moderate => write!(f, "moderate"),
            ReliabilityStatus::Low => write!(f, "low"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocialDesirability {
    /// Discounted reliability score before clamping
    pub score: u32,
    pub flag: ReliabilityStatus,
    pub reverse_item_consistency: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTimeStats {
    pub average: f64,
    pub variance: f64,
    pub suspiciously_fast: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePattern {
    pub straightlining: bool,
    /// Percent of answers at either scale extreme
    pub extreme_responding: u8,
    /// Percent of answers at the scale midpoint
    pub midpoint_responding: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<ResponseTimeStats>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReliabilityMetrics {
    pub social_desirability: SocialDesirability,
    pub response_pattern: ResponsePattern,
    /// 0 - 100
    pub overall_reliability: u8,
    pub interpretation_note: String,
}
