//! Fixed calibration constants.
//!
//! Personality norms can be overridden per domain from configuration; the
//! cognitive norms are properties of the task paradigms and stay fixed.

use std::collections::BTreeMap;

use shared_types::{NormDistribution, PersonalityDomain};

pub type NormTable = BTreeMap<PersonalityDomain, NormDistribution>;

const CALIBRATION_N: u32 = 1000;

pub fn default_personality_norm(domain: PersonalityDomain) -> NormDistribution {
    let (mean, sd) = match domain {
        PersonalityDomain::Ex => (3.2, 0.8),
        PersonalityDomain::Co => (3.5, 0.7),
        PersonalityDomain::Ag => (3.6, 0.6),
        PersonalityDomain::Ne => (3.0, 0.9),
        PersonalityDomain::Op => (3.4, 0.7),
        PersonalityDomain::Ma => (2.8, 0.9),
        PersonalityDomain::Na => (3.1, 0.8),
        PersonalityDomain::Ps => (2.9, 0.8),
        PersonalityDomain::Em => (3.5, 0.7),
        PersonalityDomain::Wr => (3.4, 0.6),
        PersonalityDomain::Li => (3.5, 0.7),
    };
    NormDistribution {
        mean,
        sd,
        n: CALIBRATION_N,
    }
}

pub fn default_norm_table() -> NormTable {
    PersonalityDomain::ALL
        .iter()
        .map(|domain| (*domain, default_personality_norm(*domain)))
        .collect()
}

/// A norm can standardise scores only with a finite mean, a finite positive
/// SD and a non-empty calibration sample.
pub fn is_usable_norm(norm: &NormDistribution) -> bool {
    norm.mean.is_finite() && norm.sd.is_finite() && norm.sd > 0.0 && norm.n > 0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanSd {
    pub mean: f64,
    pub sd: f64,
}

impl MeanSd {
    /// z of `value`, with the sign flipped so that lower-is-better measures
    /// (latencies) come out positive when faster than the norm.
    pub fn inverted_z(&self, value: f64) -> f64 {
        (self.mean - value) / self.sd
    }

    pub fn z(&self, value: f64) -> f64 {
        (value - self.mean) / self.sd
    }
}

/// Norms of a choice-reaction task scored on accuracy and latency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChoiceTaskNorms {
    pub accuracy: MeanSd,
    pub rt_ms: MeanSd,
}

/// 2-back, adult sample.
pub const N_BACK: ChoiceTaskNorms = ChoiceTaskNorms {
    accuracy: MeanSd { mean: 0.75, sd: 0.12 },
    rt_ms: MeanSd { mean: 650.0, sd: 150.0 },
};

pub const STROOP: ChoiceTaskNorms = ChoiceTaskNorms {
    accuracy: MeanSd { mean: 0.85, sd: 0.10 },
    rt_ms: MeanSd { mean: 750.0, sd: 120.0 },
};

/// Incongruent minus congruent latency.
pub const STROOP_INTERFERENCE_MS: MeanSd = MeanSd { mean: 100.0, sd: 50.0 };

pub const SIMPLE_RT_MS: MeanSd = MeanSd { mean: 280.0, sd: 40.0 };

/// Within-respondent latency SD.
pub const SIMPLE_RT_VARIABILITY_MS: MeanSd = MeanSd { mean: 50.0, sd: 20.0 };

/// Raw correct count on the 16-item bank.
pub const ITEM_BANK_RAW: MeanSd = MeanSd { mean: 8.0, sd: 3.0 };

/// Percentile for each possible raw score 0..=16 of the item bank.
pub const ITEM_BANK_PERCENTILES: [u8; 17] = [1, 1, 2, 5, 9, 16, 25, 37, 50, 63, 75, 84, 91, 95, 98, 99, 99];
