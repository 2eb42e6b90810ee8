//! Cognitive scoring for two distinct test designs.
//!
//! [`TrialBatteryScorer`] reads continuous reaction-time streams (n-back,
//! Stroop, simple RT); [`ItemBankScorer`] counts correct answers on the fixed
//! 16-item reasoning battery. Both produce a [`CognitiveResult`], tagged with
//! the design that produced it.

pub mod descriptions;
pub mod item_bank;
pub mod items;
pub mod stimulus;
pub mod trial;

use shared_types::{CognitiveLevel, CognitiveResult, CognitiveTrial, ItemAnswer};

pub use item_bank::ItemBankScorer;
pub use trial::TrialBatteryScorer;

/// A scoring strategy for one cognitive test design.
pub trait CognitiveScorer {
    type Session: ?Sized;

    fn score(&self, session: &Self::Session, total_time_ms: Option<f64>) -> CognitiveResult;
}

/// Recorded answers of one cognitive session, in either design.
#[derive(Debug, Clone)]
pub enum CognitiveSessionInput {
    /// Trials of any task; they are partitioned by their task tag.
    Trials(Vec<CognitiveTrial>),
    ItemBank(Vec<ItemAnswer>),
}

/// Dispatch to the scorer matching the session's design.
pub fn calculate_cognitive_result(
    input: &CognitiveSessionInput,
    total_time_ms: Option<f64>,
) -> CognitiveResult {
    let result = match input {
        CognitiveSessionInput::Trials(trials) => TrialBatteryScorer.score(trials, total_time_ms),
        CognitiveSessionInput::ItemBank(answers) => ItemBankScorer.score(answers, total_time_ms),
    };
    platform::record_counter("assessment_cognitive_scored_total", 1);
    result
}

/// Five bands cut at percentiles 2, 16, 84 and 98 (inclusive lower bounds).
pub fn percentile_to_level(percentile: u8) -> CognitiveLevel {
    match percentile {
        98.. => CognitiveLevel::SignificantlyAboveAverage,
        84..=97 => CognitiveLevel::AboveAverage,
        16..=83 => CognitiveLevel::Average,
        2..=15 => CognitiveLevel::BelowAverage,
        _ => CognitiveLevel::SignificantlyBelowAverage,
    }
}

/// IQ-style scale bounds shared by both designs.
pub const STANDARD_SCORE_MIN: f64 = 55.0;
pub const STANDARD_SCORE_MAX: f64 = 145.0;

pub(crate) fn clamp_standard_score(score: f64) -> u8 {
    score.round().clamp(STANDARD_SCORE_MIN, STANDARD_SCORE_MAX) as u8
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Stats {
    pub mean: f64,
    pub sd: f64,
}

/// Mean and sample SD (n - 1). Empty input gives 0/0; a single value has SD 0.
pub(crate) fn stats(values: &[f64]) -> Stats {
    if values.is_empty() {
        return Stats { mean: 0.0, sd: 0.0 };
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if values.len() < 2 {
        return Stats { mean, sd: 0.0 };
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Stats {
        mean,
        sd: variance.sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_cut_points() {
        assert_eq!(percentile_to_level(99), CognitiveLevel::SignificantlyAboveAverage);
        assert_eq!(percentile_to_level(98), CognitiveLevel::SignificantlyAboveAverage);
        assert_eq!(percentile_to_level(97), CognitiveLevel::AboveAverage);
        assert_eq!(percentile_to_level(84), CognitiveLevel::AboveAverage);
        assert_eq!(percentile_to_level(83), CognitiveLevel::Average);
        assert_eq!(percentile_to_level(16), CognitiveLevel::Average);
        assert_eq!(percentile_to_level(15), CognitiveLevel::BelowAverage);
        assert_eq!(percentile_to_level(2), CognitiveLevel::BelowAverage);
        assert_eq!(percentile_to_level(1), CognitiveLevel::SignificantlyBelowAverage);
    }

    #[test]
    fn sample_statistics() {
        assert_eq!(stats(&[]), Stats { mean: 0.0, sd: 0.0 });
        assert_eq!(stats(&[300.0]), Stats { mean: 300.0, sd: 0.0 });
        let s = stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(s.mean, 5.0);
        // sample variance 32 / 7
        assert!((s.sd - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn standard_score_clamps() {
        assert_eq!(clamp_standard_score(30.0), 55);
        assert_eq!(clamp_standard_score(100.4), 100);
        assert_eq!(clamp_standard_score(170.0), 145);
    }

    #[test]
    fn dispatch_tags_the_result() {
        let trials = calculate_cognitive_result(&CognitiveSessionInput::Trials(vec![]), None);
        assert!(matches!(trials, CognitiveResult::TrialBattery(_)));
        let items = calculate_cognitive_result(&CognitiveSessionInput::ItemBank(vec![]), Some(0.0));
        assert!(matches!(items, CognitiveResult::ItemBank(_)));
    }
}
