//! Scoring of the fixed 16-item reasoning battery.

use std::collections::BTreeMap;

use tracing::info;

use shared_types::{
    CognitiveResult, ItemAnswer, ItemBankRawScores, ItemBankResult, ItemBankTiming, ItemType,
    ItemTypeBreakdown, NormalizedScores,
};

use super::{clamp_standard_score, percentile_to_level, CognitiveScorer};
use crate::normal::z_to_percentile;
use crate::norms::{ITEM_BANK_PERCENTILES, ITEM_BANK_RAW};

/// Distance from the overall correct rate that marks a strength or a
/// development area.
pub const AREA_MARGIN: f64 = 0.10;

#[derive(Debug, Clone, Copy, Default)]
pub struct ItemBankScorer;

impl CognitiveScorer for ItemBankScorer {
    type Session = [ItemAnswer];

    fn score(&self, session: &[ItemAnswer], total_time_ms: Option<f64>) -> CognitiveResult {
        CognitiveResult::ItemBank(score_item_bank(session, total_time_ms))
    }
}

/// Percentile for a raw correct count: the literal table where it covers the
/// count, the normal estimate beyond it.
pub fn raw_to_percentile(raw: u32) -> u8 {
    match ITEM_BANK_PERCENTILES.get(raw as usize) {
        Some(p) => *p,
        None => z_to_percentile(ITEM_BANK_RAW.z(raw as f64)),
    }
}

pub fn raw_to_standard_score(raw: u32) -> u8 {
    clamp_standard_score(ITEM_BANK_RAW.z(raw as f64) * 15.0 + 100.0)
}

pub fn score_item_bank(answers: &[ItemAnswer], total_time_ms: Option<f64>) -> ItemBankResult {
    let type_breakdown = type_breakdown(answers);
    let correct_of = |item_type: ItemType| type_breakdown.get(&item_type).map_or(0, |b| b.correct);

    let total = answers.iter().filter(|a| a.is_correct).count() as u32;
    let raw_scores = ItemBankRawScores {
        matrix_reasoning: correct_of(ItemType::MatrixReasoning),
        letter_number_series: correct_of(ItemType::LetterNumberSeries),
        verbal_reasoning: correct_of(ItemType::VerbalReasoning),
        rotation_3d: correct_of(ItemType::Rotation3d),
        total,
    };

    let percentile_rank = raw_to_percentile(total);
    let normalized_scores = NormalizedScores {
        percentile_rank,
        standard_score: raw_to_standard_score(total),
        relative_position: percentile_to_level(percentile_rank),
    };

    let overall_rate = if answers.is_empty() {
        0.0
    } else {
        total as f64 / answers.len() as f64
    };
    let (strength_areas, development_areas) = areas(&type_breakdown, overall_rate);

    info!(
        total,
        answered = answers.len(),
        percentile = percentile_rank,
        "item bank scored"
    );

    ItemBankResult {
        raw_scores,
        total_items: answers.len() as u32,
        normalized_scores,
        type_breakdown,
        strength_areas,
        development_areas,
        timing_data: timing(answers, total_time_ms),
    }
}

/// Every item type appears, with a zero breakdown when it was not answered.
fn type_breakdown(answers: &[ItemAnswer]) -> BTreeMap<ItemType, ItemTypeBreakdown> {
    ItemType::ALL
        .into_iter()
        .map(|item_type| {
            let of_type: Vec<&ItemAnswer> =
                answers.iter().filter(|a| a.item_type == item_type).collect();
            let correct = of_type.iter().filter(|a| a.is_correct).count() as u32;
            let total = of_type.len() as u32;
            let rate = if total == 0 {
                0.0
            } else {
                correct as f64 / total as f64
            };
            (item_type, ItemTypeBreakdown { correct, total, rate })
        })
        .collect()
}

fn areas(
    breakdown: &BTreeMap<ItemType, ItemTypeBreakdown>,
    overall_rate: f64,
) -> (Vec<ItemType>, Vec<ItemType>) {
    let mut strengths = Vec::new();
    let mut development = Vec::new();
    for (item_type, b) in breakdown.iter().filter(|(_, b)| b.total > 0) {
        if b.rate > overall_rate + AREA_MARGIN {
            strengths.push(*item_type);
        } else if b.rate < overall_rate - AREA_MARGIN {
            development.push(*item_type);
        }
    }
    (strengths, development)
}

fn timing(answers: &[ItemAnswer], total_time_ms: Option<f64>) -> ItemBankTiming {
    let sum: f64 = answers.iter().map(|a| a.response_time_ms).sum();
    let average_time_per_item_ms = if answers.is_empty() {
        0.0
    } else {
        (sum / answers.len() as f64).round()
    };
    let time_by_type = ItemType::ALL
        .into_iter()
        .map(|item_type| {
            let spent: f64 = answers
                .iter()
                .filter(|a| a.item_type == item_type)
                .map(|a| a.response_time_ms)
                .sum();
            (item_type, spent)
        })
        .collect();

    ItemBankTiming {
        total_time_ms,
        average_time_per_item_ms,
        time_by_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared_types::CognitiveLevel;

    fn answer(id: &str, item_type: ItemType, is_correct: bool, rt: f64) -> ItemAnswer {
        ItemAnswer {
            item_id: id.to_string(),
            item_type,
            selected_answer: Some("A".to_string()),
            is_correct,
            response_time_ms: rt,
            timestamp: Utc::now(),
        }
    }

    /// Four answers per type, with the given number correct in each.
    fn session(correct_per_type: [usize; 4]) -> Vec<ItemAnswer> {
        ItemType::ALL
            .into_iter()
            .zip(correct_per_type)
            .flat_map(|(item_type, correct)| {
                (0..4).map(move |i| answer(&format!("{item_type}-{i}"), item_type, i < correct, 10_000.0))
            })
            .collect()
    }

    #[test]
    fn table_lookup_and_normal_fallback() {
        assert_eq!(raw_to_percentile(0), 1);
        assert_eq!(raw_to_percentile(8), 50);
        assert_eq!(raw_to_percentile(11), 84);
        assert_eq!(raw_to_percentile(16), 99);
        // z = 3, beyond the table
        assert_eq!(raw_to_percentile(17), 99);
    }

    #[test]
    fn standard_score_follows_bank_norm() {
        assert_eq!(raw_to_standard_score(8), 100);
        assert_eq!(raw_to_standard_score(11), 115);
        assert_eq!(raw_to_standard_score(5), 85);
        // z = -8/3 gives 60
        assert_eq!(raw_to_standard_score(0), 60);
        assert_eq!(raw_to_standard_score(16), 140);
    }

    #[test]
    fn half_correct_is_average() {
        let result = score_item_bank(&session([2, 2, 2, 2]), Some(200_000.0));
        assert_eq!(result.raw_scores.total, 8);
        assert_eq!(result.total_items, 16);
        assert_eq!(result.normalized_scores.percentile_rank, 50);
        assert_eq!(result.normalized_scores.standard_score, 100);
        assert_eq!(result.normalized_scores.relative_position, CognitiveLevel::Average);
        assert!(result.strength_areas.is_empty());
        assert!(result.development_areas.is_empty());
        assert_eq!(result.timing_data.total_time_ms, Some(200_000.0));
        assert_eq!(result.timing_data.average_time_per_item_ms, 10_000.0);
        assert_eq!(result.timing_data.time_by_type[&ItemType::Rotation3d], 40_000.0);
    }

    #[test]
    fn areas_compare_against_overall_rate() {
        // overall 8 / 16 = 0.5
        let result = score_item_bank(&session([4, 2, 2, 0]), None);
        assert_eq!(result.raw_scores.matrix_reasoning, 4);
        assert_eq!(result.raw_scores.rotation_3d, 0);
        assert_eq!(result.strength_areas, vec![ItemType::MatrixReasoning]);
        assert_eq!(result.development_areas, vec![ItemType::Rotation3d]);
        assert_eq!(result.type_breakdown[&ItemType::LetterNumberSeries].rate, 0.5);
    }

    #[test]
    fn unanswered_types_are_not_areas() {
        let answers = vec![
            answer("MR-1", ItemType::MatrixReasoning, true, 5000.0),
            answer("LN-1", ItemType::LetterNumberSeries, false, 5000.0),
        ];
        let result = score_item_bank(&answers, None);
        assert_eq!(result.type_breakdown.len(), 4);
        assert_eq!(result.type_breakdown[&ItemType::VerbalReasoning].total, 0);
        assert_eq!(result.strength_areas, vec![ItemType::MatrixReasoning]);
        assert_eq!(result.development_areas, vec![ItemType::LetterNumberSeries]);
    }

    #[test]
    fn empty_session_scores_zero() {
        let result = score_item_bank(&[], None);
        assert_eq!(result.raw_scores.total, 0);
        assert_eq!(result.normalized_scores.percentile_rank, 1);
        assert_eq!(
            result.normalized_scores.relative_position,
            CognitiveLevel::SignificantlyBelowAverage
        );
        assert_eq!(result.timing_data.average_time_per_item_ms, 0.0);
    }
}
