// === COGNITIVE TASK TYPES ===
// Two measurement designs share one result shape: a continuous trial stream
// (n-back / Stroop / simple RT) and a fixed 16-item reasoning battery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Trial-stream paradigm that produced a trial.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveTask {
    NBack,
    Stroop,
    SimpleRt,
}

impl CognitiveTask {
    pub const ALL: [CognitiveTask; 3] = [
        CognitiveTask::NBack,
        CognitiveTask::Stroop,
        CognitiveTask::SimpleRt,
    ];

    pub fn domain(&self) -> CognitiveDomain {
        match self {
            CognitiveTask::NBack => CognitiveDomain::WorkingMemory,
            CognitiveTask::Stroop => CognitiveDomain::Inhibition,
            CognitiveTask::SimpleRt => CognitiveDomain::ProcessingSpeed,
        }
    }
}

impl fmt::Display for CognitiveTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CognitiveTask::NBack => write!(f, "n_back"),
            CognitiveTask::Stroop => write!(f, "stroop"),
            CognitiveTask::SimpleRt => write!(f, "simple_rt"),
        }
    }
}

/// Construct measured by a trial-stream paradigm.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveDomain {
    WorkingMemory,
    Inhibition,
    ProcessingSpeed,
}

/// Congruency of a Stroop stimulus (word vs. ink colour).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StroopCondition {
    Congruent,
    Incongruent,
}

/// One recorded trial of the trial-stream battery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveTrial {
    pub task: CognitiveTask,
    pub trial_index: u32,
    /// Key or option pressed; `None` when the respondent did not respond
    #[serde(default)]
    pub response: Option<String>,
    pub is_correct: bool,
    pub response_time_ms: f64,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<StroopCondition>,
}

/// Five-band standing relative to the norm, ordered low to high.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveLevel {
    SignificantlyBelowAverage,
    BelowAverage,
    Average,
    AboveAverage,
    SignificantlyAboveAverage,
}

impl CognitiveLevel {
    pub const ALL: [CognitiveLevel; 5] = [
        CognitiveLevel::SignificantlyBelowAverage,
        CognitiveLevel::BelowAverage,
        CognitiveLevel::Average,
        CognitiveLevel::AboveAverage,
        CognitiveLevel::SignificantlyAboveAverage,
    ];
}

impl fmt::Display for CognitiveLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CognitiveLevel::SignificantlyBelowAverage => write!(f, "significantly_below_average"),
            CognitiveLevel::BelowAverage => write!(f, "below_average"),
            CognitiveLevel::Average => write!(f, "average"),
            CognitiveLevel::AboveAverage => write!(f, "above_average"),
            CognitiveLevel::SignificantlyAboveAverage => write!(f, "significantly_above_average"),
        }
    }
}

// === TRIAL-STREAM RESULT ===

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveDomainScore {
    pub domain: CognitiveDomain,
    pub accuracy: f64,
    #[serde(rename = "meanRT")]
    pub mean_rt: f64,
    #[serde(rename = "sdRT")]
    pub sd_rt: f64,
    /// accuracy / ln(mean RT)
    pub efficiency: f64,
    pub percentile: u8,
    pub level: CognitiveLevel,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrialDomainScores {
    pub working_memory: CognitiveDomainScore,
    pub inhibition: CognitiveDomainScore,
    pub processing_speed: CognitiveDomainScore,
}

impl TrialDomainScores {
    pub fn iter(&self) -> impl Iterator<Item = &CognitiveDomainScore> {
        [&self.working_memory, &self.inhibition, &self.processing_speed].into_iter()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverallCognitiveScore {
    pub composite_percentile: u8,
    /// Mean 100, SD 15, clamped to 55..=145
    pub standard_score: u8,
    pub level: CognitiveLevel,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetails {
    #[serde(rename = "type")]
    pub task: CognitiveTask,
    pub total_trials: usize,
    pub correct_trials: usize,
    pub accuracy: f64,
    #[serde(rename = "meanRT")]
    pub mean_rt: f64,
    #[serde(rename = "sdRT")]
    pub sd_rt: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimeByTask {
    pub n_back: f64,
    pub stroop: f64,
    pub simple_rt: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrialTimingData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time_ms: Option<f64>,
    pub time_by_test: TimeByTask,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrialReliability {
    pub valid_trials: usize,
    pub invalid_trials: usize,
    pub is_reliable: bool,
}

/// Incongruent minus congruent RT on correct, plausible Stroop trials.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StroopInterference {
    #[serde(rename = "congruentRT")]
    pub congruent_rt: f64,
    #[serde(rename = "incongruentRT")]
    pub incongruent_rt: f64,
    pub interference_effect: f64,
    pub percentile: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrialBatteryResult {
    pub domain_scores: TrialDomainScores,
    pub overall_score: OverallCognitiveScore,
    pub test_details: Vec<TaskDetails>,
    pub timing_data: TrialTimingData,
    pub reliability: TrialReliability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroop_interference: Option<StroopInterference>,
}

// === FIXED ITEM BANK ===

/// Item family of the 16-item reasoning battery.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    MatrixReasoning,
    LetterNumberSeries,
    VerbalReasoning,
    #[serde(rename = "3d_rotation")]
    Rotation3d,
}

impl ItemType {
    pub const ALL: [ItemType; 4] = [
        ItemType::MatrixReasoning,
        ItemType::LetterNumberSeries,
        ItemType::VerbalReasoning,
        ItemType::Rotation3d,
    ];
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::MatrixReasoning => write!(f, "matrix_reasoning"),
            ItemType::LetterNumberSeries => write!(f, "letter_number_series"),
            ItemType::VerbalReasoning => write!(f, "verbal_reasoning"),
            ItemType::Rotation3d => write!(f, "3d_rotation"),
        }
    }
}

/// A multiple-choice item of the fixed battery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub stimulus: String,
    pub options: Vec<String>,
    /// Option letter, e.g. "A"
    pub correct_answer: String,
    /// IRT-style difficulty, 0.0 - 1.0
    pub difficulty: f64,
    pub time_limit_secs: u32,
}

/// One answered item; `selected_answer` is `None` on timeout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemAnswer {
    pub item_id: String,
    pub item_type: ItemType,
    #[serde(default)]
    pub selected_answer: Option<String>,
    pub is_correct: bool,
    pub response_time_ms: f64,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemBankRawScores {
    pub matrix_reasoning: u32,
    pub letter_number_series: u32,
    pub verbal_reasoning: u32,
    #[serde(rename = "rotation3d")]
    pub rotation_3d: u32,
    pub total: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedScores {
    pub percentile_rank: u8,
    pub standard_score: u8,
    pub relative_position: CognitiveLevel,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ItemTypeBreakdown {
    pub correct: u32,
    pub total: u32,
    /// correct / total, 0.0 when no items of this type were answered
    pub rate: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemBankTiming {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time_ms: Option<f64>,
    pub average_time_per_item_ms: f64,
    pub time_by_type: BTreeMap<ItemType, f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemBankResult {
    pub raw_scores: ItemBankRawScores,
    pub total_items: u32,
    pub normalized_scores: NormalizedScores,
    pub type_breakdown: BTreeMap<ItemType, ItemTypeBreakdown>,
    pub strength_areas: Vec<ItemType>,
    pub development_areas: Vec<ItemType>,
    pub timing_data: ItemBankTiming,
}

/// Outcome of either cognitive scorer, tagged by the design that produced it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "paradigm", rename_all = "snake_case")]
pub enum CognitiveResult {
    TrialBattery(TrialBatteryResult),
    ItemBank(ItemBankResult),
}

impl CognitiveResult {
    pub fn level(&self) -> CognitiveLevel {
        match self {
            CognitiveResult::TrialBattery(r) => r.overall_score.level,
            CognitiveResult::ItemBank(r) => r.normalized_scores.relative_position,
        }
    }

    pub fn percentile(&self) -> u8 {
        match self {
            CognitiveResult::TrialBattery(r) => r.overall_score.composite_percentile,
            CognitiveResult::ItemBank(r) => r.normalized_scores.percentile_rank,
        }
    }

    pub fn standard_score(&self) -> u8 {
        match self {
            CognitiveResult::TrialBattery(r) => r.overall_score.standard_score,
            CognitiveResult::ItemBank(r) => r.normalized_scores.standard_score,
        }
    }
}
