//! Trial-stream battery: working memory (n-back), inhibition (Stroop) and
//! processing speed (simple RT).

use tracing::{debug, info, warn};

use shared_types::{
    CognitiveDomain, CognitiveDomainScore, CognitiveResult, CognitiveTask, CognitiveTrial,
    OverallCognitiveScore, StroopCondition, StroopInterference, TaskDetails, TimeByTask,
    TrialBatteryResult, TrialDomainScores, TrialReliability, TrialTimingData,
};

use super::{clamp_standard_score, percentile_to_level, stats, CognitiveScorer};
use crate::normal::z_to_percentile;
use crate::norms::{
    ChoiceTaskNorms, N_BACK, SIMPLE_RT_MS, SIMPLE_RT_VARIABILITY_MS, STROOP, STROOP_INTERFERENCE_MS,
};

const N_BACK_ACCURACY_WEIGHT: f64 = 0.7;
const STROOP_ACCURACY_WEIGHT: f64 = 0.6;
const SIMPLE_RT_SPEED_WEIGHT: f64 = 0.8;
/// Share of plausible trials required for a reliable session.
pub const RELIABLE_TRIAL_SHARE: f64 = 0.8;

/// Exclusive latency bounds (ms) outside which a trial is implausible.
pub fn validity_window(task: CognitiveTask) -> (f64, f64) {
    match task {
        CognitiveTask::NBack | CognitiveTask::Stroop => (100.0, 3000.0),
        CognitiveTask::SimpleRt => (50.0, 1500.0),
    }
}

pub fn is_plausible(task: CognitiveTask, response_time_ms: f64) -> bool {
    let (low, high) = validity_window(task);
    response_time_ms > low && response_time_ms < high
}

/// Trials of one session grouped by task, each group in input order.
#[derive(Debug, Default)]
struct TaskTrials<'a> {
    n_back: Vec<&'a CognitiveTrial>,
    stroop: Vec<&'a CognitiveTrial>,
    simple_rt: Vec<&'a CognitiveTrial>,
}

impl<'a> TaskTrials<'a> {
    fn partition(trials: &'a [CognitiveTrial]) -> Self {
        let mut grouped = Self::default();
        for trial in trials {
            match trial.task {
                CognitiveTask::NBack => grouped.n_back.push(trial),
                CognitiveTask::Stroop => grouped.stroop.push(trial),
                CognitiveTask::SimpleRt => grouped.simple_rt.push(trial),
            }
        }
        grouped
    }

    fn get(&self, task: CognitiveTask) -> &[&'a CognitiveTrial] {
        match task {
            CognitiveTask::NBack => &self.n_back,
            CognitiveTask::Stroop => &self.stroop,
            CognitiveTask::SimpleRt => &self.simple_rt,
        }
    }
}

/// Scores a mixed stream of n-back, Stroop and simple-RT trials.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialBatteryScorer;

impl CognitiveScorer for TrialBatteryScorer {
    type Session = [CognitiveTrial];

    fn score(&self, trials: &[CognitiveTrial], total_time_ms: Option<f64>) -> CognitiveResult {
        CognitiveResult::TrialBattery(score_trial_battery(trials, total_time_ms))
    }
}

pub fn score_trial_battery(trials: &[CognitiveTrial], total_time_ms: Option<f64>) -> TrialBatteryResult {
    let grouped = TaskTrials::partition(trials);

    let domain_scores = TrialDomainScores {
        working_memory: score_choice_task(
            CognitiveTask::NBack,
            grouped.get(CognitiveTask::NBack),
            N_BACK,
            N_BACK_ACCURACY_WEIGHT,
        ),
        inhibition: score_choice_task(
            CognitiveTask::Stroop,
            grouped.get(CognitiveTask::Stroop),
            STROOP,
            STROOP_ACCURACY_WEIGHT,
        ),
        processing_speed: score_simple_rt(grouped.get(CognitiveTask::SimpleRt)),
    };

    let percentile_sum: u32 = domain_scores.iter().map(|d| d.percentile as u32).sum();
    let composite_percentile = (percentile_sum as f64 / 3.0).round() as u8;
    let composite_z = (composite_percentile as f64 - 50.0) / 34.0;
    let overall_score = OverallCognitiveScore {
        composite_percentile,
        standard_score: clamp_standard_score(100.0 + composite_z * 15.0),
        level: percentile_to_level(composite_percentile),
    };

    let reliability = trial_reliability(&grouped);
    if !reliability.is_reliable {
        warn!(
            valid = reliability.valid_trials,
            invalid = reliability.invalid_trials,
            "too many implausible trial latencies"
        );
    }

    let time_sum = |task: CognitiveTask| grouped.get(task).iter().map(|t| t.response_time_ms).sum::<f64>();
    let timing_data = TrialTimingData {
        total_time_ms,
        time_by_test: TimeByTask {
            n_back: time_sum(CognitiveTask::NBack),
            stroop: time_sum(CognitiveTask::Stroop),
            simple_rt: time_sum(CognitiveTask::SimpleRt),
        },
    };

    info!(
        trials = trials.len(),
        composite_percentile,
        level = %overall_score.level,
        "trial battery scored"
    );

    TrialBatteryResult {
        test_details: CognitiveTask::ALL
            .iter()
            .map(|task| task_details(*task, grouped.get(*task)))
            .collect(),
        stroop_interference: stroop_interference(grouped.get(CognitiveTask::Stroop)),
        domain_scores,
        overall_score,
        timing_data,
        reliability,
    }
}

/// Accuracy over plausible trials, latency over the correct ones, blended
/// `w * z(accuracy) + (1 - w) * z(speed)`.
fn score_choice_task(
    task: CognitiveTask,
    trials: &[&CognitiveTrial],
    norms: ChoiceTaskNorms,
    accuracy_weight: f64,
) -> CognitiveDomainScore {
    let valid: Vec<&CognitiveTrial> = trials
        .iter()
        .copied()
        .filter(|t| is_plausible(task, t.response_time_ms))
        .collect();
    let correct_rts: Vec<f64> = valid
        .iter()
        .filter(|t| t.is_correct)
        .map(|t| t.response_time_ms)
        .collect();

    let accuracy = if valid.is_empty() {
        0.0
    } else {
        correct_rts.len() as f64 / valid.len() as f64
    };
    let rt = stats(&correct_rts);

    let accuracy_z = norms.accuracy.z(accuracy);
    let rt_z = if rt.mean > 0.0 {
        norms.rt_ms.inverted_z(rt.mean)
    } else {
        0.0
    };
    let composite = accuracy_z * accuracy_weight + rt_z * (1.0 - accuracy_weight);

    debug!(%task, valid = valid.len(), accuracy, mean_rt = rt.mean, composite, "choice task scored");
    domain_score(task.domain(), accuracy, rt.mean, rt.sd, composite)
}

/// Accuracy is the share of all trials that are correct and plausible; the
/// blend rewards speed and consistency (low latency SD).
fn score_simple_rt(trials: &[&CognitiveTrial]) -> CognitiveDomainScore {
    let rts: Vec<f64> = trials
        .iter()
        .filter(|t| t.is_correct && is_plausible(CognitiveTask::SimpleRt, t.response_time_ms))
        .map(|t| t.response_time_ms)
        .collect();

    let accuracy = if trials.is_empty() {
        0.0
    } else {
        rts.len() as f64 / trials.len() as f64
    };
    let rt = stats(&rts);

    let rt_z = if rt.mean > 0.0 {
        SIMPLE_RT_MS.inverted_z(rt.mean)
    } else {
        0.0
    };
    let variability_z = if rt.sd > 0.0 {
        SIMPLE_RT_VARIABILITY_MS.inverted_z(rt.sd)
    } else {
        0.0
    };
    let composite = rt_z * SIMPLE_RT_SPEED_WEIGHT + variability_z * (1.0 - SIMPLE_RT_SPEED_WEIGHT);

    debug!(valid = rts.len(), mean_rt = rt.mean, sd_rt = rt.sd, composite, "simple RT scored");
    domain_score(CognitiveDomain::ProcessingSpeed, accuracy, rt.mean, rt.sd, composite)
}

fn domain_score(
    domain: CognitiveDomain,
    accuracy: f64,
    mean_rt: f64,
    sd_rt: f64,
    composite_z: f64,
) -> CognitiveDomainScore {
    let percentile = z_to_percentile(composite_z);
    CognitiveDomainScore {
        domain,
        accuracy,
        mean_rt,
        sd_rt,
        efficiency: if mean_rt > 0.0 {
            accuracy / mean_rt.ln()
        } else {
            0.0
        },
        percentile,
        level: percentile_to_level(percentile),
    }
}

/// Plausibility counts only; correctness plays no part here.
fn trial_reliability(grouped: &TaskTrials<'_>) -> TrialReliability {
    let (mut valid, mut total) = (0usize, 0usize);
    for task in CognitiveTask::ALL {
        let trials = grouped.get(task);
        total += trials.len();
        valid += trials
            .iter()
            .filter(|t| is_plausible(task, t.response_time_ms))
            .count();
    }

    TrialReliability {
        valid_trials: valid,
        invalid_trials: total - valid,
        is_reliable: total > 0 && valid as f64 / total as f64 >= RELIABLE_TRIAL_SHARE,
    }
}

/// Unfiltered summary of one task.
fn task_details(task: CognitiveTask, trials: &[&CognitiveTrial]) -> TaskDetails {
    let correct_rts: Vec<f64> = trials
        .iter()
        .filter(|t| t.is_correct)
        .map(|t| t.response_time_ms)
        .collect();
    let rt = stats(&correct_rts);

    TaskDetails {
        task,
        total_trials: trials.len(),
        correct_trials: correct_rts.len(),
        accuracy: if trials.is_empty() {
            0.0
        } else {
            correct_rts.len() as f64 / trials.len() as f64
        },
        mean_rt: rt.mean,
        sd_rt: rt.sd,
    }
}

/// Needs correct, plausible trials in both conditions.
pub fn stroop_interference(trials: &[&CognitiveTrial]) -> Option<StroopInterference> {
    let rts_for = |condition: StroopCondition| -> Vec<f64> {
        trials
            .iter()
            .filter(|t| t.condition == Some(condition))
            .filter(|t| t.is_correct && is_plausible(CognitiveTask::Stroop, t.response_time_ms))
            .map(|t| t.response_time_ms)
            .collect()
    };
    let congruent = rts_for(StroopCondition::Congruent);
    let incongruent = rts_for(StroopCondition::Incongruent);
    if congruent.is_empty() || incongruent.is_empty() {
        return None;
    }

    let congruent_rt = stats(&congruent).mean;
    let incongruent_rt = stats(&incongruent).mean;
    let effect = incongruent_rt - congruent_rt;

    Some(StroopInterference {
        congruent_rt,
        incongruent_rt,
        interference_effect: effect,
        percentile: z_to_percentile(STROOP_INTERFERENCE_MS.inverted_z(effect)),
    })
}
