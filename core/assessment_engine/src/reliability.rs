//! Response-validity heuristics over a completed questionnaire.
//!
//! Social desirability is read from the validity domain only; response
//! patterns (straightlining, extreme/midpoint bias, latency) use every answer
//! in the order it was given.

use std::collections::HashMap;

use tracing::{debug, info};

use shared_types::{
    AnswerValue, Keying, PersonalityAnswer, PersonalityDomain, Question, ReliabilityMetrics,
    ReliabilityStatus, ResponsePattern, ResponseTimeStats, SocialDesirability,
};

/// Consecutive identical answers that count as straightlining.
pub const STRAIGHTLINE_RUN: usize = 5;
/// Average latency below this is flagged as suspiciously fast.
pub const FAST_AVERAGE_MS: f64 = 1000.0;

const LOW_FLAG_THRESHOLD: f64 = 4.0;
const MODERATE_FLAG_THRESHOLD: f64 = 3.5;
const STRAIGHTLINE_DISCOUNT: f64 = 0.7;
const EXTREME_DISCOUNT: f64 = 0.9;
const BIAS_PERCENT_THRESHOLD: u8 = 50;

const LOW_NOTE: &str =
    "Serious reliability concerns were found in these responses. Interpret the results with great care.";
const MODERATE_NOTE: &str =
    "Some inconsistency was found in these responses. Interpret the results cautiously.";
const STRAIGHTLINING_NOTE: &str = "Long runs of identical consecutive answers were detected.";
const EXTREME_NOTE: &str = "Answers lean heavily toward the ends of the scale.";
const MIDPOINT_NOTE: &str = "Answers lean heavily toward the middle of the scale.";
const FAST_NOTE: &str = "Response times were very short.";
const CLEAN_NOTE: &str = "No reliability problems were detected in these responses.";

/// Reliability verdict for one respondent's answer set.
pub fn calculate_reliability_metrics(
    answers: &[PersonalityAnswer],
    questions: &[Question],
) -> ReliabilityMetrics {
    let keying: HashMap<&str, Keying> = questions
        .iter()
        .filter(|q| q.domain == PersonalityDomain::Li)
        .map(|q| (q.id.as_str(), q.keyed))
        .collect();

    // Validity probes are averaged on their literal value, without reflection.
    let mean_of = |wanted: Keying| {
        let values: Vec<f64> = answers
            .iter()
            .filter(|a| keying.get(a.question_id.as_str()) == Some(&wanted))
            .map(|a| a.value.get() as f64)
            .collect();
        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    };
    let reverse_mean = mean_of(Keying::Minus);
    let normal_mean = mean_of(Keying::Plus);

    let flag = social_desirability_flag(reverse_mean);
    let mut score = normal_mean
        * match flag {
            ReliabilityStatus::Low => 50.0,
            ReliabilityStatus::Moderate => 80.0,
            ReliabilityStatus::High => 100.0,
        };

    let pattern = analyze_response_pattern(answers);
    if pattern.straightlining {
        score *= STRAIGHTLINE_DISCOUNT;
    }
    if pattern.extreme_responding > BIAS_PERCENT_THRESHOLD {
        score *= EXTREME_DISCOUNT;
    }

    let rounded = score.round().max(0.0);
    let overall = rounded.min(100.0) as u8;

    debug!(reverse_mean, normal_mean, %flag, score, "social desirability evaluated");
    platform::record_labeled_counter("assessment_reliability_flag_total", "flag", flag);
    info!(%flag, overall, "reliability metrics calculated");

    ReliabilityMetrics {
        social_desirability: SocialDesirability {
            score: rounded as u32,
            flag,
            reverse_item_consistency: ((5.0 - reverse_mean) * 20.0).round().max(0.0) as u32,
        },
        interpretation_note: reliability_note(flag, &pattern),
        response_pattern: pattern,
        overall_reliability: overall,
    }
}

/// Endorsing the absolute-claim probes lowers trust in the whole set.
pub fn social_desirability_flag(reverse_mean: f64) -> ReliabilityStatus {
    if reverse_mean >= LOW_FLAG_THRESHOLD {
        ReliabilityStatus::Low
    } else if reverse_mean >= MODERATE_FLAG_THRESHOLD {
        ReliabilityStatus::Moderate
    } else {
        ReliabilityStatus::High
    }
}

/// Longest run of identical consecutive values (0 for no answers).
pub fn longest_identical_run(answers: &[PersonalityAnswer]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<AnswerValue> = None;

    for answer in answers {
        current = if previous == Some(answer.value) { current + 1 } else { 1 };
        longest = longest.max(current);
        previous = Some(answer.value);
    }
    longest
}

pub fn analyze_response_pattern(answers: &[PersonalityAnswer]) -> ResponsePattern {
    if answers.is_empty() {
        return ResponsePattern {
            straightlining: false,
            extreme_responding: 0,
            midpoint_responding: 0,
            response_time: None,
        };
    }

    let total = answers.len() as f64;
    let percent = |count: usize| ((count as f64 / total) * 100.0).round() as u8;

    let extreme = answers.iter().filter(|a| a.value.is_extreme()).count();
    let midpoint = answers.iter().filter(|a| a.value.is_midpoint()).count();

    ResponsePattern {
        straightlining: longest_identical_run(answers) >= STRAIGHTLINE_RUN,
        extreme_responding: percent(extreme),
        midpoint_responding: percent(midpoint),
        response_time: response_time_stats(answers),
    }
}

/// Mean and population variance over answers that carry a latency.
fn response_time_stats(answers: &[PersonalityAnswer]) -> Option<ResponseTimeStats> {
    let times: Vec<f64> = answers.iter().filter_map(|a| a.response_time_ms).collect();
    if times.is_empty() {
        return None;
    }

    let n = times.len() as f64;
    let average = times.iter().sum::<f64>() / n;
    let variance = times.iter().map(|t| (t - average).powi(2)).sum::<f64>() / n;

    Some(ResponseTimeStats {
        average: average.round(),
        variance: variance.round(),
        suspiciously_fast: average < FAST_AVERAGE_MS,
    })
}

/// Applicable caveats joined in priority order.
pub fn reliability_note(flag: ReliabilityStatus, pattern: &ResponsePattern) -> String {
    let mut notes: Vec<&str> = Vec::new();

    match flag {
        ReliabilityStatus::Low => notes.push(LOW_NOTE),
        ReliabilityStatus::Moderate => notes.push(MODERATE_NOTE),
        ReliabilityStatus::High => {}
    }
    if pattern.straightlining {
        notes.push(STRAIGHTLINING_NOTE);
    }
    if pattern.extreme_responding > BIAS_PERCENT_THRESHOLD {
        notes.push(EXTREME_NOTE);
    }
    if pattern.midpoint_responding > BIAS_PERCENT_THRESHOLD {
        notes.push(MIDPOINT_NOTE);
    }
    if pattern
        .response_time
        .as_ref()
        .is_some_and(|rt| rt.suspiciously_fast)
    {
        notes.push(FAST_NOTE);
    }

    if notes.is_empty() {
        CLEAN_NOTE.to_string()
    } else {
        notes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn li(id: &str, keyed: Keying) -> Question {
        Question {
            id: id.to_string(),
            text: String::new(),
            domain: PersonalityDomain::Li,
            category: PersonalityDomain::Li.category(),
            keyed,
            order: 0,
        }
    }

    fn answer(id: &str, value: u8) -> PersonalityAnswer {
        PersonalityAnswer::new(id, AnswerValue::new(value).unwrap())
    }

    fn validity_questions() -> Vec<Question> {
        vec![
            li("LI-1", Keying::Minus),
            li("LI-2", Keying::Minus),
            li("LI-4", Keying::Plus),
            li("LI-5", Keying::Plus),
        ]
    }

    #[test]
    fn flag_thresholds_are_inclusive() {
        assert_eq!(social_desirability_flag(4.0), ReliabilityStatus::Low);
        assert_eq!(social_desirability_flag(3.99), ReliabilityStatus::Moderate);
        assert_eq!(social_desirability_flag(3.5), ReliabilityStatus::Moderate);
        assert_eq!(social_desirability_flag(3.49), ReliabilityStatus::High);
    }

    #[test]
    fn straightlining_needs_five_in_a_row() {
        let four: Vec<_> = [2, 2, 2, 2, 4].iter().enumerate().map(|(i, v)| answer(&i.to_string(), *v)).collect();
        let five: Vec<_> = [1, 3, 3, 3, 3, 3].iter().enumerate().map(|(i, v)| answer(&i.to_string(), *v)).collect();
        assert_eq!(longest_identical_run(&four), 4);
        assert!(!analyze_response_pattern(&four).straightlining);
        assert!(analyze_response_pattern(&five).straightlining);
        assert_eq!(longest_identical_run(&[]), 0);
    }

    #[test]
    fn all_midpoint_answers() {
        let answers: Vec<_> = (0..10).map(|i| answer(&format!("Q-{i}"), 3)).collect();
        let pattern = analyze_response_pattern(&answers);
        assert_eq!(pattern.midpoint_responding, 100);
        assert_eq!(pattern.extreme_responding, 0);
        assert!(pattern.straightlining);
    }

    #[test]
    fn empty_answer_set_has_a_neutral_pattern() {
        let pattern = analyze_response_pattern(&[]);
        assert!(!pattern.straightlining);
        assert_eq!(pattern.extreme_responding, 0);
        assert_eq!(pattern.midpoint_responding, 0);
        assert!(pattern.response_time.is_none());
    }

    #[test]
    fn latency_stats_ignore_answers_without_timing() {
        let answers = vec![
            answer("A", 2).with_response_time(800.0),
            answer("B", 4).with_response_time(1200.0),
            answer("C", 3),
        ];
        let rt = analyze_response_pattern(&answers).response_time.unwrap();
        assert_eq!(rt.average, 1000.0);
        assert_eq!(rt.variance, 40000.0);
        assert!(!rt.suspiciously_fast);
    }

    #[test]
    fn honest_validity_answers_give_high_reliability() {
        let answers = vec![
            answer("LI-1", 1),
            answer("LI-2", 2),
            answer("LI-4", 4),
            answer("LI-5", 5),
        ];
        let metrics = calculate_reliability_metrics(&answers, &validity_questions());
        assert_eq!(metrics.social_desirability.flag, ReliabilityStatus::High);
        // normal mean 4.5 * 100 = 450, clamped
        assert_eq!(metrics.social_desirability.score, 450);
        assert_eq!(metrics.overall_reliability, 100);
        // (5 - 1.5) * 20
        assert_eq!(metrics.social_desirability.reverse_item_consistency, 70);
    }

    #[test]
    fn moderate_flag_discounts_score() {
        let answers = vec![
            answer("LI-1", 3),
            answer("LI-2", 4),
            answer("LI-4", 1),
            answer("LI-5", 1),
        ];
        let metrics = calculate_reliability_metrics(&answers, &validity_questions());
        assert_eq!(metrics.social_desirability.flag, ReliabilityStatus::Moderate);
        assert_eq!(metrics.social_desirability.score, 80);
        assert_eq!(metrics.overall_reliability, 80);
        assert!(metrics.interpretation_note.starts_with(MODERATE_NOTE));
    }

    #[test]
    fn notes_follow_priority_order() {
        let pattern = ResponsePattern {
            straightlining: true,
            extreme_responding: 60,
            midpoint_responding: 0,
            response_time: Some(ResponseTimeStats {
                average: 500.0,
                variance: 0.0,
                suspiciously_fast: true,
            }),
        };
        let note = reliability_note(ReliabilityStatus::Low, &pattern);
        assert_eq!(
            note,
            [LOW_NOTE, STRAIGHTLINING_NOTE, EXTREME_NOTE, FAST_NOTE].join(" ")
        );

        let clean = ResponsePattern {
            straightlining: false,
            extreme_responding: 10,
            midpoint_responding: 20,
            response_time: None,
        };
        assert_eq!(reliability_note(ReliabilityStatus::High, &clean), CLEAN_NOTE);
    }
}
