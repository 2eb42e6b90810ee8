use assessment_engine::cognitive::trial::score_trial_battery;
use assessment_engine::personality::{raw_score, tendency_level};
use assessment_engine::{
    all_questions, calculate_reliability_metrics, shape_ai_payload, transform_all_scores,
    z_to_percentile, ScoreTransformer,
};
use chrono::Utc;
use shared_types::{
    AnalysisPurpose, AnswerValue, CognitiveLevel, CognitiveTask, CognitiveTrial, Keying,
    PersonalityAnswer, PersonalityDomain, Question, ReliabilityStatus, TendencyLevel,
};

fn answer(id: &str, value: u8) -> PersonalityAnswer {
    PersonalityAnswer::new(id, AnswerValue::new(value).unwrap())
}

fn answer_every_question(value: u8) -> Vec<PersonalityAnswer> {
    all_questions().iter().map(|q| answer(&q.id, value)).collect()
}

#[test]
fn neutral_answers_land_relative_to_each_norm() {
    let scores = transform_all_scores(&answer_every_question(3), all_questions());
    assert_eq!(scores.len(), PersonalityDomain::ALL.len());

    for score in &scores {
        assert_eq!(score.score.raw_score, 3.0, "{}", score.domain);
    }
    let t_of = |domain: PersonalityDomain| {
        scores
            .iter()
            .find(|s| s.domain == domain)
            .map(|s| s.score.t_score)
            .unwrap()
    };
    // EX norm mean 3.2: slightly below
    assert!(t_of(PersonalityDomain::Ex) < 50);
    // NE norm mean 3.0: exactly at the norm
    assert_eq!(t_of(PersonalityDomain::Ne), 50);
    // MA norm mean 2.8: slightly above
    assert!(t_of(PersonalityDomain::Ma) > 50);
}

#[test]
fn endorsed_absolute_claims_flag_low_reliability_and_clamp() {
    let answers = vec![
        answer("LI-1", 4),
        answer("LI-2", 5),
        answer("LI-4", 4),
        answer("LI-5", 5),
        answer("LI-6", 4),
        answer("LI-7", 5),
        answer("LI-8", 4),
        answer("LI-9", 5),
    ];
    let metrics = calculate_reliability_metrics(&answers, all_questions());

    assert_eq!(metrics.social_desirability.flag, ReliabilityStatus::Low);
    assert_eq!(metrics.social_desirability.score, 225);
    assert_eq!(metrics.overall_reliability, 100);
    assert!(!metrics.response_pattern.straightlining);
}

#[test]
fn quick_consistent_simple_rt_is_at_least_average() {
    let trials: Vec<CognitiveTrial> = [250.0, 260.0, 270.0, 280.0, 300.0]
        .into_iter()
        .enumerate()
        .map(|(i, rt)| CognitiveTrial {
            task: CognitiveTask::SimpleRt,
            trial_index: i as u32,
            response: Some(" ".to_string()),
            is_correct: true,
            response_time_ms: rt,
            timestamp: Utc::now(),
            condition: None,
        })
        .collect();

    let result = score_trial_battery(&trials, None);
    let speed = &result.domain_scores.processing_speed;
    assert_eq!(speed.mean_rt, 272.0);
    assert_eq!(speed.accuracy, 1.0);
    assert!(speed.percentile > 50);
    assert!(matches!(
        speed.level,
        CognitiveLevel::Average | CognitiveLevel::AboveAverage
    ));
}

#[test]
fn norm_mean_maps_to_the_middle() {
    let transformer = ScoreTransformer::default();
    for domain in PersonalityDomain::ALL {
        let mean = transformer.norm(domain).mean;
        let score = transformer.transform_score(mean, domain);
        assert_eq!(score.z_score, 0.0);
        assert_eq!(score.t_score, 50);
        assert_eq!(score.tendency_level, TendencyLevel::Moderate);
        assert_eq!(score.percentile, 50);
    }
}

#[test]
fn tendency_bands_cover_the_t_range() {
    let mut previous = tendency_level(20);
    for t in 20..=80u8 {
        let level = tendency_level(t);
        assert!(level >= previous, "bands must not decrease at T={t}");
        previous = level;
    }
    assert_eq!(tendency_level(34), TendencyLevel::NotCharacteristic);
    assert_eq!(tendency_level(35), TendencyLevel::LessCharacteristic);
    assert_eq!(tendency_level(45), TendencyLevel::Moderate);
    assert_eq!(tendency_level(55), TendencyLevel::Characteristic);
    assert_eq!(tendency_level(65), TendencyLevel::VeryCharacteristic);
}

#[test]
fn percentile_is_bounded_and_monotone() {
    let mut previous = 0;
    for step in -80..=80 {
        let p = z_to_percentile(step as f64 / 10.0);
        assert!((1..=99).contains(&p));
        assert!(p >= previous);
        previous = p;
    }
    assert_eq!(z_to_percentile(0.0), 50);
}

#[test]
fn raw_score_extremes_on_the_question_bank() {
    let plus_only: Vec<Question> = all_questions()
        .iter()
        .filter(|q| q.domain == PersonalityDomain::Ex && q.keyed == Keying::Plus)
        .cloned()
        .collect();
    let all_five: Vec<_> = plus_only.iter().map(|q| answer(&q.id, 5)).collect();
    let all_one: Vec<_> = plus_only.iter().map(|q| answer(&q.id, 1)).collect();

    assert_eq!(raw_score(&[], &plus_only), 0.0);
    assert_eq!(raw_score(&all_five, &plus_only), 5.0);
    assert_eq!(raw_score(&all_one, &plus_only), 1.0);
}

#[test]
fn full_pipeline_produces_a_number_free_payload() {
    let answers: Vec<PersonalityAnswer> = all_questions()
        .iter()
        .enumerate()
        .map(|(i, q)| answer(&q.id, (i % 5) as u8 + 1).with_response_time(2500.0))
        .collect();
    let scores = transform_all_scores(&answers, all_questions());
    let reliability = calculate_reliability_metrics(&answers, all_questions());
    let payload = shape_ai_payload(&scores, &reliability, AnalysisPurpose::CareerDevelopment, None);

    assert_eq!(payload.reliability_note, reliability.interpretation_note);
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["metadata"]["analysisPurpose"], "career_development");
    assert!(json["personalityProfile"]["bigFive"]["EX"]["tendencyLevel"].is_string());
    assert!(json["personalityProfile"]["bigFive"]["EX"].get("tScore").is_none());
}
