//! Locally computed narrative for when the provider is unavailable. Always
//! tagged [`InterpretationSource::DeterministicFallback`] so callers can tell
//! it apart from generated content.

use shared_types::{
    AIInterpretationOutput, CommunicationProfile, DomainScore, GrowthOpportunity, Interpretation,
    InterpretationConfidence, InterpretationSource, PersonalityDomain, ReliabilityMetrics,
    ReliabilityStatus, StrengthItem, TeamFit,
};

/// T-score from which a domain is listed as a strength.
pub const STRENGTH_T_THRESHOLD: u8 = 55;
pub const MAX_FALLBACK_STRENGTHS: usize = 3;

pub fn deterministic_interpretation(
    domain_scores: &[DomainScore],
    reliability: &ReliabilityMetrics,
) -> Interpretation {
    let strengths = domain_scores
        .iter()
        .filter(|s| s.domain != PersonalityDomain::Li && s.score.t_score >= STRENGTH_T_THRESHOLD)
        .take(MAX_FALLBACK_STRENGTHS)
        .map(|s| StrengthItem {
            area: s.domain.display_name().to_string(),
            description: s.score.description.clone(),
            evidence_basis: format!("{} tendency is characteristic", s.domain.display_name()),
        })
        .collect();

    let level = match reliability.social_desirability.flag {
        ReliabilityStatus::High => ReliabilityStatus::High,
        _ => ReliabilityStatus::Moderate,
    };

    let output = AIInterpretationOutput {
        strengths,
        growth_opportunities: vec![GrowthOpportunity {
            area: "Deepen self-understanding".to_string(),
            suggestion: "Reflect on the results and stay aware of your own strengths and characteristics".to_string(),
            supporting_conditions: "Regular opportunities for self-reflection".to_string(),
        }],
        communication_profile: CommunicationProfile {
            preferred_style: "Flexible communication adapted to the situation".to_string(),
            effective_approaches: vec![
                "Check the other person's situation before conveying something".to_string(),
                "Ask for feedback".to_string(),
            ],
            potential_frictions: Vec::new(),
        },
        team_fit: TeamFit {
            natural_roles: vec!["Team member".to_string()],
            complementary_profiles: vec!["Members with diverse styles".to_string()],
            team_contributions: vec!["Contributing to team goals".to_string()],
        },
        cognitive_integration: None,
        interpretation_confidence: InterpretationConfidence {
            level,
            factors: vec![reliability.interpretation_note.clone()],
        },
    };

    Interpretation {
        source: InterpretationSource::DeterministicFallback,
        output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assessment_engine::{all_questions, calculate_reliability_metrics, ScoreTransformer};
    use shared_types::{AnswerValue, PersonalityAnswer};

    fn answers(value: u8) -> Vec<PersonalityAnswer> {
        all_questions()
            .iter()
            .filter_map(|q| AnswerValue::new(value).map(|v| PersonalityAnswer::new(&q.id, v)))
            .collect()
    }

    #[test]
    fn neutral_profile_has_no_strengths() {
        let answers = answers(3);
        let scores = ScoreTransformer::default().transform_all_scores(&answers, all_questions());
        let reliability = calculate_reliability_metrics(&answers, all_questions());

        let interpretation = deterministic_interpretation(&scores, &reliability);
        assert_eq!(interpretation.source, InterpretationSource::DeterministicFallback);
        assert!(interpretation.output.strengths.is_empty());
        assert_eq!(
            interpretation.output.interpretation_confidence.factors,
            vec![reliability.interpretation_note.clone()]
        );
    }

    #[test]
    fn strengths_are_capped_and_skip_validity_scale() {
        let answers = answers(5);
        let scores = ScoreTransformer::default().transform_all_scores(&answers, all_questions());
        let reliability = calculate_reliability_metrics(&answers, all_questions());

        let output = deterministic_interpretation(&scores, &reliability).output;
        assert!(output.strengths.len() <= MAX_FALLBACK_STRENGTHS);
        assert!(output
            .strengths
            .iter()
            .all(|s| s.area != PersonalityDomain::Li.display_name()));
        assert_eq!(output.interpretation_confidence.level, ReliabilityStatus::Moderate);
    }
}
