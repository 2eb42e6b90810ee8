//! Shapes scored results into the number-free payload handed to the
//! interpretation service.

pub mod strengths;

use std::collections::HashMap;

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use shared_types::{
    AIInputPayload, AnalysisPurpose, BigFiveProfile, CognitiveDomainProfile, CognitiveProfile,
    CognitiveResult, DarkTriadProfile, DomainScore, PayloadMetadata, PersonalityDomain,
    PersonalityProfile, ReliabilityMetrics, TendencyLevel, TraitAIRepresentation,
};

pub use strengths::{trait_considerations, trait_strengths};

use crate::cognitive::descriptions::{domain_summary, level_summary};

pub const PAYLOAD_VERSION: &str = "2.0";
const NO_DATA_DESCRIPTION: &str = "No data available";

/// Build the interpretation payload. Only categorical levels and text enter
/// it; raw, T and percentile scores stay behind.
pub fn shape_ai_payload(
    domain_scores: &[DomainScore],
    reliability: &ReliabilityMetrics,
    purpose: AnalysisPurpose,
    cognitive: Option<&CognitiveResult>,
) -> AIInputPayload {
    let by_domain: HashMap<PersonalityDomain, &DomainScore> =
        domain_scores.iter().map(|s| (s.domain, s)).collect();
    let trait_of = |domain: PersonalityDomain| trait_representation(domain, by_domain.get(&domain).copied());

    let personality_profile = PersonalityProfile {
        big_five: BigFiveProfile {
            extraversion: trait_of(PersonalityDomain::Ex),
            conscientiousness: trait_of(PersonalityDomain::Co),
            agreeableness: trait_of(PersonalityDomain::Ag),
            emotional_stability: trait_of(PersonalityDomain::Ne),
            openness: trait_of(PersonalityDomain::Op),
        },
        dark_triad: DarkTriadProfile {
            machiavellianism: trait_of(PersonalityDomain::Ma),
            narcissism: trait_of(PersonalityDomain::Na),
            psychopathy: trait_of(PersonalityDomain::Ps),
        },
        empathy: trait_of(PersonalityDomain::Em),
        work_style: trait_of(PersonalityDomain::Wr),
    };

    debug!(
        domains = domain_scores.len(),
        with_cognitive = cognitive.is_some(),
        ?purpose,
        "shaping interpretation payload"
    );

    AIInputPayload {
        metadata: PayloadMetadata {
            version: PAYLOAD_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            reliability_status: reliability.social_desirability.flag,
            analysis_purpose: purpose,
        },
        personality_profile,
        cognitive_profile: cognitive.map(cognitive_profile),
        reliability_note: reliability.interpretation_note.clone(),
        additional_context: None,
    }
}

/// Categorical view of one trait; a domain with no score reads as moderate
/// with empty lists.
pub fn trait_representation(
    domain: PersonalityDomain,
    score: Option<&DomainScore>,
) -> TraitAIRepresentation {
    match score {
        Some(s) => {
            let level = s.score.tendency_level;
            TraitAIRepresentation {
                tendency_level: level,
                description: s.score.description.clone(),
                strengths: trait_strengths(domain, level).iter().map(|t| t.to_string()).collect(),
                considerations: trait_considerations(domain, level),
            }
        }
        None => TraitAIRepresentation {
            tendency_level: TendencyLevel::Moderate,
            description: NO_DATA_DESCRIPTION.to_string(),
            strengths: Vec::new(),
            considerations: Vec::new(),
        },
    }
}

pub fn cognitive_profile(result: &CognitiveResult) -> CognitiveProfile {
    let overall_level = result.level();
    match result {
        CognitiveResult::TrialBattery(r) => CognitiveProfile {
            overall_level,
            description: level_summary(overall_level).to_string(),
            domain_profiles: r
                .domain_scores
                .iter()
                .map(|d| CognitiveDomainProfile {
                    domain: d.domain,
                    level: d.level,
                    description: domain_summary(d.domain, d.level).to_string(),
                })
                .collect(),
            strength_areas: Vec::new(),
            development_areas: Vec::new(),
        },
        CognitiveResult::ItemBank(r) => CognitiveProfile {
            overall_level,
            description: level_summary(overall_level).to_string(),
            domain_profiles: Vec::new(),
            strength_areas: r.strength_areas.clone(),
            development_areas: r.development_areas.clone(),
        },
    }
}
