// === INTERPRETATION PAYLOAD TYPES ===
// Field names follow the JSON contract of the interpretation prompt template (camelCase).

use serde::{Deserialize, Serialize};

use crate::assessment::{ReliabilityStatus, TendencyLevel};
use crate::cognitive::{CognitiveDomain, CognitiveLevel, ItemType};

/// Intended use of the generated narrative.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisPurpose {
    IndividualReport,
    TeamMatching,
    OneOnOneSupport,
    ManagerReport,
    TeamBuilding,
    CareerDevelopment,
}

impl AnalysisPurpose {
    pub const ALL: [AnalysisPurpose; 6] = [
        AnalysisPurpose::IndividualReport,
        AnalysisPurpose::TeamMatching,
        AnalysisPurpose::OneOnOneSupport,
        AnalysisPurpose::ManagerReport,
        AnalysisPurpose::TeamBuilding,
        AnalysisPurpose::CareerDevelopment,
    ];
}

impl std::str::FromStr for AnalysisPurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual_report" => Ok(AnalysisPurpose::IndividualReport),
            "team_matching" => Ok(AnalysisPurpose::TeamMatching),
            "one_on_one_support" => Ok(AnalysisPurpose::OneOnOneSupport),
            "manager_report" => Ok(AnalysisPurpose::ManagerReport),
            "team_building" => Ok(AnalysisPurpose::TeamBuilding),
            "career_development" => Ok(AnalysisPurpose::CareerDevelopment),
            other => Err(format!("unknown analysis purpose: {}", other)),
        }
    }
}

/// Categorical, number-free view of one trait.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TraitAIRepresentation {
    pub tendency_level: TendencyLevel,
    pub description: String,
    pub strengths: Vec<String>,
    pub considerations: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BigFiveProfile {
    #[serde(rename = "EX")]
    pub extraversion: TraitAIRepresentation,
    #[serde(rename = "CO")]
    pub conscientiousness: TraitAIRepresentation,
    #[serde(rename = "AG")]
    pub agreeableness: TraitAIRepresentation,
    #[serde(rename = "NE")]
    pub emotional_stability: TraitAIRepresentation,
    #[serde(rename = "OP")]
    pub openness: TraitAIRepresentation,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DarkTriadProfile {
    #[serde(rename = "MA")]
    pub machiavellianism: TraitAIRepresentation,
    #[serde(rename = "NA")]
    pub narcissism: TraitAIRepresentation,
    #[serde(rename = "PS")]
    pub psychopathy: TraitAIRepresentation,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityProfile {
    pub big_five: BigFiveProfile,
    pub dark_triad: DarkTriadProfile,
    pub empathy: TraitAIRepresentation,
    pub work_style: TraitAIRepresentation,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CognitiveDomainProfile {
    pub domain: CognitiveDomain,
    pub level: CognitiveLevel,
    pub description: String,
}

/// Cognitive summary, kept separate from the personality profile.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveProfile {
    pub overall_level: CognitiveLevel,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domain_profiles: Vec<CognitiveDomainProfile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strength_areas: Vec<ItemType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub development_areas: Vec<ItemType>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayloadMetadata {
    pub version: String,
    /// RFC 3339
    pub generated_at: String,
    pub reliability_status: ReliabilityStatus,
    pub analysis_purpose: AnalysisPurpose,
}

/// Request body sent (inside the prompt) to the interpretation service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AIInputPayload {
    pub metadata: PayloadMetadata,
    pub personality_profile: PersonalityProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cognitive_profile: Option<CognitiveProfile>,
    pub reliability_note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

// === INTERPRETATION OUTPUT ===

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrengthItem {
    pub area: String,
    pub description: String,
    pub evidence_basis: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthOpportunity {
    pub area: String,
    pub suggestion: String,
    pub supporting_conditions: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationProfile {
    pub preferred_style: String,
    #[serde(default)]
    pub effective_approaches: Vec<String>,
    #[serde(default)]
    pub potential_frictions: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamFit {
    #[serde(default)]
    pub natural_roles: Vec<String>,
    #[serde(default)]
    pub complementary_profiles: Vec<String>,
    #[serde(default)]
    pub team_contributions: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveIntegration {
    pub learning_style: String,
    pub problem_solving_approach: String,
    #[serde(default)]
    pub development_recommendations: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InterpretationConfidence {
    pub level: ReliabilityStatus,
    #[serde(default)]
    pub factors: Vec<String>,
}

/// Structured narrative returned by the interpretation service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AIInterpretationOutput {
    pub strengths: Vec<StrengthItem>,
    pub growth_opportunities: Vec<GrowthOpportunity>,
    pub communication_profile: CommunicationProfile,
    pub team_fit: TeamFit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cognitive_integration: Option<CognitiveIntegration>,
    pub interpretation_confidence: InterpretationConfidence,
}

/// Where an interpretation came from. Fallback content is always labelled.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InterpretationSource {
    Generated,
    DeterministicFallback,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Interpretation {
    pub source: InterpretationSource,
    pub output: AIInterpretationOutput,
}
