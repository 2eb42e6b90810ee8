use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

// Assessment data model shared by the scoring engine, the interpretation agent, and the CLI
pub mod assessment;
pub mod cognitive;
pub mod interpretation;

pub use assessment::*;
pub use cognitive::*;
pub use interpretation::*;

/// Arbitrary structured payload, whose schema depends on the agent and action.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Payload(pub Value);

/// API version for all agent-facing contracts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApiVersion {
    V0,
    V1,
}

/// Correlation identifier used to join logs across the CLI and agents.
pub type CorrelationId = uuid::Uuid;

/// Convenience constant for current stable version.
pub const API_VERSION_CURRENT: ApiVersion = ApiVersion::V1;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ActionRequest {
    /// Unique ID for this specific agent invocation.
    pub request_id: Uuid,

    /// Optional protocol version. If omitted, the agent treats this as V0.
    #[serde(default)]
    pub api_version: Option<ApiVersion>,

    /// Logical agent identifier (e.g. "interpretation_agent").
    pub tool: String,

    /// Logical action name within the agent (e.g. "interpret").
    pub action: String,

    /// High-level natural-language or contextual description.
    #[serde(default)]
    pub context: String,

    /// Correlation identifier propagated from the caller.
    #[serde(default)]
    pub correlation_id: Option<CorrelationId>,

    /// Structured payload, whose schema depends on the agent and action.
    pub payload: Payload,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ActionResult {
    pub output_type: String,
    pub data: String,
    pub metadata: Option<serde_json::Value>,
}

/// Structured error response for agent invocations.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ActionError {
    /// Error code for categorization (non-zero)
    pub code: u16,

    /// Short user-friendly error summary
    pub message: String,

    /// Full diagnostic message with detailed error information
    pub detail: String,

    /// The raw, unparsed output from the upstream service (if available)
    pub raw_output: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ActionResponse {
    /// Echo of the request_id provided in ActionRequest.
    pub request_id: Uuid,

    #[serde(default)]
    pub api_version: Option<ApiVersion>,

    /// Status of the agent invocation ("success" or "error").
    pub status: String,

    /// Agent-specific numeric code (0 for success, non-zero for error).
    pub code: u16,

    /// Result payload when status == "success".
    pub result: Option<ActionResult>,

    /// Structured error information when status != "success".
    pub error: Option<ActionError>,

    #[serde(default)]
    pub correlation_id: Option<CorrelationId>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model_name: String,
    /// Hard timeout for one interpretation request
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LLMConfig {
    pub default_provider: String,
    pub openrouter: Option<ProviderConfig>,
    pub gemini: Option<ProviderConfig>,
    pub openai: Option<ProviderConfig>,
    pub ollama: Option<ProviderConfig>,
    pub lmstudio: Option<ProviderConfig>,
}

impl LLMConfig {
    pub fn provider(&self, name: &str) -> Option<&ProviderConfig> {
        match name {
            "openrouter" => self.openrouter.as_ref(),
            "gemini" => self.gemini.as_ref(),
            "openai" => self.openai.as_ref(),
            "ollama" => self.ollama.as_ref(),
            "lmstudio" => self.lmstudio.as_ref(),
            _ => None,
        }
    }

    pub fn default_provider_config(&self) -> Option<&ProviderConfig> {
        self.provider(&self.default_provider)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub llm: LLMConfig,
    /// Per-domain overrides of the built-in personality norm table
    #[serde(default)]
    pub norms: Option<BTreeMap<PersonalityDomain, NormDistribution>>,
}

/// Payload of an `interpret` action sent to the interpretation agent.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InterpretationRequestV1 {
    pub domain_scores: Vec<DomainScore>,
    pub reliability_metrics: ReliabilityMetrics,
    pub purpose: AnalysisPurpose,
    #[serde(default)]
    pub cognitive_result: Option<CognitiveResult>,
    pub config: ProviderConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn action_request_defaults_optional_fields() {
        let value = json!({
            "request_id": "3f2504e0-4f89-41d3-9a0c-0305e82c3301",
            "tool": "interpretation_agent",
            "action": "interpret",
            "payload": {}
        });

        let req: ActionRequest =
            serde_json::from_value(value).expect("deserialization should succeed");
        assert!(req.api_version.is_none());
        assert!(req.correlation_id.is_none());
        assert_eq!(req.context, "");
    }

    #[test]
    fn action_response_with_error_round_trip() {
        let original = ActionResponse {
            request_id: Uuid::new_v4(),
            api_version: Some(ApiVersion::V1),
            status: "error".to_string(),
            code: 503,
            result: None,
            error: Some(ActionError {
                code: 503,
                message: "API_KEY_NOT_CONFIGURED".to_string(),
                detail: "no API key for provider openrouter".to_string(),
                raw_output: None,
            }),
            correlation_id: Some(Uuid::new_v4()),
        };

        let json = serde_json::to_string(&original).expect("serialization should succeed");
        let decoded: ActionResponse =
            serde_json::from_str(&json).expect("deserialization should succeed");

        assert_eq!(decoded.status, "error");
        assert_eq!(decoded.code, 503);
        let error = decoded.error.expect("error should survive the round trip");
        assert_eq!(error.message, "API_KEY_NOT_CONFIGURED");
    }

    #[test]
    fn domains_and_levels_use_wire_names() {
        assert_eq!(serde_json::to_value(PersonalityDomain::Ex).unwrap(), json!("EX"));
        assert_eq!(
            serde_json::to_value(TendencyLevel::VeryCharacteristic).unwrap(),
            json!("very_characteristic")
        );
        assert_eq!(serde_json::to_value(ItemType::Rotation3d).unwrap(), json!("3d_rotation"));
        assert_eq!(
            serde_json::to_value(DomainCategory::DarkTriad).unwrap(),
            json!("darktriad")
        );
    }

    #[test]
    fn answer_value_rejects_out_of_scale() {
        let ok: Result<PersonalityAnswer, _> =
            serde_json::from_value(json!({"questionId": "EX-1", "value": 4}));
        assert_eq!(ok.unwrap().value.get(), 4);

        let bad: Result<PersonalityAnswer, _> =
            serde_json::from_value(json!({"questionId": "EX-1", "value": 6}));
        assert!(bad.is_err());
    }

    #[test]
    fn reverse_keying_is_an_involution() {
        for v in 1..=5u8 {
            let value = AnswerValue::new(v).unwrap();
            assert_eq!(value.reversed().get(), 6 - v);
            assert_eq!(value.reversed().reversed(), value);
        }
    }

    #[test]
    fn config_parses_norm_overrides() {
        let value = json!({
            "llm": {
                "default_provider": "openrouter",
                "openrouter": { "api_key": "k", "base_url": null, "model_name": "m" },
                "gemini": null, "openai": null, "ollama": null, "lmstudio": null
            },
            "norms": { "EX": { "mean": 3.0, "sd": 1.0, "n": 500 } }
        });

        let config: AppConfig = serde_json::from_value(value).expect("config should parse");
        let norms = config.norms.expect("norm overrides present");
        assert_eq!(norms[&PersonalityDomain::Ex].n, 500);
        assert_eq!(
            config.llm.default_provider_config().map(|p| p.model_name.as_str()),
            Some("m")
        );
    }

    #[test]
    fn cognitive_result_is_tagged_by_paradigm() {
        let result = CognitiveResult::ItemBank(ItemBankResult {
            raw_scores: ItemBankRawScores {
                matrix_reasoning: 2,
                letter_number_series: 2,
                verbal_reasoning: 2,
                rotation_3d: 2,
                total: 8,
            },
            total_items: 16,
            normalized_scores: NormalizedScores {
                percentile_rank: 50,
                standard_score: 100,
                relative_position: CognitiveLevel::Average,
            },
            type_breakdown: BTreeMap::new(),
            strength_areas: vec![],
            development_areas: vec![],
            timing_data: ItemBankTiming {
                total_time_ms: None,
                average_time_per_item_ms: 0.0,
                time_by_type: BTreeMap::new(),
            },
        });

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["paradigm"], json!("item_bank"));
        let decoded: CognitiveResult = serde_json::from_value(value).unwrap();
        assert_eq!(decoded.level(), CognitiveLevel::Average);
        assert_eq!(decoded.standard_score(), 100);
    }
}
