use std::time::Instant;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{error, info, Instrument};

use assessment_engine::shape_ai_payload;
use shared_types::{AIInputPayload, AIInterpretationOutput, InterpretationRequestV1};

use crate::client::{OpenAiCompatibleGenerator, TextGenerator};
use crate::error::{InterpretationError, InterpretationResult};
use crate::prompt::build_prompt;

// Outermost brace pair; providers like to wrap the object in prose or code fences.
static JSON_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON object pattern is valid"));

/// Pulls the structured output out of free provider text.
pub fn parse_interpretation(text: &str) -> InterpretationResult<AIInterpretationOutput> {
    let candidate = JSON_OBJECT
        .find(text)
        .ok_or_else(|| InterpretationError::InvalidResponseFormat {
            reason: "no JSON object in response".to_string(),
            raw: text.to_string(),
        })?;

    serde_json::from_str(candidate.as_str()).map_err(|e| InterpretationError::InvalidResponseFormat {
        reason: e.to_string(),
        raw: text.to_string(),
    })
}

pub struct Interpreter<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> Interpreter<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub async fn interpret(&self, payload: &AIInputPayload) -> InterpretationResult<AIInterpretationOutput> {
        let prompt = build_prompt(payload).map_err(InterpretationError::PromptSerialization)?;

        let started = Instant::now();
        platform::record_counter("interpretation_requests_total", 1);
        let purpose = format!("{:?}", payload.metadata.analysis_purpose);
        let span = platform::provider_span(self.generator.provider_name(), &purpose);
        let outcome = self
            .generator
            .generate(&prompt)
            .instrument(span)
            .await
            .and_then(|text| parse_interpretation(&text));
        platform::record_histogram(
            "interpretation_request_duration_seconds",
            started.elapsed().as_secs_f64(),
        );

        match &outcome {
            Ok(_) => info!(
                provider = self.generator.provider_name(),
                purpose = ?payload.metadata.analysis_purpose,
                "interpretation generated"
            ),
            Err(e) => {
                platform::record_labeled_counter("interpretation_failures_total", "code", e.code());
                error!(provider = self.generator.provider_name(), code = e.code(), error = %e, "interpretation failed");
            }
        }
        outcome
    }
}

/// Shapes the payload from the request and runs it against the configured provider.
pub async fn interpret_request(request: &InterpretationRequestV1) -> InterpretationResult<AIInterpretationOutput> {
    let generator = OpenAiCompatibleGenerator::from_config(&request.config)?;
    let payload = shape_ai_payload(
        &request.domain_scores,
        &request.reliability_metrics,
        request.purpose,
        request.cognitive_result.as_ref(),
    );
    Interpreter::new(generator).interpret(&payload).await
}
