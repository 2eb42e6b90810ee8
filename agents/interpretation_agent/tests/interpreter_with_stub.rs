use std::sync::Mutex;

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use assessment_engine::{all_questions, calculate_reliability_metrics, shape_ai_payload, ScoreTransformer};
use interpretation_agent::{InterpretationError, InterpretationResult, Interpreter, TextGenerator};
use shared_types::{
    AIInputPayload, AnalysisPurpose, AnswerValue, PersonalityAnswer, ReliabilityStatus,
};

/// Replays a canned reply and remembers the prompt it was given.
struct StubGenerator {
    reply: Option<String>,
    last_prompt: Mutex<Option<String>>,
}

impl StubGenerator {
    fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            last_prompt: Mutex::new(None),
        }
    }

    fn silent() -> Self {
        Self {
            reply: None,
            last_prompt: Mutex::new(None),
        }
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    fn provider_name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, prompt: &str) -> InterpretationResult<String> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.reply
            .clone()
            .ok_or_else(|| InterpretationError::EmptyResponse {
                provider: "stub".to_string(),
            })
    }
}

fn payload(purpose: AnalysisPurpose) -> AIInputPayload {
    let answers: Vec<PersonalityAnswer> = all_questions()
        .iter()
        .enumerate()
        .map(|(i, q)| PersonalityAnswer::new(&q.id, AnswerValue::new((i % 5) as u8 + 1).unwrap()))
        .collect();
    let scores = ScoreTransformer::default().transform_all_scores(&answers, all_questions());
    let reliability = calculate_reliability_metrics(&answers, all_questions());
    shape_ai_payload(&scores, &reliability, purpose, None)
}

const REPLY: &str = r#"Sure! Here is the interpretation:
{
  "strengths": [
    {"area": "Structured work", "description": "Prefers a planned approach", "evidenceBasis": "Conscientiousness"}
  ],
  "growthOpportunities": [
    {"area": "Delegation", "suggestion": "Share planning early", "supportingConditions": "Clear ownership"}
  ],
  "communicationProfile": {
    "preferredStyle": "Concise and factual",
    "effectiveApproaches": ["Written summaries"],
    "potentialFrictions": []
  },
  "teamFit": {
    "naturalRoles": ["Coordinator"],
    "complementaryProfiles": ["Idea generators"],
    "teamContributions": ["Keeps delivery on track"]
  },
  "interpretationConfidence": {"level": "high", "factors": ["Consistent answers"]}
}
Let me know if you need more."#;

#[tokio::test]
async fn parses_reply_wrapped_in_prose() {
    let interpreter = Interpreter::new(StubGenerator::replying(REPLY));
    let output = interpreter
        .interpret(&payload(AnalysisPurpose::TeamBuilding))
        .await
        .expect("stub reply should parse");

    assert_eq!(output.strengths.len(), 1);
    assert_eq!(output.strengths[0].area, "Structured work");
    assert_eq!(output.team_fit.natural_roles, vec!["Coordinator".to_string()]);
    assert_eq!(output.interpretation_confidence.level, ReliabilityStatus::High);
}

#[tokio::test]
async fn prompt_carries_purpose_and_no_numbers() {
    let interpreter = Interpreter::new(StubGenerator::replying(REPLY));
    interpreter
        .interpret(&payload(AnalysisPurpose::CareerDevelopment))
        .await
        .expect("stub reply should parse");

    let prompt = interpreter
        .generator()
        .last_prompt
        .lock()
        .unwrap()
        .clone()
        .expect("generator was called");
    assert!(prompt.contains("Provide information for career development."));
    assert!(prompt.contains("\"bigFive\""));
    for numeric_field in ["tScore", "percentile", "rawScore", "zScore"] {
        assert!(!prompt.contains(numeric_field), "{numeric_field} leaked into the prompt");
    }
}

#[tokio::test]
async fn empty_reply_is_a_typed_error() {
    let interpreter = Interpreter::new(StubGenerator::silent());
    let err = interpreter
        .interpret(&payload(AnalysisPurpose::IndividualReport))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "EMPTY_RESPONSE");
    assert_eq!(err.status_code(), 502);
}

#[tokio::test]
async fn reply_without_json_is_invalid_format() {
    let interpreter = Interpreter::new(StubGenerator::replying("I'd rather not."));
    let err = interpreter
        .interpret(&payload(AnalysisPurpose::ManagerReport))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "INVALID_RESPONSE_FORMAT");
    assert_eq!(err.raw_output(), Some("I'd rather not."));
}
