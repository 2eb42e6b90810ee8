use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use assessment_engine::cognitive::stimulus::{
    generate_n_back, generate_simple_rt, generate_stroop, SimpleRtConfig,
};
use assessment_engine::{
    all_questions, calculate_cognitive_result, calculate_reliability_metrics, load_config,
    shape_ai_payload, transformer_from_config, CognitiveSessionInput, ScoreTransformer,
};
use interpretation_agent::{deterministic_interpretation, interpret_request};
use shared_types::{
    AIInputPayload, AnalysisPurpose, AppConfig, CognitiveResult, CognitiveTrial, DomainScore,
    Interpretation, InterpretationRequestV1, InterpretationSource, ItemAnswer, PersonalityAnswer,
    ProviderConfig, Question, ReliabilityMetrics,
};

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn read_config(path: Option<&Path>) -> Result<Option<AppConfig>> {
    path.map(|p| load_config(p).with_context(|| format!("failed to load config {}", p.display())))
        .transpose()
}

/// The statistical half of an assessment; always produced before any interpretation.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScoredAssessment {
    pub domain_scores: Vec<DomainScore>,
    pub reliability_metrics: ReliabilityMetrics,
}

pub fn score(
    answers_path: &Path,
    questions_path: Option<&Path>,
    config: Option<&AppConfig>,
) -> Result<ScoredAssessment> {
    let answers: Vec<PersonalityAnswer> = read_json(answers_path)?;
    let custom_questions: Option<Vec<Question>> = questions_path.map(read_json).transpose()?;
    let questions = custom_questions.as_deref().unwrap_or(all_questions());

    let transformer = config
        .map(transformer_from_config)
        .transpose()?
        .unwrap_or_default();
    let scored = score_answers(&transformer, &answers, questions);
    info!(
        answers = answers.len(),
        domains = scored.domain_scores.len(),
        "assessment scored"
    );
    Ok(scored)
}

pub fn score_answers(
    transformer: &ScoreTransformer,
    answers: &[PersonalityAnswer],
    questions: &[Question],
) -> ScoredAssessment {
    ScoredAssessment {
        domain_scores: transformer.transform_all_scores(answers, questions),
        reliability_metrics: calculate_reliability_metrics(answers, questions),
    }
}

pub enum CognitiveSource<'a> {
    Trials(&'a Path),
    Items(&'a Path),
}

pub fn cognitive(source: CognitiveSource<'_>, total_time_ms: Option<f64>) -> Result<CognitiveResult> {
    let input = match source {
        CognitiveSource::Trials(path) => {
            let trials: Vec<CognitiveTrial> = read_json(path)?;
            CognitiveSessionInput::Trials(trials)
        }
        CognitiveSource::Items(path) => {
            let answers: Vec<ItemAnswer> = read_json(path)?;
            CognitiveSessionInput::ItemBank(answers)
        }
    };
    Ok(calculate_cognitive_result(&input, total_time_ms))
}

pub fn payload(
    scored: &ScoredAssessment,
    purpose: AnalysisPurpose,
    cognitive_path: Option<&Path>,
) -> Result<AIInputPayload> {
    let cognitive: Option<CognitiveResult> = cognitive_path.map(read_json).transpose()?;
    Ok(shape_ai_payload(
        &scored.domain_scores,
        &scored.reliability_metrics,
        purpose,
        cognitive.as_ref(),
    ))
}

/// Provider settings for interpretation; an unconfigured provider surfaces
/// as `API_KEY_NOT_CONFIGURED` from the agent.
pub fn provider_config(config: Option<&AppConfig>) -> ProviderConfig {
    config
        .and_then(|c| c.llm.default_provider_config())
        .cloned()
        .unwrap_or(ProviderConfig {
            api_key: None,
            base_url: None,
            model_name: String::new(),
            timeout_secs: None,
        })
}

pub async fn interpret(
    scored: &ScoredAssessment,
    purpose: AnalysisPurpose,
    cognitive_result: Option<CognitiveResult>,
    provider: ProviderConfig,
    fallback_on_error: bool,
) -> Result<Interpretation> {
    let request = InterpretationRequestV1 {
        domain_scores: scored.domain_scores.clone(),
        reliability_metrics: scored.reliability_metrics.clone(),
        purpose,
        cognitive_result,
        config: provider,
    };

    match interpret_request(&request).await {
        Ok(output) => Ok(Interpretation {
            source: InterpretationSource::Generated,
            output,
        }),
        Err(e) if fallback_on_error => {
            warn!(code = e.code(), error = %e, "using deterministic fallback interpretation");
            Ok(deterministic_interpretation(
                &scored.domain_scores,
                &scored.reliability_metrics,
            ))
        }
        Err(e) => {
            let code = e.code();
            Err(anyhow::Error::new(e).context(format!("interpretation failed ({code})")))
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialTask {
    Nback,
    Stroop,
    SimpleRt,
}

pub fn generate_trials(task: TrialTask, count: usize, seed: u64, n_level: usize) -> Result<Value> {
    let mut rng = StdRng::seed_from_u64(seed);
    let value = match task {
        TrialTask::Nback => serde_json::to_value(generate_n_back(&mut rng, n_level, count))?,
        TrialTask::Stroop => serde_json::to_value(generate_stroop(&mut rng, count))?,
        TrialTask::SimpleRt => {
            let defaults = SimpleRtConfig::default();
            serde_json::to_value(generate_simple_rt(
                &mut rng,
                count,
                defaults.min_delay_ms,
                defaults.max_delay_ms,
            ))?
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use serde_json::json;
    use tempfile::NamedTempFile;

    fn json_file(value: &Value) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(value.to_string().as_bytes()).unwrap();
        file
    }

    fn answers_file(value: u8) -> NamedTempFile {
        let answers: Vec<Value> = all_questions()
            .iter()
            .map(|q| json!({"questionId": q.id, "value": value}))
            .collect();
        json_file(&Value::Array(answers))
    }

    #[test]
    fn scores_answers_from_file() {
        let file = answers_file(3);
        let scored = score(file.path(), None, None).unwrap();
        assert_eq!(scored.domain_scores.len(), 11);
        assert!(scored.domain_scores.iter().all(|s| s.item_count > 0));
    }

    #[test]
    fn malformed_answers_mention_the_file() {
        let file = json_file(&json!({"not": "a list"}));
        let err = score(file.path(), None, None).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn payload_carries_the_purpose() {
        let file = answers_file(4);
        let scored = score(file.path(), None, None).unwrap();
        let shaped = payload(&scored, AnalysisPurpose::TeamMatching, None).unwrap();
        assert_eq!(shaped.metadata.analysis_purpose, AnalysisPurpose::TeamMatching);
        assert!(shaped.cognitive_profile.is_none());
    }

    #[test]
    fn empty_item_session_scores_deterministically() {
        let file = json_file(&json!([]));
        let result = cognitive(CognitiveSource::Items(file.path()), None).unwrap();
        assert!(matches!(result, CognitiveResult::ItemBank(_)));
    }

    #[test]
    fn seeded_trial_generation_is_reproducible() {
        let a = generate_trials(TrialTask::Stroop, 12, 7, 2).unwrap();
        let b = generate_trials(TrialTask::Stroop, 12, 7, 2).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_array().map(Vec::len), Some(12));
    }

    #[tokio::test]
    async fn unconfigured_provider_fails_or_falls_back() {
        let file = answers_file(3);
        let scored = score(file.path(), None, None).unwrap();

        let err = interpret(
            &scored,
            AnalysisPurpose::IndividualReport,
            None,
            provider_config(None),
            false,
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("API_KEY_NOT_CONFIGURED"));

        let interpretation = interpret(
            &scored,
            AnalysisPurpose::IndividualReport,
            None,
            provider_config(None),
            true,
        )
        .await
        .unwrap();
        assert_eq!(interpretation.source, InterpretationSource::DeterministicFallback);
    }
}
