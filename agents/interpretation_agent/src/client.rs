use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use assessment_engine::config_service::resolved_api_key;
use shared_types::ProviderConfig;

use crate::error::{InterpretationError, InterpretationResult};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-exp:free";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Anything that turns a prompt into free text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Label used in logs and error messages.
    fn provider_name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> InterpretationResult<String>;
}

/// Chat-completions client for OpenAI-compatible endpoints (OpenRouter,
/// OpenAI, Ollama, LM Studio).
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleGenerator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout_secs: u64,
}

impl OpenAiCompatibleGenerator {
    /// Fails with `NotConfigured` when the key is missing or still an
    /// unresolved `{{VAR}}` placeholder.
    pub fn from_config(config: &ProviderConfig) -> InterpretationResult<Self> {
        let api_key = resolved_api_key(config).ok_or_else(|| {
            InterpretationError::NotConfigured("api_key is missing or unresolved".to_string())
        })?;
        let timeout_secs = config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|source| InterpretationError::CallFailed {
                provider: "http-client".to_string(),
                source,
            })?;

        let model = if config.model_name.trim().is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            config.model_name.clone()
        };

        Ok(Self {
            client,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: api_key.to_string(),
            model,
            timeout_secs,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TextGenerator for OpenAiCompatibleGenerator {
    fn provider_name(&self) -> &str {
        &self.base_url
    }

    async fn generate(&self, prompt: &str) -> InterpretationResult<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": prompt}
            ]
        });

        debug!(url = %self.completions_url(), model = %self.model, "sending interpretation request");
        let res = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            // OpenRouter attribution headers; ignored elsewhere
            .header("HTTP-Referer", "http://localhost")
            .header("X-Title", "Assessment Interpreter")
            .json(&body)
            .send()
            .await
            .map_err(|source| {
                if source.is_timeout() {
                    InterpretationError::Timeout(self.timeout_secs)
                } else {
                    InterpretationError::CallFailed {
                        provider: self.base_url.clone(),
                        source,
                    }
                }
            })?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "provider returned an error status");
            return Err(InterpretationError::ProviderStatus {
                provider: self.base_url.clone(),
                status: status.as_u16(),
                body: text,
            });
        }

        let text = res.text().await.map_err(|source| InterpretationError::CallFailed {
            provider: self.base_url.clone(),
            source,
        })?;
        // Gateways and proxies answer 200 with HTML often enough; keep the body for diagnosis.
        let json: Value = serde_json::from_str(&text).map_err(|e| {
            warn!(error = %e, "provider body is not JSON");
            InterpretationError::InvalidResponseFormat {
                reason: format!("provider body is not JSON: {e}"),
                raw: text.clone(),
            }
        })?;

        extract_message_content(&json).ok_or_else(|| InterpretationError::EmptyResponse {
            provider: self.base_url.clone(),
        })
    }
}

/// `choices[0].message.content`, if present and non-blank.
pub fn extract_message_content(json: &Value) -> Option<String> {
    json["choices"][0]["message"]["content"]
        .as_str()
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}
