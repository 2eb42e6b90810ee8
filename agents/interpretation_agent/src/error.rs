use thiserror::Error;

/// Failure of the narrative interpretation step. Statistical results are
/// never affected by any of these.
#[derive(Debug, Error)]
pub enum InterpretationError {
    #[error("interpretation provider is not configured: {0}")]
    NotConfigured(String),

    #[error("provider {provider} returned an empty response")]
    EmptyResponse { provider: String },

    #[error("provider response could not be parsed: {reason}")]
    InvalidResponseFormat { reason: String, raw: String },

    #[error("provider {provider} answered with HTTP {status}: {body}")]
    ProviderStatus {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("call to provider {provider} failed")]
    CallFailed {
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("interpretation prompt could not be built")]
    PromptSerialization(#[source] serde_json::Error),
}

impl InterpretationError {
    /// Stable code string for logs and agent responses.
    pub fn code(&self) -> &'static str {
        match self {
            InterpretationError::NotConfigured(_) => "API_KEY_NOT_CONFIGURED",
            InterpretationError::EmptyResponse { .. } => "EMPTY_RESPONSE",
            InterpretationError::InvalidResponseFormat { .. } => "INVALID_RESPONSE_FORMAT",
            InterpretationError::ProviderStatus { .. }
            | InterpretationError::CallFailed { .. }
            | InterpretationError::Timeout(_) => "API_CALL_FAILED",
            InterpretationError::PromptSerialization(_) => "PROMPT_BUILD_FAILED",
        }
    }

    /// HTTP-style status used in [`shared_types::ActionError::code`].
    pub fn status_code(&self) -> u16 {
        match self {
            InterpretationError::NotConfigured(_) => 503,
            InterpretationError::EmptyResponse { .. }
            | InterpretationError::InvalidResponseFormat { .. }
            | InterpretationError::ProviderStatus { .. }
            | InterpretationError::CallFailed { .. } => 502,
            InterpretationError::Timeout(_) => 504,
            InterpretationError::PromptSerialization(_) => 500,
        }
    }

    /// Unparsed provider text, when there was any.
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            InterpretationError::InvalidResponseFormat { raw, .. } => Some(raw),
            InterpretationError::ProviderStatus { body, .. } => Some(body),
            _ => None,
        }
    }
}

pub type InterpretationResult<T> = Result<T, InterpretationError>;
