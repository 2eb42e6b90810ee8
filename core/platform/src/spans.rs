use tracing::{info_span, Span};
use uuid::Uuid;

/// Root span of one scoring or interpretation run; every log line emitted
/// inside it carries the correlation id.
pub fn correlation_span(correlation_id: Uuid, operation: &str) -> Span {
    info_span!("assessment_run", operation, correlation_id = %correlation_id)
}

/// Child span around a single call to a text-generation provider.
pub fn provider_span(provider: &str, purpose: &str) -> Span {
    info_span!("provider_call", provider, purpose)
}
