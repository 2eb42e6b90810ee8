use std::env;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer};
use uuid::Uuid;

/// Initialize structured logging for a binary.
///
/// Log lines always go to stderr: stdout carries the JSON documents the
/// CLI and the interpretation agent exchange.
pub fn init_logging(service_name: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // dev, staging or prod
    let environment = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

    let installed = if environment == "prod" || environment == "staging" {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_target(true)
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(env_filter);

        tracing_subscriber::registry().with(json_layer).try_init()
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .finish()
            .try_init()
    };

    // A second call (tests, embedding) keeps the first subscriber.
    if installed.is_err() {
        return;
    }

    tracing::debug!(
        service = %service_name,
        environment = %environment,
        "logging initialized"
    );
}

/// Reuse the caller's correlation id or mint a fresh one.
pub fn ensure_correlation_id(existing_id: Option<Uuid>) -> Uuid {
    existing_id.unwrap_or_else(Uuid::new_v4)
}
