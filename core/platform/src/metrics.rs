use std::io;
use std::net::SocketAddr;
use std::sync::OnceLock;

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Outcome of the first `init_metrics` call; later calls report the same.
static INSTALLED: OnceLock<Result<(), String>> = OnceLock::new();

/// Expose a Prometheus `/metrics` endpoint on `bind_addr` and describe the
/// assessment metrics.
///
/// Without this call every `record_*` helper is a no-op, which is what the
/// library crates rely on when used from tests.
pub fn init_metrics(bind_addr: SocketAddr) -> io::Result<()> {
    let outcome = INSTALLED.get_or_init(|| {
        PrometheusBuilder::new()
            .with_http_listener(bind_addr)
            .install()
            .map_err(|err| format!("failed to init metrics: {err}"))?;
        describe_assessment_metrics();
        Ok(())
    });

    outcome
        .clone()
        .map_err(|msg| io::Error::new(io::ErrorKind::Other, msg))
}

fn describe_assessment_metrics() {
    describe_counter!(
        "assessment_personality_scored_total",
        "Questionnaire sessions turned into domain scores"
    );
    describe_counter!(
        "assessment_reliability_flag_total",
        "Reliability verdicts, labelled by social-desirability flag"
    );
    describe_counter!(
        "assessment_cognitive_scored_total",
        "Cognitive sessions scored, either design"
    );
    describe_counter!(
        "interpretation_requests_total",
        "Calls made to the text-generation provider"
    );
    describe_counter!(
        "interpretation_failures_total",
        "Failed interpretations, labelled by error code"
    );
    describe_histogram!(
        "interpretation_request_duration_seconds",
        Unit::Seconds,
        "Provider round trip including response parsing"
    );
}

pub fn record_counter(name: &'static str, value: u64) {
    counter!(name).increment(value);
}

/// Counter with a single label, e.g. `assessment_reliability_flag_total{flag="low"}`.
pub fn record_labeled_counter(name: &'static str, label: &'static str, value: impl ToString) {
    counter!(name, label => value.to_string()).increment(1);
}

/// Histogram sample, in seconds for durations.
pub fn record_histogram(name: &'static str, value: f64) {
    histogram!(name).record(value);
}
