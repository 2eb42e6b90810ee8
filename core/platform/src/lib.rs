pub mod errors;
pub mod logging;
pub mod metrics;
pub mod spans;

pub use errors::{PlatformError, PlatformResult};
pub use logging::{ensure_correlation_id, init_logging};
pub use metrics::{init_metrics, record_counter, record_histogram, record_labeled_counter};
pub use spans::{correlation_span, provider_span};
