//! Scoring core for the personality and cognitive assessment.
//!
//! Everything here is synchronous and deterministic given its inputs (and,
//! for stimulus generation, the caller's random source). Interpretation
//! text generation lives in the interpretation agent.

pub mod cognitive;
pub mod config_service;
pub mod normal;
pub mod norms;
pub mod payload;
pub mod personality;
pub mod question_bank;
pub mod reliability;

pub use cognitive::{
    calculate_cognitive_result, percentile_to_level, CognitiveScorer, CognitiveSessionInput,
    ItemBankScorer, TrialBatteryScorer,
};
pub use config_service::{load_config, load_dotenv, parse_config, transformer_from_config};
pub use normal::{normal_cdf, z_to_percentile};
pub use payload::shape_ai_payload;
pub use personality::{tendency_description, transform_all_scores, ScoreTransformer};
pub use question_bank::{all_questions, question_summary, shuffle_questions};
pub use reliability::calculate_reliability_metrics;
