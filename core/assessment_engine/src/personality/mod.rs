//! Questionnaire scoring: raw means through z, T, percentile and tendency level.

pub mod descriptions;
pub mod transformer;

pub use descriptions::tendency_description;
pub use transformer::{
    domain_raw_scores, raw_score, t_score, tendency_level, transform_all_scores, DomainRawScore,
    ScoreTransformer,
};
