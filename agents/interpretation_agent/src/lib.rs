//! Turns scored assessments into a narrative via an OpenAI-compatible
//! text-generation service, with an explicit deterministic fallback.

pub mod client;
pub mod error;
pub mod fallback;
pub mod interpreter;
pub mod prompt;

pub use client::{OpenAiCompatibleGenerator, TextGenerator};
pub use error::{InterpretationError, InterpretationResult};
pub use fallback::deterministic_interpretation;
pub use interpreter::{interpret_request, parse_interpretation, Interpreter};
pub use prompt::build_prompt;
