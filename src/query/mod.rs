//! Query understanding
//!
//! - gate: cheap domain pre-filter run before anything else
//! - tokenizer: word-level tokens for cue matching
//! - classifier: intent and platform detection

pub mod classifier;
pub mod gate;
pub mod tokenizer;

pub use classifier::process_query;
pub use classifier::Classification;
pub use classifier::Intent;
pub use gate::is_relevant;
pub use tokenizer::tokenize;
