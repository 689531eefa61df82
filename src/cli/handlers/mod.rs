//! CLI command handlers module
//!
//! - chat: interactive session loop
//! - ask: single-shot question
//! - info: platforms and configuration display

pub mod ask;
pub mod chat;
pub mod info;

pub use ask::*;
pub use chat::*;
pub use info::*;
