//! cdpbot answers "how do I ..." questions about Segment, mParticle, Lytics
//! and Zeotap by pulling matching passages out of each platform's online
//! documentation.
//!
//! ```rust,no_run
//! use cdpbot::chatbot::Chatbot;
//! use cdpbot::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> cdpbot::Result<()> {
//!     let config = AppConfig::load()?;
//!     let bot = Chatbot::from_config(&config)?;
//!     println!("{}", bot.chatbot("How do I create a source in Segment?").await);
//!     Ok(())
//! }
//! ```

pub mod chatbot;
pub mod cli;
pub mod config;
pub mod docs;
pub mod errors;
pub mod logging;
pub mod platform;
pub mod query;
pub mod response;

#[cfg(test)]
mod config_tests;

pub use chatbot::Chatbot;
pub use chatbot::Reply;
pub use config::AppConfig;
pub use errors::*;
pub use platform::Platform;
