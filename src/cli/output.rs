//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the `cdpbot` CLI

use crate::platform::Platform;
use crate::AppConfig;

pub const WELCOME_MESSAGE: &str = "Welcome to the CDP How-To Chatbot! Ask me anything about Segment, mParticle, Lytics, or Zeotap.";
pub const GOODBYE_MESSAGE: &str = "Chatbot: Goodbye!";
pub const USER_PROMPT: &str = "\nYou: ";

/// Prefix a reply the way the chat session shows it
#[must_use]
pub fn format_reply(reply: &str) -> String {
    format!("Chatbot: {reply}")
}

/// Print supported platforms
pub fn print_platforms() {
    println!("Supported platforms:");
    for platform in Platform::ALL {
        println!(
            "  - {:<10} {}",
            platform.display_name(),
            platform.docs_url().unwrap_or("(no documentation registered)")
        );
    }
}

/// Print configuration
pub fn print_config(config: &AppConfig) {
    println!("cdpbot configuration:");
    println!();
    println!("Logging:");
    println!("  Level: {}", config.log_level());
    println!("  Directory: {}", config.logging.directory);
    println!("  File output: {}", config.logging.file_output);
    println!();
    println!("Fetch:");
    println!("  User-Agent: {}", config.user_agent());
    match config.timeout() {
        Some(timeout) => println!("  Timeout: {}s", timeout.as_secs()),
        None => println!("  Timeout: none"),
    }
}
