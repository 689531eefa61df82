//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "cdpbot")]
#[command(about = "How-to assistant for Segment, mParticle, Lytics and Zeotap documentation")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML configuration file (default: ./cdpbot.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Defaults to an interactive chat session
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session
    Chat,
    /// Answer a single question and exit
    Ask {
        /// The question, e.g. "How do I create a source in Segment?"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// List supported platforms and their documentation URLs
    Platforms,
    /// Show current configuration
    Config,
}

/// Joined question text for `ask`
#[must_use]
pub fn query_text(words: &[String]) -> String {
    words.join(" ")
}
