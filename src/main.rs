use cdpbot::chatbot::Chatbot;
use cdpbot::cli::handle_ask_command;
use cdpbot::cli::handle_chat_command;
use cdpbot::cli::handle_config_command;
use cdpbot::cli::handle_platforms_command;
use cdpbot::cli::query_text;
use cdpbot::cli::Cli;
use cdpbot::cli::Commands;
use cdpbot::config::AppConfig;
use cdpbot::Result;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging; the guard must outlive every log call
    let _log_guard = if cli.verbose {
        cdpbot::logging::init_logging_with_level("debug", &config.logging)?
    } else {
        cdpbot::logging::init_logging(&config.logging)?
    };
    info!("Configuration loaded successfully");

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let bot = Chatbot::from_config(&config)?;
            handle_chat_command(&bot).await?;
        }
        Commands::Ask { query } => {
            let bot = Chatbot::from_config(&config)?;
            handle_ask_command(&bot, &query_text(&query)).await?;
        }
        Commands::Platforms => handle_platforms_command()?,
        Commands::Config => handle_config_command(&config)?,
    }

    Ok(())
}
