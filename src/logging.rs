//! Logging configuration for cdpbot
//!
//! Console output goes to stderr so that stdout only carries chatbot replies.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

use crate::config::LoggingConfig;
use crate::Result;

const LOG_FILE_PREFIX: &str = "cdpbot.log";

/// Initialize logging from configuration, honouring `RUST_LOG` when set.
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// the lifetime of the program.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| filter_for_level(&config.level));
    install(env_filter, config)
}

/// Initialize logging with custom log level, ignoring `RUST_LOG`
pub fn init_logging_with_level(level: &str, config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    install(filter_for_level(level), config)
}

fn filter_for_level(level: &str) -> EnvFilter {
    EnvFilter::new(format!("warn,cdpbot={level}"))
}

fn install(env_filter: EnvFilter, config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = if config.file_output {
        let logs_dir = Path::new(&config.directory);
        if !logs_dir.exists() {
            std::fs::create_dir_all(logs_dir)?;
        }

        let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(non_blocking)
            .with_ansi(false); // No colors in file
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| crate::CdpBotError::Custom(format!("Failed to initialize logging: {e}")))?;

    if config.file_output {
        tracing::debug!(
            "Log files will be saved to: {}/{}.YYYY-MM-DD",
            config.directory,
            LOG_FILE_PREFIX
        );
    }

    Ok(guard)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_directory() {
        let root = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "debug".to_string(),
            directory: root.path().join("logs").to_string_lossy().into_owned(),
            file_output: true,
        };

        // only initializer in this test binary, so the global subscriber is free
        let guard = init_logging_with_level("debug", &config).unwrap();
        assert!(guard.is_some());
        assert!(root.path().join("logs").is_dir());
    }
}
