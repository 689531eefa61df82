use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::errors::CdpBotError;

/// Default config file, looked up in the working directory
pub const CONFIG_FILE: &str = "cdpbot.toml";
pub const EXAMPLE_CONFIG_FILE: &str = "cdpbot.example.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for the daily rolling log file
    #[serde(default = "default_log_directory")]
    pub directory: String,
    #[serde(default = "default_file_output")]
    pub file_output: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> String {
    "logs".to_string()
}

const fn default_file_output() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: default_log_directory(),
            file_output: default_file_output(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds; 0 waits for the server indefinitely
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl FetchConfig {
    /// Request timeout, if one is enforced
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default file paths, falling back to defaults
    pub fn load() -> crate::Result<Self> {
        if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)
        } else if Path::new(EXAMPLE_CONFIG_FILE).exists() {
            tracing::warn!("Using {EXAMPLE_CONFIG_FILE}. Create {CONFIG_FILE} to customize settings.");
            Self::from_file(EXAMPLE_CONFIG_FILE)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject settings that cannot work at runtime
    pub fn validate(&self) -> crate::Result<()> {
        if self.fetch.user_agent.trim().is_empty() {
            return Err(CdpBotError::Config("fetch.user_agent must not be empty".to_string()));
        }
        if self.logging.level.trim().is_empty() {
            return Err(CdpBotError::Config("logging.level must not be empty".to_string()));
        }
        Ok(())
    }

    /// Get log level
    pub fn log_level(&self) -> &str {
        &self.logging.level
    }

    /// Get HTTP user agent
    pub fn user_agent(&self) -> &str {
        &self.fetch.user_agent
    }

    /// Get request timeout, if one is enforced
    pub fn timeout(&self) -> Option<Duration> {
        self.fetch.timeout()
    }
}
