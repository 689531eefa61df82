//! Unit tests for configuration module
//!
//! These tests validate configuration parsing, defaults, and validation.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use crate::config::*;
    use crate::errors::CdpBotError;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // ====== Default Value Tests ======

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();

        assert_eq!(config.log_level(), "info");
        assert_eq!(config.logging.directory, "logs");
        assert!(config.logging.file_output);
        assert_eq!(config.user_agent(), "Mozilla/5.0");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let fetch = FetchConfig {
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 0,
        };
        assert_eq!(fetch.timeout(), None);
    }

    // ====== File Loading Tests ======

    #[test]
    fn test_from_file_full() {
        let file = write_config(
            r#"
[logging]
level = "debug"
directory = "/tmp/cdpbot-logs"
file_output = false

[fetch]
user_agent = "Mozilla/5.0 (X11; Linux x86_64)"
timeout_secs = 5
"#,
        );

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.logging.directory, "/tmp/cdpbot-logs");
        assert!(!config.logging.file_output);
        assert_eq!(config.user_agent(), "Mozilla/5.0 (X11; Linux x86_64)");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_from_file_partial_uses_defaults() {
        let file = write_config("[fetch]\ntimeout_secs = 0\n");

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.user_agent(), "Mozilla/5.0");
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_from_empty_file() {
        let file = write_config("");
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.user_agent(), "Mozilla/5.0");
    }

    #[test]
    fn test_invalid_toml() {
        let file = write_config("[fetch\nuser_agent = ");
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CdpBotError::TomlParsing(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::from_file("/definitely/not/here/cdpbot.toml").unwrap_err();
        assert!(matches!(err, CdpBotError::Io(_)));
    }

    // ====== Validation Tests ======

    #[test]
    fn test_empty_user_agent_rejected() {
        let file = write_config("[fetch]\nuser_agent = \"  \"\n");
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CdpBotError::Config(_)));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let text = toml::to_string(&AppConfig::default()).unwrap();
        let config: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(config.user_agent(), "Mozilla/5.0");
        assert_eq!(config.fetch.timeout_secs, 30);
    }
}
