use thiserror::Error;

#[derive(Error, Debug)]
pub enum CdpBotError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Custom(String),
}

/// Failure while retrieving a documentation page.
///
/// The `Display` output of each variant is the exact text shown to the user
/// when a fetch degrades into the extracted information of a reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Platform documentation not found.")]
    UnknownPlatform,

    #[error("Error fetching documentation: Status Code {0}")]
    Status(u16),

    #[error("Error fetching documentation: {0}")]
    Transport(String),

    #[error("Error fetching documentation: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CdpBotError>;
