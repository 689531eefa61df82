//! Supported customer data platforms and their documentation roots

use std::fmt;
use std::str::FromStr;

/// One of the four platforms the assistant knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Segment,
    Mparticle,
    Lytics,
    Zeotap,
}

/// Platform to documentation root URL, fixed at build time
pub const DOCUMENTATION_URLS: [(Platform, &str); 4] = [
    (Platform::Segment, "https://segment.com/docs/?ref=nav"),
    (Platform::Mparticle, "https://docs.mparticle.com/"),
    (Platform::Lytics, "https://docs.lytics.com/"),
    (Platform::Zeotap, "https://docs.zeotap.com/home/en-us/"),
];

impl Platform {
    pub const ALL: [Self; 4] = [Self::Segment, Self::Mparticle, Self::Lytics, Self::Zeotap];

    /// Lowercase identifier, as it appears in queries
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Segment => "segment",
            Self::Mparticle => "mparticle",
            Self::Lytics => "lytics",
            Self::Zeotap => "zeotap",
        }
    }

    /// Identifier with only its first letter upper-cased ("Mparticle", not "mParticle")
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Segment => "Segment",
            Self::Mparticle => "Mparticle",
            Self::Lytics => "Lytics",
            Self::Zeotap => "Zeotap",
        }
    }

    /// Match a single word against the platform names, ignoring case
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.id().eq_ignore_ascii_case(word))
    }

    /// Documentation root URL for this platform, if one is registered
    #[must_use]
    pub fn docs_url(self) -> Option<&'static str> {
        DOCUMENTATION_URLS
            .iter()
            .find(|(platform, _)| *platform == self)
            .map(|(_, url)| *url)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_word(s.trim()).ok_or_else(|| format!("Unknown platform: {s}"))
    }
}
