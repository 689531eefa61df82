//! Intent and platform classification
//!
//! Both decisions are taken independently in one left-to-right pass over the
//! query tokens. Every matching token re-assigns its slot, so when a query
//! names several platforms the last one mentioned wins.

use std::fmt;

use tracing::debug;

use crate::platform::Platform;
use crate::query::tokenizer::tokenize;

/// Tokens that mark a query as asking how to do something
pub const HOW_TO_CUES: [&str; 7] = ["how", "steps", "guide", "setup", "create", "build", "integrate"];

/// Coarse classification of what the user wants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    HowTo,
}

impl Intent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HowTo => "how-to",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one query; either half may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub intent: Option<Intent>,
    pub platform: Option<Platform>,
}

/// Classify a query into an optional intent and an optional platform
pub fn process_query(query: &str) -> Classification {
    let mut result = Classification::default();

    for token in tokenize(query) {
        if HOW_TO_CUES.iter().any(|cue| token.eq_ignore_ascii_case(cue)) {
            result.intent = Some(Intent::HowTo);
        }
        if let Some(platform) = Platform::from_word(token) {
            result.platform = Some(platform);
        }
    }

    debug!(
        intent = ?result.intent,
        platform = ?result.platform,
        "classified query"
    );
    result
}
