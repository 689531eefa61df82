//! Query pipeline: gate -> classify -> fetch/filter -> compose

use std::fmt;

use tracing::info;
use tracing::instrument;

use crate::config::AppConfig;
use crate::docs::DocsScraper;
use crate::docs::DocumentFetcher;
use crate::docs::HttpFetcher;
use crate::errors::Result;
use crate::platform::Platform;
use crate::query::is_relevant;
use crate::query::process_query;
use crate::query::Intent;
use crate::response::generate_response;
use crate::response::OUT_OF_DOMAIN_MESSAGE;
use crate::response::SPECIFY_PLATFORM_MESSAGE;

/// Terminal state reached for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Failed the relevance gate
    OutOfDomain,
    /// Passed the gate but named no platform
    UnspecifiedPlatform,
    /// Went through retrieval; `text` may carry a degraded fetch message
    Answered {
        intent: Option<Intent>,
        platform: Platform,
        text: String,
    },
}

impl Reply {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::OutOfDomain => OUT_OF_DOMAIN_MESSAGE,
            Self::UnspecifiedPlatform => SPECIFY_PLATFORM_MESSAGE,
            Self::Answered { text, .. } => text,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// How-to assistant over the four platforms' documentation
pub struct Chatbot<F> {
    scraper: DocsScraper<F>,
}

impl Chatbot<HttpFetcher> {
    /// Create a chatbot that fetches documentation over HTTP
    ///
    /// # Errors
    /// - HTTP client build errors
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(HttpFetcher::new(&config.fetch)?))
    }
}

impl<F: DocumentFetcher> Chatbot<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            scraper: DocsScraper::new(fetcher),
        }
    }

    pub fn scraper(&self) -> &DocsScraper<F> {
        &self.scraper
    }

    /// Run one query through the pipeline
    #[instrument(skip(self))]
    pub async fn answer(&self, query: &str) -> Reply {
        if !is_relevant(query) {
            info!("Query rejected as out of domain");
            return Reply::OutOfDomain;
        }

        let classification = process_query(query);
        let Some(platform) = classification.platform else {
            info!("No platform named in query");
            return Reply::UnspecifiedPlatform;
        };

        let extracted_info = self.scraper.scrape_docs(platform, query).await;
        let text = generate_response(classification.intent, platform, &extracted_info);

        Reply::Answered {
            intent: classification.intent,
            platform,
            text,
        }
    }

    /// Answer a query with reply text
    pub async fn chatbot(&self, query: &str) -> String {
        self.answer(query).await.to_string()
    }
}
