//! Keyword relevance filter over fetched documentation

use std::fmt;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::docs::fetcher::DocumentFetcher;
use crate::docs::parser::ParsedPage;
use crate::errors::FetchError;
use crate::platform::Platform;

/// Number of passages kept, in document order
pub const MAX_PASSAGES: usize = 3;

/// Label used when no `h1`/`h2` precedes a matching element
pub const UNKNOWN_SECTION: &str = "Unknown Section";

/// A heading/body pair taken from a documentation page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSection {
    pub heading: String,
    pub body: String,
}

impl fmt::Display for DocumentSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.heading, self.body)
    }
}

/// A section whose body shares a keyword with the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevantPassage {
    pub section: DocumentSection,
    /// Index of the matching element among the page's structural elements
    pub position: usize,
}

/// Lowercase the query and split it on whitespace.
///
/// Punctuation is left attached, so "segment?" is a keyword of its own.
pub fn query_keywords(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Every element containing any keyword, labelled with its section, in document order
pub fn find_passages(page: &ParsedPage, keywords: &[String]) -> Vec<RelevantPassage> {
    page.elements()
        .iter()
        .enumerate()
        .filter(|(_, element)| {
            let text = element.text.to_lowercase();
            keywords.iter().any(|word| text.contains(word.as_str()))
        })
        .map(|(position, element)| {
            let heading = page
                .preceding_section_heading(position)
                .map_or_else(|| UNKNOWN_SECTION.to_string(), |h| h.text.trim().to_string());
            RelevantPassage {
                section: DocumentSection {
                    heading,
                    body: element.text.trim().to_string(),
                },
                position,
            }
        })
        .collect()
}

/// Render extracted passages as reply text
pub fn render_passages(platform: Platform, passages: &[RelevantPassage]) -> String {
    if passages.is_empty() {
        return format!(
            "No relevant information found in {} documentation.",
            platform.display_name()
        );
    }

    passages
        .iter()
        .take(MAX_PASSAGES)
        .map(|passage| passage.section.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Fetches a platform's documentation and picks the passages matching a query
pub struct DocsScraper<F> {
    fetcher: F,
}

impl<F: DocumentFetcher> DocsScraper<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch and filter, keeping at most [`MAX_PASSAGES`] passages.
    ///
    /// An empty vector means the page was fetched but nothing matched.
    pub async fn extract(
        &self,
        platform: Platform,
        query: &str,
    ) -> Result<Vec<RelevantPassage>, FetchError> {
        let url = platform.docs_url().ok_or(FetchError::UnknownPlatform)?;
        let html = self.fetcher.fetch(url).await?;
        let page = ParsedPage::parse(&html)?;

        let keywords = query_keywords(query);
        let mut passages = find_passages(&page, &keywords);
        info!(
            "{} of {} structural elements matched in {} docs",
            passages.len(),
            page.elements().len(),
            platform
        );

        passages.truncate(MAX_PASSAGES);
        Ok(passages)
    }

    /// Extract passages and render them, or the failure, as text.
    ///
    /// Never fails: fetch and parse errors become the returned message.
    pub async fn scrape_docs(&self, platform: Platform, query: &str) -> String {
        match self.extract(platform, query).await {
            Ok(passages) => {
                debug!("Rendering {} passages", passages.len());
                render_passages(platform, &passages)
            }
            Err(err) => {
                warn!("Documentation extraction failed for {}: {}", platform, err);
                err.to_string()
            }
        }
    }
}
