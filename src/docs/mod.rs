//! Documentation retrieval and passage extraction
//!
//! Fetch -> parse -> filter:
//! - fetcher: HTTP retrieval behind the [`DocumentFetcher`] trait
//! - parser: ordered h1/h2/h3/p elements of a page
//! - filter: keyword matching, section labelling and truncation

pub mod fetcher;
pub mod filter;
pub mod parser;

pub use fetcher::DocumentFetcher;
pub use fetcher::HttpFetcher;
pub use filter::DocsScraper;
pub use filter::DocumentSection;
pub use filter::RelevantPassage;
pub use filter::MAX_PASSAGES;
pub use filter::UNKNOWN_SECTION;
pub use parser::ParsedPage;
