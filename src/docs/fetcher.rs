//! Documentation page retrieval

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use reqwest::StatusCode;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::config::FetchConfig;
use crate::errors::CdpBotError;
use crate::errors::FetchError;
use crate::errors::Result;

/// Something that can turn a documentation URL into raw HTML.
///
/// Implementations must report any non-200 response as
/// [`FetchError::Status`] and any transport failure as
/// [`FetchError::Transport`]. Callers never retry.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError>;
}

/// HTTP fetcher sending a browser-like `User-Agent`
pub struct HttpFetcher {
    client: Client,
    user_agent: String,
}

impl HttpFetcher {
    /// Create a new fetcher from fetch settings
    ///
    /// # Errors
    /// - HTTP client build errors (invalid TLS backend configuration)
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(CdpBotError::Http)?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
        })
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        let url = url::Url::parse(url).map_err(|e| FetchError::Transport(e.to_string()))?;
        info!("Fetching documentation from {}", url);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Documentation request returned {}", status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(&FetchConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success_sends_user_agent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/docs/")
            .match_header("user-agent", "Mozilla/5.0")
            .with_status(200)
            .with_body("<h1>Docs</h1>")
            .create_async()
            .await;

        let body = fetcher()
            .fetch(&format!("{}/docs/", server.url()))
            .await
            .unwrap();

        assert_eq!(body, "<h1>Docs</h1>");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_status_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(404)
            .with_body("missing")
            .create_async()
            .await;

        let err = fetcher()
            .fetch(&format!("{}/", server.url()))
            .await
            .unwrap_err();

        assert_eq!(err, FetchError::Status(404));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_non_200_success_is_still_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(204)
            .create_async()
            .await;

        let err = fetcher()
            .fetch(&format!("{}/", server.url()))
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::Status(204));
    }

    #[tokio::test]
    async fn test_transport_failure() {
        // port 9 (discard) on localhost is not expected to accept connections
        let err = fetcher().fetch("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
        assert!(err.to_string().starts_with("Error fetching documentation: "));
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let err = fetcher().fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[test]
    fn test_custom_user_agent() {
        let config = FetchConfig {
            user_agent: "cdpbot-test".to_string(),
            timeout_secs: 0,
        };
        assert_eq!(HttpFetcher::new(&config).unwrap().user_agent(), "cdpbot-test");
    }
}
