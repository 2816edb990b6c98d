use super::extractor::extract_metadata;
use async_trait::async_trait;
use brighella_application::ports::PageMetadataFetcher;
use brighella_domain::{DomainError, PageMetadata};
use tracing::{debug, instrument};

/// Plain GET with the client defaults: no custom headers, default redirect
/// policy, no request timeout.
pub struct HttpPageMetadataFetcher {
    client: reqwest::Client,
    default_favicon: String,
}

impl HttpPageMetadataFetcher {
    pub fn new(default_favicon: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self::with_client(client, default_favicon)
    }

    pub fn with_client(client: reqwest::Client, default_favicon: impl Into<String>) -> Self {
        Self {
            client,
            default_favicon: default_favicon.into(),
        }
    }
}

#[async_trait]
impl PageMetadataFetcher for HttpPageMetadataFetcher {
    /// The status code is not inspected; error pages are parsed like any other.
    #[instrument(skip(self))]
    async fn fetch_metadata(&self, url: &str) -> Result<PageMetadata, DomainError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::PageFetch(format!("failed to fetch page: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::PageFetch(format!("failed to read page: {}", e)))?;

        debug!(
            status = status.as_u16(),
            body_len = body.len(),
            "Fetched target page"
        );

        Ok(extract_metadata(&body, url, &self.default_favicon))
    }
}
