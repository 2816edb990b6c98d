use async_trait::async_trait;
use brighella_domain::{DomainError, PageMetadata};

/// Fetches a page and recovers its title and favicon.
#[async_trait]
pub trait PageMetadataFetcher: Send + Sync {
    async fn fetch_metadata(&self, url: &str) -> Result<PageMetadata, DomainError>;
}
