use crate::ports::{PageMetadataFetcher, TxtLookup};
use brighella_domain::config::DnsConfig;
use brighella_domain::{Frame, FrameDefaults, Metadata, RecordPrefix, TxtRecordQuery};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Resolves title and favicon through three tiers:
///
/// 1. `_frame_title.<host>` TXT override
/// 2. `_frame_favicon.<host>` TXT override, then scraping the target page
/// 3. configured defaults
///
/// Tier 2 only runs when tier 1 found no title. A host publishing a title
/// override therefore always gets the default favicon, even if it also
/// publishes a favicon override.
pub struct ResolveMetadataUseCase {
    lookup: Arc<dyn TxtLookup>,
    fetcher: Arc<dyn PageMetadataFetcher>,
    dns: Arc<DnsConfig>,
    defaults: FrameDefaults,
}

impl ResolveMetadataUseCase {
    pub fn new(
        lookup: Arc<dyn TxtLookup>,
        fetcher: Arc<dyn PageMetadataFetcher>,
        dns: Arc<DnsConfig>,
        defaults: FrameDefaults,
    ) -> Self {
        Self {
            lookup,
            fetcher,
            dns,
            defaults,
        }
    }

    /// Never fails: every miss falls through to the next tier.
    #[instrument(skip(self), name = "resolve_metadata")]
    pub async fn execute(&self, host: &str, target: &str) -> Frame {
        let mut metadata = Metadata::default();

        if let Some(title) = self.lookup_override(RecordPrefix::Title, host).await {
            metadata.title = Some(title);
        } else {
            if let Some(favicon) = self.lookup_override(RecordPrefix::Favicon, host).await {
                metadata.favicon = Some(favicon);
            }

            if !metadata.is_complete() {
                self.scrape_into(&mut metadata, target).await;
            }
        }

        metadata.into_frame(target, &self.defaults)
    }

    async fn lookup_override(&self, prefix: RecordPrefix, host: &str) -> Option<String> {
        let record = prefix.record_name(&self.dns, host);
        let query = TxtRecordQuery::new(record.as_str(), self.dns.resolver);

        match self.lookup.lookup_txt(&query).await {
            Ok(value) if !value.is_empty() => {
                debug!(record = %record, value = %value, "Using DNS override");
                Some(value)
            }
            Ok(_) => {
                debug!(record = %record, "DNS override is empty");
                None
            }
            Err(e) if e.is_lookup_miss() => {
                debug!(record = %record, error = %e, "No DNS override");
                None
            }
            Err(e) => {
                warn!(record = %record, error = %e, "DNS override lookup failed");
                None
            }
        }
    }

    async fn scrape_into(&self, metadata: &mut Metadata, target: &str) {
        match self.fetcher.fetch_metadata(target).await {
            Ok(page) => {
                debug!(
                    target = %target,
                    title = %page.title,
                    favicon = %page.favicon,
                    "Scraped page metadata"
                );
                metadata.set_title_if_missing(page.title);
                metadata.set_favicon_if_missing(page.favicon);
            }
            Err(e) => {
                warn!(target = %target, error = %e, "Page metadata unavailable");
            }
        }
    }
}
