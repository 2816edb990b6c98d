use crate::ports::TxtLookup;
use brighella_domain::config::DnsConfig;
use brighella_domain::{DomainError, RecordPrefix, TxtRecordQuery};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Looks up `_frame.<host>` and returns its TXT value as the page to embed.
pub struct ResolveRedirectTargetUseCase {
    lookup: Arc<dyn TxtLookup>,
    dns: Arc<DnsConfig>,
}

impl ResolveRedirectTargetUseCase {
    pub fn new(lookup: Arc<dyn TxtLookup>, dns: Arc<DnsConfig>) -> Self {
        Self { lookup, dns }
    }

    /// The TXT value is returned verbatim; it is not checked to be a URL.
    #[instrument(skip(self), name = "resolve_redirect_target")]
    pub async fn execute(&self, host: &str) -> Result<String, DomainError> {
        let record = RecordPrefix::Target.record_name(&self.dns, host);
        let query = TxtRecordQuery::new(record.as_str(), self.dns.resolver);

        match self.lookup.lookup_txt(&query).await {
            Ok(target) => {
                info!(host = %host, record = %record, target = %target, "Found redirect target");
                Ok(target)
            }
            Err(e) => {
                warn!(host = %host, record = %record, error = %e, "Redirect target lookup failed");
                Err(DomainError::TargetNotFound {
                    host: host.to_string(),
                    record,
                    reason: e.to_string(),
                })
            }
        }
    }
}
