use async_trait::async_trait;
use brighella_domain::{DomainError, TxtRecordQuery};

/// Single TXT lookup against an upstream resolver.
///
/// Implementations send exactly one query per call: no cache, no retry.
#[async_trait]
pub trait TxtLookup: Send + Sync {
    /// Returns the first string of the first TXT record in the answer section.
    ///
    /// Errors distinguish transport failures (`DnsTransport`), non-NOERROR
    /// replies (`DnsResponseCode`) and answers without TXT data
    /// (`TxtRecordNotFound`).
    async fn lookup_txt(&self, query: &TxtRecordQuery) -> Result<String, DomainError>;
}
