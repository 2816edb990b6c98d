use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid record name: {0}")]
    InvalidRecordName(String),

    #[error("DNS transport error: {0}")]
    DnsTransport(String),

    #[error("Answer from {record} not successful: {rcode}")]
    DnsResponseCode { record: String, rcode: String },

    #[error("Record not found: {0}")]
    TxtRecordNotFound(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Redirect target not found for {host} at {record}: {reason}")]
    TargetNotFound {
        host: String,
        record: String,
        reason: String,
    },

    #[error("Failed to fetch page: {0}")]
    PageFetch(String),

    #[error("Template error: {0}")]
    TemplateRender(String),
}

impl DomainError {
    /// True for the lookup failures that mean "nothing published at this name".
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            DomainError::DnsResponseCode { .. } | DomainError::TxtRecordNotFound(_)
        )
    }
}
