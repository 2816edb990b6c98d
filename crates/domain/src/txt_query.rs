use crate::config::DnsConfig;
use std::net::SocketAddr;
use std::sync::Arc;

/// Which of the published TXT records a lookup is after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordPrefix {
    /// `_frame.<host>`: the page to embed.
    Target,
    /// `_frame_title.<host>`: title override.
    Title,
    /// `_frame_favicon.<host>`: favicon override.
    Favicon,
}

impl RecordPrefix {
    pub fn label<'a>(&self, dns: &'a DnsConfig) -> &'a str {
        match self {
            RecordPrefix::Target => &dns.target_prefix,
            RecordPrefix::Title => &dns.title_prefix,
            RecordPrefix::Favicon => &dns.favicon_prefix,
        }
    }

    /// Builds `"<prefix>.<host>"`. The host is used as received.
    pub fn record_name(&self, dns: &DnsConfig, host: &str) -> String {
        format!("{}.{}", self.label(dns), host)
    }
}

/// A single TXT lookup against a fixed upstream resolver.
#[derive(Debug, Clone)]
pub struct TxtRecordQuery {
    pub record_name: Arc<str>,
    pub resolver: SocketAddr,
}

impl TxtRecordQuery {
    pub fn new(record_name: impl Into<Arc<str>>, resolver: SocketAddr) -> Self {
        Self {
            record_name: record_name.into(),
            resolver,
        }
    }

    /// Record name with the trailing root dot appended when missing.
    pub fn fqdn(&self) -> String {
        if self.record_name.ends_with('.') {
            self.record_name.to_string()
        } else {
            format!("{}.", self.record_name)
        }
    }
}
