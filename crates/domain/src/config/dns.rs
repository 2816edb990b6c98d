use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Upstream resolver and the TXT record labels published per host.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Resolver queried for every TXT lookup (default: "8.8.8.8:53")
    #[serde(default = "default_resolver")]
    pub resolver: SocketAddr,

    /// Per-query timeout in milliseconds (default: 2000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Label for the redirect target record (default: "_frame")
    #[serde(default = "default_target_prefix")]
    pub target_prefix: String,

    /// Label for the title override record (default: "_frame_title")
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,

    /// Label for the favicon override record (default: "_frame_favicon")
    #[serde(default = "default_favicon_prefix")]
    pub favicon_prefix: String,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            resolver: default_resolver(),
            timeout_ms: default_timeout_ms(),
            target_prefix: default_target_prefix(),
            title_prefix: default_title_prefix(),
            favicon_prefix: default_favicon_prefix(),
        }
    }
}

fn default_resolver() -> SocketAddr {
    SocketAddr::from(([8, 8, 8, 8], 53))
}

fn default_timeout_ms() -> u64 {
    2000
}

fn default_target_prefix() -> String {
    "_frame".to_string()
}

fn default_title_prefix() -> String {
    "_frame_title".to_string()
}

fn default_favicon_prefix() -> String {
    "_frame_favicon".to_string()
}
