//! Configuration module for Brighella
//!
//! - `root`: Main configuration, loading precedence and CLI overrides
//! - `server`: HTTP listener
//! - `dns`: upstream resolver and TXT record prefixes
//! - `frame`: fallback title and favicon literals
//! - `template`: masking page template location
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod dns;
pub mod errors;
pub mod frame;
pub mod logging;
pub mod root;
pub mod server;
pub mod template;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use frame::FrameConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use template::TemplateConfig;
