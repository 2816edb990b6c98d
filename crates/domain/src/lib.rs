//! Brighella Domain Layer
pub mod config;
pub mod errors;
pub mod frame;
pub mod txt_query;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use frame::{Frame, FrameDefaults, Metadata, PageMetadata};
pub use txt_query::{RecordPrefix, TxtRecordQuery};
