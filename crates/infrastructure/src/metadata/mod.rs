pub mod extractor;
pub mod favicon;
pub mod fetcher;

pub use extractor::extract_metadata;
pub use favicon::absolutize_favicon;
pub use fetcher::HttpPageMetadataFetcher;
