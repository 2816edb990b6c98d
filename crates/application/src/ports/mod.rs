pub mod frame_renderer;
pub mod page_metadata;
pub mod txt_lookup;

pub use frame_renderer::FrameRenderer;
pub use page_metadata::PageMetadataFetcher;
pub use txt_lookup::TxtLookup;
