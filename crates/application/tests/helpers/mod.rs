
pub use mock_ports::{MockPageMetadataFetcher, MockTxtLookup};
