pub mod forwarding;
pub mod transport;
pub mod txt_lookup;

pub use txt_lookup::HickoryTxtLookup;
