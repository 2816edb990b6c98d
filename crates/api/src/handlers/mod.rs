pub mod frame;
pub mod redirect;

pub use frame::{inbound_host, masked_redirect};
pub use redirect::redirect_to_root;
