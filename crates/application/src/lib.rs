//! Brighella Application Layer
//!
//! Ports describe the outbound collaborators (DNS, page fetch, rendering);
//! use cases hold the resolution policy on top of them.
pub mod ports;
pub mod use_cases;
