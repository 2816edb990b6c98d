//! Brighella Infrastructure Layer
//!
//! Adapters for the application ports: TXT lookups over UDP with
//! `hickory-proto`, page scraping with `reqwest` and `scraper`, and masking
//! page rendering with `minijinja`.
pub mod dns;
pub mod metadata;
pub mod render;
