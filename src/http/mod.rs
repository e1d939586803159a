//! HTTP client construction.

mod client;

pub use client::{HttpClientConfig, DEFAULT_BASE_URL};

pub(crate) use client::build_client;
