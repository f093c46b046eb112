//! Shared plumbing for the upstream aggregation clients.
//!
//! The three upstream services (archival records search, metadata
//! fetch, CMS page search) share one access pattern: a GET with query
//! parameters returning JSON of an upstream-specific dialect. This
//! crate holds the parts that are dialect-independent:
//!
//! - [`ApiClient`]: one-shot GET + JSON decoding with the shared
//!   status-code contract (no retries),
//! - [`ApiError`]: the error taxonomy every client reports in,
//! - [`SearchPage`]: offset pagination with derived fields computed
//!   locally, never trusted from upstream.

pub mod client;
pub mod error;
pub mod page;

pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use page::{page_in_range, total_pages, SearchPage};
