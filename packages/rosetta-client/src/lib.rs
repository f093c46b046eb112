//! Rosetta archival records client.
//!
//! Queries the Rosetta search and metadata-fetch endpoints and
//! normalizes their deeply nested, optional-field-laden payloads into
//! a small set of stable response shapes. The heart of the crate is
//! the field-extraction layer ([`source`]): the precedence chains,
//! markup stripping and coded-value tables that turn an arbitrary
//! upstream document into flat, typed, null-safe records.
//!
//! # Example
//!
//! ```rust,ignore
//! use rosetta_client::{RosettaClient, SearchQuery};
//!
//! let client = RosettaClient::new("https://rosetta.example/api", 20, 10_000);
//! let page = client.search(&SearchQuery::new("poor law", 1)).await?;
//! for hit in &page.results {
//!     println!("{} {}", hit.id, hit.title);
//! }
//! ```
//!
//! # Modules
//!
//! - [`path`] - safe nested lookup over untyped documents
//! - [`markup`] - tag/class queries over rich-text blobs
//! - [`source`] - the field extractor (one method per rule)
//! - [`search`] / [`details`] - assemblers for the two endpoints
//! - [`query`] - immutable per-request query builders
//! - [`levels`] - hierarchy level code tables

pub mod details;
pub mod levels;
pub mod markup;
pub mod path;
pub mod query;
pub mod search;
pub mod source;
pub mod types;

pub use api_core::{ApiError, Result, SearchPage};
pub use details::{
    AggregationDetail, ArchiveDetail, CreatorDetail, DetailRecord, PersonDetail, RecordDetail,
};
pub use query::{FetchQuery, SearchQuery};
pub use source::SourceRecord;
pub use types::{
    Agent, AgentGroups, ContactInfo, HeldBy, HierarchyLevel, Manifestation, NameParts,
    RecordType, SearchResult,
};

use api_core::ApiClient;

/// Client for one Rosetta deployment.
#[derive(Debug, Clone)]
pub struct RosettaClient {
    api: ApiClient,
    results_per_page: u32,
    max_count: u64,
}

impl RosettaClient {
    /// `max_count` caps the reported total; the upstream cannot serve
    /// results beyond that depth reliably.
    pub fn new(base_url: &str, results_per_page: u32, max_count: u64) -> Self {
        Self {
            api: ApiClient::new(base_url),
            results_per_page,
            max_count,
        }
    }

    /// Search records, returning one normalized page.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchPage<SearchResult>> {
        let params = query.params(self.results_per_page);
        let url = if query.uncached {
            self.api.uncached_url_for("/search", &params)?
        } else {
            self.api.url_for("/search", &params)?
        };
        tracing::info!(q = %query.q, page = query.page, "Searching records");
        let raw = self.api.get_json(&url).await?;
        search::assemble_search_page(
            &raw,
            query.page,
            self.results_per_page,
            self.max_count,
            &url,
        )
    }

    /// Fetch one record's full detail by id.
    pub async fn fetch(&self, query: &FetchQuery) -> Result<DetailRecord> {
        let params = query.params();
        let url = if query.uncached {
            self.api.uncached_url_for("/fetch", &params)?
        } else {
            self.api.url_for("/fetch", &params)?
        };
        tracing::info!(id = %query.id, "Fetching record detail");
        let raw = self.api.get_json(&url).await?;
        details::assemble_detail(&raw, &url)
    }
}
