//! Wagtail CMS pages client.
//!
//! Searches the content-management API for editorial pages and
//! normalizes them into [`Article`] records under the same pagination
//! contract as record search. The listing endpoint omits the teaser
//! image and description, so each hit needs one supplementary detail
//! fetch; those are independent per item and issued concurrently
//! under a small cap rather than fanned out unbounded.

pub mod query;
pub mod types;

pub use api_core::{ApiError, Result, SearchPage};
pub use query::{sort_param, ArticleQuery, DEFAULT_KINDS};
pub use types::{Article, FilterOption, PageDetail, PageItem, PageListing};

use api_core::ApiClient;
use futures::stream::{self, StreamExt, TryStreamExt};
use url::Url;

/// Cap on in-flight supplementary detail fetches per search request.
const DETAIL_FETCH_CONCURRENCY: usize = 4;

/// Client for one Wagtail deployment.
#[derive(Debug, Clone)]
pub struct WagtailClient {
    api: ApiClient,
    results_per_page: u32,
    max_count: u64,
}

impl WagtailClient {
    pub fn new(base_url: &str, results_per_page: u32, max_count: u64) -> Self {
        Self {
            api: ApiClient::new(base_url),
            results_per_page,
            max_count,
        }
    }

    /// Search editorial pages, returning one normalized page of
    /// articles.
    pub async fn search_articles(&self, query: &ArticleQuery) -> Result<SearchPage<Article>> {
        let params = query.params(self.results_per_page);
        let url = self.api.url_for("/pages/", &params)?;
        tracing::info!(q = query.q.as_deref().unwrap_or(""), page = query.page, "Searching articles");
        let listing = self.page_listing(&url).await?;

        let articles: Vec<Article> = stream::iter(
            listing
                .items
                .into_iter()
                .map(|item| self.article_with_detail(item)),
        )
        .buffered(DETAIL_FETCH_CONCURRENCY)
        .try_collect()
        .await?;

        SearchPage::build(
            listing.meta.total_count,
            query.page,
            self.results_per_page,
            self.max_count,
            articles,
            url.to_string(),
        )
    }

    /// Child pages of a parent, as filter options. Powers the
    /// time-period and topic listings.
    pub async fn child_pages(&self, parent_id: u64) -> Result<Vec<FilterOption>> {
        let params = vec![("child_of".to_string(), parent_id.to_string())];
        let url = self.api.url_for("/pages/", &params)?;
        let listing = self.page_listing(&url).await?;
        Ok(listing
            .items
            .into_iter()
            .map(|item| FilterOption {
                name: item.title,
                value: item.id,
            })
            .collect())
    }

    async fn page_listing(&self, url: &Url) -> Result<PageListing> {
        let raw = self.api.get_json(url).await?;
        serde_json::from_value(raw).map_err(|err| {
            tracing::warn!(url = %url, error = %err, "Page listing failed to decode");
            ApiError::MalformedResponse {
                url: url.to_string(),
            }
        })
    }

    /// Fetch the one page-level supplement a listing item lacks
    /// (description + teaser image) and merge it in.
    async fn article_with_detail(&self, item: PageItem) -> Result<Article> {
        let url = self.api.url_for(&format!("/pages/{}", item.id), &[])?;
        let raw = self.api.get_json(&url).await?;
        let detail: Option<PageDetail> = serde_json::from_value(raw).ok();
        if detail.is_none() {
            tracing::warn!(id = item.id, "Page detail response missing expected fields");
        }
        Ok(Article::from_parts(item, detail))
    }
}
