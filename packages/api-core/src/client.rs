//! One-shot GET client for the upstream JSON services.
//!
//! All three upstreams (records search, metadata fetch, CMS pages)
//! speak plain `GET + query string -> JSON`, so a single client covers
//! them. Status handling is the whole contract: 404 maps to
//! [`ApiError::NotFound`], any other non-2xx to
//! [`ApiError::RequestFailed`], and a 2xx body that is not JSON to
//! [`ApiError::MalformedResponse`]. No retries.

use std::time::Duration;

use serde_json::Value;
use url::Url;
use uuid::Uuid;

use crate::error::{ApiError, Result};

/// Fixed outbound timeout; expiry surfaces as [`ApiError::Http`].
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A configured upstream endpoint (base URL + shared HTTP client).
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for one upstream base URL. A trailing slash on
    /// the base URL is tolerated and trimmed.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized, same as
    /// `reqwest::Client::new`.
    pub fn new(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the full request URL for `path` + `params`. Exposed so
    /// assemblers can echo the source URL into their output.
    pub fn url_for(&self, path: &str, params: &[(String, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|_| ApiError::RequestFailed {
                status: 0,
                url: format!("{}{}", self.base_url, path),
            })?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter().map(|(k, v)| (k, v)));
        }
        Ok(url)
    }

    /// As [`url_for`](Self::url_for), with a unique `invalidator`
    /// token appended so shared caches in front of the upstream are
    /// bypassed for this one fetch.
    pub fn uncached_url_for(&self, path: &str, params: &[(String, String)]) -> Result<Url> {
        let mut url = self.url_for(path, params)?;
        url.query_pairs_mut()
            .append_pair("invalidator", &Uuid::new_v4().to_string());
        Ok(url)
    }

    /// Execute one GET against a fully-built URL and decode the JSON
    /// body.
    pub async fn get_json(&self, url: &Url) -> Result<Value> {
        tracing::debug!(url = %url, "Upstream GET");
        let resp = self.http.get(url.as_str()).send().await?;
        let status = resp.status();

        if status.as_u16() == 404 {
            return Err(ApiError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        resp.json::<Value>().await.map_err(|err| {
            tracing::warn!(url = %url, error = %err, "Upstream body failed JSON decoding");
            ApiError::MalformedResponse {
                url: url.to_string(),
            }
        })
    }

}
