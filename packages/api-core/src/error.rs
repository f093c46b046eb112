//! Typed errors shared by all upstream clients.
//!
//! Uses `thiserror` for library errors (not `anyhow`). The taxonomy is
//! deliberately small: callers need to tell "nothing there" (404,
//! page out of range) apart from "the upstream is misbehaving"
//! (non-2xx, non-JSON) and nothing else. None of these are retried by
//! the core; retry/backoff policy belongs to the caller.

use thiserror::Error;

/// Errors raised while querying an upstream service or assembling its
/// response into a normalized shape.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upstream returned 404 for the requested resource.
    #[error("resource not found: {url}")]
    NotFound { url: String },

    /// The requested page number falls outside `[1, pages]`.
    /// Surfaced as a 404-equivalent, never as a silent empty page.
    #[error("page {page} out of range")]
    PageNotFound { page: u32 },

    /// Upstream returned 2xx but the body did not decode as JSON.
    #[error("upstream provided non-JSON response: {url}")]
    MalformedResponse { url: String },

    /// Upstream returned any other non-2xx status.
    #[error("upstream request failed with status {status}: {url}")]
    RequestFailed { status: u16, url: String },

    /// Transport-level failure (connect error, timeout, TLS).
    #[error("upstream request error: {0}")]
    Http(#[from] reqwest::Error),

    /// A detail document declared a type code outside the known set.
    /// The assembler refuses to guess at a partial record.
    #[error("record type '{kind}' is not recognised")]
    UnrecognizedType { kind: String },
}

/// Result type alias for upstream operations.
pub type Result<T> = std::result::Result<T, ApiError>;
