//! Record search and detail endpoints.

use api_core::SearchPage;
use axum::extract::{Path, Query, State};
use axum::Json;
use rosetta_client::{DetailRecord, FetchQuery, SearchQuery, SearchResult};
use serde::Deserialize;

use crate::server::app::AppState;
use crate::server::routes::AppError;

#[derive(Debug, Deserialize)]
pub struct RecordSearchParams {
    pub q: Option<String>,
    pub page: Option<u32>,
    /// Group filter token (e.g. `tna`, `nonTna`).
    pub group: Option<String>,
    pub highlight: Option<bool>,
    /// Bypass upstream caches for this request.
    pub uncached: Option<bool>,
}

/// `GET /records/?q=&page=&group=&highlight=`
pub async fn search_records(
    State(state): State<AppState>,
    Query(params): Query<RecordSearchParams>,
) -> Result<Json<SearchPage<SearchResult>>, AppError> {
    // a missing query means "everything"
    let q = params.q.unwrap_or_else(|| "*".to_string());
    let mut query = SearchQuery::new(q, params.page.unwrap_or(1))
        .highlight(params.highlight.unwrap_or(false))
        .uncached(params.uncached.unwrap_or(false));
    if let Some(group) = params.group {
        query = query.group(group);
    }
    let page = state.rosetta.search(&query).await?;
    Ok(Json(page))
}

/// `GET /records/:id`
pub async fn record_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DetailRecord>, AppError> {
    let detail = state.rosetta.fetch(&FetchQuery::new(id)).await?;
    Ok(Json(detail))
}
