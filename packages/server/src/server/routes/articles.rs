//! Article search and filter-listing endpoints (CMS-backed).

use api_core::SearchPage;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use wagtail_client::{Article, ArticleQuery, FilterOption};

use crate::server::app::AppState;
use crate::server::routes::AppError;

#[derive(Debug, Deserialize)]
pub struct ArticleSearchParams {
    pub q: Option<String>,
    pub page: Option<u32>,
    /// Narrow to one page kind token.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Sort token: `alphabetical[:asc|:desc]`, `date[:asc|:desc]`.
    pub order: Option<String>,
}

/// `GET /articles/?q=&page=&type=&order=`
pub async fn search_articles(
    State(state): State<AppState>,
    Query(params): Query<ArticleSearchParams>,
) -> Result<Json<SearchPage<Article>>, AppError> {
    let mut query = ArticleQuery::new(params.page.unwrap_or(1));
    if let Some(q) = params.q {
        query = query.q(q);
    }
    if let Some(kind) = params.kind {
        query = query.kind(kind);
    }
    if let Some(order) = params.order {
        query = query.order(order);
    }
    let page = state.wagtail.search_articles(&query).await?;
    Ok(Json(page))
}

/// `GET /articles/filters/time-periods`
pub async fn article_filters_time_periods(
    State(state): State<AppState>,
) -> Result<Json<Vec<FilterOption>>, AppError> {
    let options = state.wagtail.child_pages(state.time_periods_page_id).await?;
    Ok(Json(options))
}

/// `GET /articles/filters/topics`
pub async fn article_filters_topics(
    State(state): State<AppState>,
) -> Result<Json<Vec<FilterOption>>, AppError> {
    let options = state.wagtail.child_pages(state.topics_page_id).await?;
    Ok(Json(options))
}
