//! Application setup and router construction.

use axum::{routing::get, Router};
use rosetta_client::RosettaClient;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use wagtail_client::WagtailClient;

use crate::config::Config;
use crate::server::routes::{
    article_filters_time_periods, article_filters_topics, health_handler, record_detail,
    search_articles, search_records,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub rosetta: RosettaClient,
    pub wagtail: WagtailClient,
    pub time_periods_page_id: u64,
    pub topics_page_id: u64,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            rosetta: RosettaClient::new(
                &config.rosetta_api_url,
                config.results_per_page,
                config.results_limit,
            ),
            wagtail: WagtailClient::new(
                &config.wagtail_api_url,
                config.results_per_page,
                config.results_limit,
            ),
            time_periods_page_id: config.time_periods_page_id,
            topics_page_id: config.topics_page_id,
        }
    }
}

/// Build the router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/records/", get(search_records))
        .route("/records/:id", get(record_detail))
        .route("/articles/", get(search_articles))
        .route("/articles/filters/time-periods", get(article_filters_time_periods))
        .route("/articles/filters/topics", get(article_filters_topics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
