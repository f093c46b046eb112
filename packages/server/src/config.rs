use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub rosetta_api_url: String,
    pub wagtail_api_url: String,
    pub port: u16,
    /// Default page size submitted to and reported for every search.
    pub results_per_page: u32,
    /// Cap on the reported result total; the upstream search engines
    /// cannot serve results beyond this depth.
    pub results_limit: u64,
    /// Wagtail parent page ids for the filter listings.
    pub time_periods_page_id: u64,
    pub topics_page_id: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            rosetta_api_url: env::var("ROSETTA_API_URL")
                .context("ROSETTA_API_URL must be set")?,
            wagtail_api_url: env::var("WAGTAIL_API_URL")
                .context("WAGTAIL_API_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            results_per_page: env::var("RESULTS_PER_PAGE")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .context("RESULTS_PER_PAGE must be a valid number")?,
            results_limit: env::var("RESULTS_LIMIT")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .context("RESULTS_LIMIT must be a valid number")?,
            time_periods_page_id: env::var("WAGTAIL_TIME_PERIODS_PAGE_ID")
                .unwrap_or_else(|_| "54".to_string())
                .parse()
                .context("WAGTAIL_TIME_PERIODS_PAGE_ID must be a valid number")?,
            topics_page_id: env::var("WAGTAIL_TOPICS_PAGE_ID")
                .unwrap_or_else(|_| "53".to_string())
                .parse()
                .context("WAGTAIL_TOPICS_PAGE_ID must be a valid number")?,
        })
    }
}
