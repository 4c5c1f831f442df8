//! Sources of per-week cell fragments

use reqwest::Client;
use std::future::Future;
use tracing::{info, warn};

use crate::config::Config;
use crate::data_fetcher::processors::extract_fragments;
use crate::error::AppError;

use super::fetch_utils::fetch_html;
use super::http_client::create_http_client;
use super::urls::{build_alternate_week_url, build_week_url};

/// Provides the normalized cell fragments of one weekly page.
pub trait FragmentSource {
    /// Fetches the fragments for `year` and `week` in page order.
    ///
    /// # Errors
    /// Returns [`AppError`] when the page cannot be retrieved. An empty page
    /// is `Ok` with no fragments.
    fn fetch(
        &self,
        year: i32,
        week: u32,
    ) -> impl Future<Output = Result<Vec<String>, AppError>> + Send;
}

/// Fetches weekly pages from the weather site over HTTP.
#[derive(Debug, Clone)]
pub struct NflWeatherSource {
    client: Client,
    base_url: String,
}

impl NflWeatherSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        NflWeatherSource {
            client,
            base_url: base_url.into(),
        }
    }

    /// Builds a source with an HTTP client configured from `config`.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client(config.http_timeout_seconds, &config.user_agent)?;
        Ok(NflWeatherSource::new(client, config.normalized_base_url()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the week's HTML, falling back to the alternate URL some
    /// weeks are published under.
    async fn fetch_week_html(&self, year: i32, week: u32) -> Result<String, AppError> {
        let url = build_week_url(&self.base_url, year, week);
        match fetch_html(&self.client, &url).await {
            Ok(html) => Ok(html),
            Err(primary_error) => {
                let alternate_url = build_alternate_week_url(&self.base_url, year, week);
                warn!("Primary page for {year} week {week} failed ({primary_error}), trying {alternate_url}");
                let html = fetch_html(&self.client, &alternate_url).await?;
                info!("Using alternate page for {year} week {week}");
                Ok(html)
            }
        }
    }
}

impl FragmentSource for NflWeatherSource {
    async fn fetch(&self, year: i32, week: u32) -> Result<Vec<String>, AppError> {
        let html = self.fetch_week_html(year, week).await?;
        Ok(extract_fragments(&html))
    }
}
