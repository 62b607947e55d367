// src/images/duckduckgo.rs
//
// DuckDuckGo image search over blocking HTTP.
// Two requests per search: the HTML search page (for the `vqd` token), then
// the `i.js` JSON endpoint with that token.

use std::{sync::LazyLock, time::Duration};

use regex::Regex;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, REFERER};
use serde::Deserialize;

use super::{ImageHit, ImageSearch, SearchError};
use crate::config::consts::{IMAGE_SEARCH_BASE, USER_AGENT};

static VQD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"vqd=["']?([0-9-]+)"#).expect("vqd pattern"));

#[derive(Debug, Deserialize)]
struct ImagesPage {
    #[serde(default)]
    results: Vec<ImageResult>,
}

#[derive(Debug, Deserialize)]
struct ImageResult {
    image: String,
}

pub struct DuckDuckGo {
    client: Client,
    base: String,
}

impl DuckDuckGo {
    pub fn new(timeout_secs: u64) -> Result<Self, SearchError> {
        Self::with_base_url(IMAGE_SEARCH_BASE, timeout_secs)
    }

    /// Point at another host (mirrors, tests).
    pub fn with_base_url(base: &str, timeout_secs: u64) -> Result<Self, SearchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/html;q=0.9, */*;q=0.8"));
        headers.insert(REFERER, HeaderValue::from_static("https://duckduckgo.com/"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client, base: base.trim_end_matches('/').to_string() })
    }

    fn token(&self, query: &str) -> Result<String, SearchError> {
        let html = self
            .client
            .get(format!("{}/", self.base))
            .query(&[("q", query), ("iax", "images"), ("ia", "images")])
            .send()?
            .error_for_status()?
            .text()?;
        extract_vqd(&html).ok_or_else(|| SearchError::Provider(s!("search token missing from response")))
    }
}

impl ImageSearch for DuckDuckGo {
    fn name(&self) -> &'static str { "duckduckgo" }

    fn search(&self, query: &str, max_results: usize) -> Result<Vec<ImageHit>, SearchError> {
        let vqd = self.token(query)?;
        let body = self
            .client
            .get(format!("{}/i.js", self.base))
            .query(&[
                ("l", "wt-wt"),
                ("o", "json"),
                ("q", query),
                ("vqd", vqd.as_str()),
                ("f", ",,,,,"),
                ("p", "1"),
            ])
            .send()?
            .error_for_status()?
            .text()?;
        parse_hits(&body, max_results)
    }
}

fn extract_vqd(html: &str) -> Option<String> {
    VQD_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|t| !t.is_empty())
}

fn parse_hits(body: &str, max_results: usize) -> Result<Vec<ImageHit>, SearchError> {
    let page: ImagesPage = serde_json::from_str(body)?;
    Ok(page
        .results
        .into_iter()
        .filter(|r| !r.image.trim().is_empty())
        .take(max_results)
        .map(|r| ImageHit { image: r.image })
        .collect())
}
