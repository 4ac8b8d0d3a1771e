// SPDX-License-Identifier: MPL-2.0
//! Photo-search API client and result types.
//!
//! One GET per result page against an Unsplash-compatible endpoint. The
//! JSON payload is reduced to the domain types the grid renders; the
//! full result set is replaced wholesale on every successful fetch,
//! never merged across pages.

use crate::error::{Error, Result};
use serde::Deserialize;

/// Parameters for one result page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text search term. Must be non-empty; the empty-term guard
    /// lives in the application update loop, before any request is built.
    pub term: String,
    /// 1-based page number.
    pub page: u32,
}

/// A single result image, reduced to what a grid tile needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem {
    /// Unique within a result set; used as the grid key.
    pub id: String,
    pub thumbnail_url: String,
    pub alt_text: Option<String>,
}

/// The outcome of one successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResult {
    /// Images in the order the API returned them.
    pub images: Vec<ImageItem>,
    /// Total page count reported by the API for this term.
    pub total_pages: u32,
}

/// Wire shape of the API's success response.
#[derive(Debug, Deserialize)]
struct ApiPage {
    results: Vec<ApiImage>,
    total_pages: u32,
}

#[derive(Debug, Deserialize)]
struct ApiImage {
    id: String,
    urls: ApiUrls,
    alt_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUrls {
    small: String,
}

impl From<ApiImage> for ImageItem {
    fn from(image: ApiImage) -> Self {
        Self {
            id: image.id,
            thumbnail_url: image.urls.small,
            alt_text: image.alt_description,
        }
    }
}

impl From<ApiPage> for SearchResult {
    fn from(page: ApiPage) -> Self {
        Self {
            images: page.results.into_iter().map(ImageItem::from).collect(),
            total_pages: page.total_pages,
        }
    }
}

/// Decodes a raw response body into a [`SearchResult`].
pub fn decode_page(body: &[u8]) -> Result<SearchResult> {
    let page: ApiPage = serde_json::from_slice(body)?;
    Ok(page.into())
}

/// HTTP client for the photo-search API.
///
/// Cheap to clone; the underlying `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    per_page: u32,
}

impl SearchClient {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        per_page: u32,
    ) -> Result<Self> {
        // Build client with explicit redirect policy and user agent
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("IcedGallery/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http,
            api_url: api_url.into(),
            api_key: api_key.into(),
            per_page,
        })
    }

    /// Fetches one result page for `query`.
    ///
    /// Non-success statuses and undecodable bodies are errors; an empty
    /// `results` array is a valid response (it renders an empty grid).
    pub async fn fetch_page(&self, query: &SearchQuery) -> Result<SearchResult> {
        let page = query.page.to_string();
        let per_page = self.per_page.to_string();
        let params = [
            ("query", query.term.as_str()),
            ("page", page.as_str()),
            ("per_page", per_page.as_str()),
            ("client_id", self.api_key.as_str()),
        ];

        let response = self.http.get(&self.api_url).query(&params).send().await?;

        if !response.status().is_success() {
            return Err(Error::Api(format!("HTTP status: {}", response.status())));
        }

        let body = response.bytes().await?;
        decode_page(&body)
    }

    /// Downloads the thumbnail bytes for one grid tile.
    pub async fn download_thumbnail(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Api(format!("HTTP status: {}", response.status())));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
