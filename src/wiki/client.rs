// HTTP client for the MediaWiki action API.
//
// Retrieval is two requests: a full-text search to turn the topic into a
// page title ("Python" -> "Python (programming language)"), then a plain-text
// extract of that page's lead section. Both use `formatversion=2`, which
// returns pages as a list instead of a map keyed by page id.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use super::traits::ContextSource;

/// Default MediaWiki API endpoint (English Wikipedia).
pub const DEFAULT_WIKI_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Per-request limit. A hung lookup becomes an error, which the pipeline
/// treats as "no context".
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Error object MediaWiki returns (with a 200 status) for bad requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub info: String,
}

/// A single hit from `list=search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub pageid: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

/// Response from `action=query&list=search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub query: Option<SearchQuery>,
    pub error: Option<ApiError>,
}

impl SearchResponse {
    /// Title of the best-ranked hit, if any.
    pub fn first_title(&self) -> Option<&str> {
        self.query
            .as_ref()
            .and_then(|q| q.search.first())
            .map(|hit| hit.title.as_str())
    }
}

/// A page entry from `prop=extracts`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageExtract {
    pub title: String,
    #[serde(default)]
    pub missing: bool,
    pub extract: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractQuery {
    #[serde(default)]
    pub pages: Vec<PageExtract>,
}

/// Response from `action=query&prop=extracts`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractResponse {
    pub query: Option<ExtractQuery>,
    pub error: Option<ApiError>,
}

impl ExtractResponse {
    /// The first present page with a non-blank extract.
    pub fn first_page(&self) -> Option<&PageExtract> {
        self.query.as_ref()?.pages.iter().find(|page| {
            !page.missing
                && page
                    .extract
                    .as_deref()
                    .is_some_and(|text| !text.trim().is_empty())
        })
    }

    /// The first present page's extract, with blank extracts treated as absent.
    pub fn first_extract(&self) -> Option<&str> {
        self.first_page()
            .and_then(|page| page.extract.as_deref())
            .map(str::trim)
    }
}

/// Client for pulling Wikipedia lead sections by topic.
pub struct WikiClient {
    client: reqwest::Client,
    api_url: String,
}

impl WikiClient {
    /// Create a new client pointing at the given `api.php` URL.
    pub fn new(api_url: &str) -> Result<Self> {
        Self::with_timeout(api_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a client whose requests fail after `timeout`.
    pub fn with_timeout(api_url: &str, timeout: Duration) -> Result<Self> {
        // Wikimedia rejects requests without a descriptive user agent
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                "wikirag/",
                env!("CARGO_PKG_VERSION"),
                " (question answering demo)"
            ))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Find the title of the page that best matches `topic`.
    pub async fn search_title(&self, topic: &str) -> Result<Option<String>> {
        let resp: SearchResponse = self
            .query(&[
                ("list", "search"),
                ("srsearch", topic),
                ("srlimit", "1"),
            ])
            .await
            .with_context(|| format!("Wikipedia search failed for {topic:?}"))?;

        if let Some(err) = &resp.error {
            anyhow::bail!("Wikipedia search returned {}: {}", err.code, err.info);
        }

        let hit = resp.query.as_ref().and_then(|q| q.search.first());
        if let Some(hit) = hit {
            debug!(topic = topic, title = %hit.title, pageid = ?hit.pageid, "Wikipedia search hit");
        }

        Ok(hit.map(|hit| hit.title.clone()))
    }

    /// Fetch the plain-text lead section of the page titled `title`.
    pub async fn fetch_extract(&self, title: &str) -> Result<Option<String>> {
        let resp: ExtractResponse = self
            .query(&[
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", title),
            ])
            .await
            .with_context(|| format!("Wikipedia extract failed for {title:?}"))?;

        if let Some(err) = &resp.error {
            anyhow::bail!("Wikipedia extract returned {}: {}", err.code, err.info);
        }

        let Some(page) = resp.first_page() else {
            return Ok(None);
        };
        if page.title != title {
            debug!(requested = title, resolved = %page.title, "Followed Wikipedia redirect");
        }

        Ok(page.extract.as_deref().map(|text| text.trim().to_string()))
    }

    /// GET `action=query` with the shared format parameters plus `params`.
    async fn query<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        debug!(params = ?params, "MediaWiki GET request");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .context("MediaWiki API request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("MediaWiki API returned {}: {}", status, body);
        }

        response
            .json::<T>()
            .await
            .context("Failed to parse MediaWiki response")
    }
}

#[async_trait]
impl ContextSource for WikiClient {
    async fn fetch_context(&self, topic: &str) -> Result<Option<String>> {
        let Some(title) = self.search_title(topic).await? else {
            info!(topic = topic, "No matching Wikipedia page");
            return Ok(None);
        };

        let extract = self.fetch_extract(&title).await?;

        info!(
            topic = topic,
            title = %title,
            chars = extract.as_ref().map_or(0, |text| text.chars().count()),
            "Retrieved Wikipedia context"
        );

        Ok(extract)
    }
}
