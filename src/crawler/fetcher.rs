//! HTTP fetcher implementation
//!
//! One client is built per crawl and reused for every request. Each page
//! gets a single attempt; the caller decides what a failure means.

use crate::url::CrawlScope;
use crate::PipelineError;
use reqwest::Client;
use std::time::Duration;

/// Response data for a successful (2xx) fetch
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects; relative links resolve against it
    pub final_url: String,
    pub status_code: u16,
    /// Content-Type header value, empty when absent
    pub content_type: String,
    pub body: String,
}

/// Builds the HTTP client used for robots.txt and page fetches
///
/// # Example
///
/// ```
/// use adk_docs_crawler::config::CrawlerConfig;
/// use adk_docs_crawler::crawler::build_http_client;
/// use adk_docs_crawler::url::CrawlScope;
///
/// let config = CrawlerConfig {
///     base_url: "https://docs.example/adk/".to_string(),
///     allowed_domains: vec!["docs.example".to_string()],
///     allowed_paths: vec!["/adk/".to_string()],
///     user_agent: "ADKDocsCrawler/1.0".to_string(),
///     rate_limit_seconds: 1.0,
///     timeout_seconds: 30.0,
///     respect_robots_txt: true,
///     max_pages: 100,
/// };
/// let scope = CrawlScope::from_config(&config).unwrap();
/// let client = build_http_client(&scope).unwrap();
/// ```
pub fn build_http_client(scope: &CrawlScope) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(scope.user_agent())
        .timeout(scope.timeout())
        .connect_timeout(scope.timeout().min(Duration::from_secs(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL once
///
/// # Returns
///
/// * `Ok(FetchedPage)` - 2xx response with its body
/// * `Err(PipelineError::HttpStatus)` - non-2xx response
/// * `Err(PipelineError::Http)` - network error, timeout, or unreadable body
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, PipelineError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| PipelineError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(PipelineError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let body = response.text().await.map_err(|source| PipelineError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(FetchedPage {
        final_url,
        status_code: status.as_u16(),
        content_type,
        body,
    })
}
