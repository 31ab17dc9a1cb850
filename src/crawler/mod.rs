//! Crawler module for web page fetching
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching (single attempt per URL)
//! - HTML parsing for links and titles
//! - Global rate limiting
//! - Breadth-first crawl coordination

mod coordinator;
mod fetcher;
mod page;
mod parser;
mod throttle;

pub use coordinator::{CrawlOutcome, Crawler};
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use page::{doc_id_for, Page};
pub use parser::{parse_html, ParsedPage};
pub use throttle::Throttle;

use crate::config::CrawlerConfig;
use crate::url::CrawlScope;
use crate::PipelineError;

/// Runs a complete crawl operation
///
/// Builds the scope and client, loads robots.txt, then walks the site.
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - Crawl finished (individual page failures are not errors)
/// * `Err(PipelineError)` - The scope or HTTP client could not be built
pub async fn crawl(config: &CrawlerConfig) -> Result<CrawlOutcome, PipelineError> {
    let scope = CrawlScope::from_config(config)?;
    let mut crawler = Crawler::from_scope(scope)?;
    crawler.init_robots().await;
    Ok(crawler.crawl().await)
}
