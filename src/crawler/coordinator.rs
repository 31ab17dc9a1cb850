//! Crawler coordinator - main crawl orchestration logic
//!
//! Runs a breadth-first walk from the base URL:
//! - Pops the next URL from the FIFO frontier
//! - Checks robots.txt
//! - Waits out the rate limit and fetches the page
//! - Extracts, normalizes, and scope-filters links, queueing unseen ones

use crate::crawler::fetcher::{build_http_client, fetch_page, FetchedPage};
use crate::crawler::page::{doc_id_for, Page};
use crate::crawler::parser::parse_html;
use crate::crawler::throttle::Throttle;
use crate::robots::{fetch_robots, RobotsPolicy};
use crate::state::{CrawlState, UrlState};
use crate::url::CrawlScope;
use crate::{PipelineError, UrlError};
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// Result of a finished crawl
#[derive(Debug)]
pub struct CrawlOutcome {
    /// Canonical base URL the crawl was seeded with
    pub base_url: String,
    /// When the crawl finished
    pub crawled_at: DateTime<Utc>,
    /// Final frontier, URL states, and emitted pages
    pub state: CrawlState,
}

impl CrawlOutcome {
    /// Pages in crawl (BFS discovery) order
    pub fn pages(&self) -> &[Page] {
        self.state.pages()
    }

    /// URLs that reached a terminal state, including robots rejections and failures
    pub fn visited_count(&self) -> usize {
        self.state.visited_count()
    }
}

/// Breadth-first documentation crawler
///
/// One instance drives one crawl; [`Crawler::crawl`] consumes it.
pub struct Crawler {
    scope: CrawlScope,
    client: Client,
    robots: RobotsPolicy,
    throttle: Throttle,
    state: CrawlState,
}

impl Crawler {
    /// Creates a crawler with the base URL queued
    pub fn new(scope: CrawlScope, client: Client) -> Self {
        let state = CrawlState::new(scope.base_url());
        let throttle = Throttle::new(scope.rate_limit());

        Self {
            scope,
            client,
            robots: RobotsPolicy::AllowAll,
            throttle,
            state,
        }
    }

    /// Creates a crawler with an HTTP client built from the scope
    pub fn from_scope(scope: CrawlScope) -> Result<Self, PipelineError> {
        let client = build_http_client(&scope)?;
        Ok(Self::new(scope, client))
    }

    pub fn scope(&self) -> &CrawlScope {
        &self.scope
    }

    pub fn robots(&self) -> &RobotsPolicy {
        &self.robots
    }

    /// Loads robots.txt for the base URL's origin
    ///
    /// Does nothing when robots.txt compliance is disabled. Failures leave
    /// the crawl unrestricted.
    pub async fn init_robots(&mut self) {
        if !self.scope.respect_robots_txt() {
            tracing::info!("robots.txt compliance disabled");
            return;
        }

        self.robots = match self.scope.robots_url() {
            Ok(robots_url) => fetch_robots(&self.client, &robots_url).await,
            Err(e) => {
                tracing::warn!("Could not build robots.txt URL: {}; allowing all", e);
                RobotsPolicy::AllowAll
            }
        };
    }

    /// Runs the crawl until the frontier is empty or `max_pages` pages were emitted
    pub async fn crawl(mut self) -> CrawlOutcome {
        let max_pages = self.scope.max_pages();
        let start_time = std::time::Instant::now();

        tracing::info!(
            "Starting crawl from {} (max {} pages)",
            self.scope.base_url(),
            max_pages
        );

        while self.state.page_count() < max_pages {
            let Some(url) = self.state.next_url() else {
                break;
            };

            let emitted = self.visit(&url).await;

            let pages = self.state.page_count();
            if emitted && pages % 10 == 0 {
                tracing::info!(
                    "Progress: {} pages crawled, {} in frontier, {:.1}s elapsed",
                    pages,
                    self.state.frontier_len(),
                    start_time.elapsed().as_secs_f64()
                );
            }
        }

        if !self.state.frontier_is_empty() {
            tracing::info!(
                "Reached max_pages limit ({}); {} URLs left in frontier",
                max_pages,
                self.state.frontier_len()
            );
        }

        tracing::info!(
            "Crawl complete: {} pages fetched, {} URLs visited in {:?}",
            self.state.page_count(),
            self.state.visited_count(),
            start_time.elapsed()
        );

        CrawlOutcome {
            base_url: self.scope.base_url().to_string(),
            crawled_at: Utc::now(),
            state: self.state,
        }
    }

    /// Processes a single URL; returns true if a page was emitted
    async fn visit(&mut self, url: &str) -> bool {
        if !self.robots.is_allowed(url, self.scope.robots_agent()) {
            tracing::info!("Blocked by robots.txt: {}", url);
            self.state.finish(url, UrlState::RejectedByRobots);
            return false;
        }

        self.throttle.wait().await;
        tracing::debug!("Fetching {}", url);

        let fetched = match fetch_page(&self.client, url).await {
            Ok(fetched) => fetched,
            Err(e) => {
                tracing::warn!("Failed to fetch {}: {}", url, e);
                self.state.finish(url, UrlState::FetchFailed);
                return false;
            }
        };

        let page = match self.build_page(url, fetched) {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Failed to process {}: {}", url, e);
                self.state.finish(url, UrlState::FetchFailed);
                return false;
            }
        };

        for link in &page.links {
            self.state.enqueue(link);
        }

        tracing::info!("Fetched: {} ({} links found)", url, page.links.len());
        self.state.record_page(page);
        true
    }

    fn build_page(&self, url: &str, fetched: FetchedPage) -> Result<Page, UrlError> {
        let resolve_base = Url::parse(&fetched.final_url)
            .or_else(|_| Url::parse(url))
            .map_err(|e| UrlError::Parse(e.to_string()))?;

        let parsed = parse_html(&fetched.body, &resolve_base);
        let links = self.scoped_links(parsed.links);

        Ok(Page {
            doc_id: doc_id_for(url),
            url: url.to_string(),
            title: parsed.title.unwrap_or_else(|| url.to_string()),
            raw_html: fetched.body,
            links,
            last_crawled_at: Utc::now(),
            status_code: fetched.status_code,
            content_type: fetched.content_type,
        })
    }

    /// Normalizes links, keeps in-scope ones, and dedupes in first-seen order
    fn scoped_links(&self, raw_links: Vec<String>) -> Vec<String> {
        let mut seen = HashSet::new();
        raw_links
            .into_iter()
            .filter_map(|link| self.scope.normalize(&link).ok())
            .filter(|link| self.scope.admits(link))
            .filter(|link| seen.insert(link.clone()))
            .collect()
    }
}
