//! Per-crawl manifest

use crate::crawler::CrawlOutcome;
use crate::state::UrlState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary record of one crawl, written once after the crawl finishes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub base_url: String,
    pub crawled_at: DateTime<Utc>,
    /// Pages emitted
    pub total_pages: usize,
    /// URLs that reached a terminal state
    pub pages_visited: usize,
    #[serde(default)]
    pub rejected_by_robots: usize,
    #[serde(default)]
    pub fetch_failed: usize,
    pub pages: Vec<ManifestPage>,
}

/// One fetched page as listed in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestPage {
    pub doc_id: String,
    pub url: String,
    pub title: String,
    pub links_count: usize,
    pub last_crawled_at: DateTime<Utc>,
}

impl Manifest {
    /// Builds the manifest for a finished crawl, listing pages in crawl order
    pub fn from_crawl(outcome: &CrawlOutcome) -> Self {
        let pages: Vec<ManifestPage> = outcome
            .pages()
            .iter()
            .map(|page| ManifestPage {
                doc_id: page.doc_id.clone(),
                url: page.url.clone(),
                title: page.title.clone(),
                links_count: page.links.len(),
                last_crawled_at: page.last_crawled_at,
            })
            .collect();

        Self {
            base_url: outcome.base_url.clone(),
            crawled_at: outcome.crawled_at,
            total_pages: pages.len(),
            pages_visited: outcome.visited_count(),
            rejected_by_robots: outcome.state.count(UrlState::RejectedByRobots),
            fetch_failed: outcome.state.count(UrlState::FetchFailed),
            pages,
        }
    }
}
