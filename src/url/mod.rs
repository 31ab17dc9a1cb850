//! URL handling module
//!
//! This module provides URL normalization, host extraction, and the
//! [`CrawlScope`] that decides which URLs the crawler may admit.

mod domain;
mod matcher;
mod normalize;

use crate::config::{CrawlerConfig, MAX_INTERVAL_SECONDS};
use crate::UrlError;
use std::collections::HashSet;
use std::time::Duration;

// Re-export main functions
pub use domain::{extract_domain, extract_netloc};
pub use matcher::{matches_domain, matches_path_prefix};
pub use normalize::{normalize_url, parse_web_url};

/// Immutable description of what a crawl may visit and how politely
///
/// Built once from [`CrawlerConfig`] before crawling starts. The base URL is
/// stored in its canonical form (fragment removed, host lowercased) and is
/// the value [`normalize_url`] maps all spellings of the base onto.
#[derive(Debug, Clone)]
pub struct CrawlScope {
    base_url: String,
    allowed_domains: HashSet<String>,
    allowed_paths: Vec<String>,
    user_agent: String,
    rate_limit: Duration,
    timeout: Duration,
    respect_robots_txt: bool,
    max_pages: usize,
}

impl CrawlScope {
    /// Builds a scope from validated crawler settings
    pub fn from_config(config: &CrawlerConfig) -> Result<Self, UrlError> {
        let base = parse_web_url(&config.base_url)?;

        Ok(Self {
            base_url: base.to_string(),
            allowed_domains: config
                .allowed_domains
                .iter()
                .map(|d| d.trim().to_lowercase())
                .collect(),
            allowed_paths: config.allowed_paths.clone(),
            user_agent: config.user_agent.clone(),
            rate_limit: seconds(config.rate_limit_seconds),
            timeout: seconds(config.timeout_seconds),
            respect_robots_txt: config.respect_robots_txt,
            max_pages: config.max_pages,
        })
    }

    /// Canonical base URL; the crawl's seed
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Product token of the user agent, used for robots.txt group matching
    ///
    /// ```
    /// # use adk_docs_crawler::config::CrawlerConfig;
    /// # use adk_docs_crawler::url::CrawlScope;
    /// let config = CrawlerConfig {
    ///     base_url: "https://docs.example/".to_string(),
    ///     allowed_domains: vec!["docs.example".to_string()],
    ///     allowed_paths: vec!["/".to_string()],
    ///     user_agent: "ADKDocsCrawler/1.0 (+https://docs.example/bot)".to_string(),
    ///     rate_limit_seconds: 1.0,
    ///     timeout_seconds: 30.0,
    ///     respect_robots_txt: true,
    ///     max_pages: 10,
    /// };
    /// let scope = CrawlScope::from_config(&config).unwrap();
    /// assert_eq!(scope.robots_agent(), "ADKDocsCrawler");
    /// ```
    pub fn robots_agent(&self) -> &str {
        self.user_agent
            .split(|c: char| c == '/' || c.is_whitespace())
            .next()
            .filter(|token| !token.is_empty())
            .unwrap_or(&self.user_agent)
    }

    pub fn rate_limit(&self) -> Duration {
        self.rate_limit
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn respect_robots_txt(&self) -> bool {
        self.respect_robots_txt
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// Normalizes a URL against this scope's base
    pub fn normalize(&self, url: &str) -> Result<String, UrlError> {
        normalize_url(url, &self.base_url)
    }

    /// Returns true if the URL may be crawled
    ///
    /// A URL is admitted when its scheme is http(s), its host (or
    /// `host:port`) is an allowed domain, and its path starts with one of
    /// the allowed prefixes.
    pub fn admits(&self, url: &str) -> bool {
        let Ok(parsed) = parse_web_url(url) else {
            return false;
        };

        let (Some(host), Some(netloc)) = (extract_domain(&parsed), extract_netloc(&parsed)) else {
            return false;
        };

        matches_domain(&self.allowed_domains, &host, &netloc)
            && matches_path_prefix(&self.allowed_paths, parsed.path())
    }

    /// Location of robots.txt for the base URL's origin
    pub fn robots_url(&self) -> Result<String, UrlError> {
        let base = parse_web_url(&self.base_url)?;
        let netloc = extract_netloc(&base).ok_or(UrlError::MissingDomain)?;
        Ok(format!("{}://{}/robots.txt", base.scheme(), netloc))
    }
}

/// Converts configured seconds to a duration clamped to `[0, MAX_INTERVAL_SECONDS]`
fn seconds(value: f64) -> Duration {
    Duration::try_from_secs_f64(value.clamp(0.0, MAX_INTERVAL_SECONDS)).unwrap_or(Duration::ZERO)
}
