//! Robots.txt handling module
//!
//! The crawl fetches robots.txt once for the base URL's origin and consults
//! it before every page fetch. Fetch failures never stop a crawl.

mod parser;

pub use parser::RobotsPolicy;

use reqwest::Client;

/// Fetches and parses robots.txt
///
/// Fails open: a network error or non-2xx response yields
/// [`RobotsPolicy::AllowAll`] and logs a warning.
pub async fn fetch_robots(client: &Client, robots_url: &str) -> RobotsPolicy {
    let response = match client.get(robots_url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Could not fetch {}: {}; allowing all", robots_url, e);
            return RobotsPolicy::AllowAll;
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(
            "robots.txt at {} returned HTTP {}; allowing all",
            robots_url,
            status.as_u16()
        );
        return RobotsPolicy::AllowAll;
    }

    match response.text().await {
        Ok(body) => {
            tracing::info!("Loaded robots.txt from {}", robots_url);
            RobotsPolicy::from_content(&body)
        }
        Err(e) => {
            tracing::warn!("Could not read {}: {}; allowing all", robots_url, e);
            RobotsPolicy::AllowAll
        }
    }
}
