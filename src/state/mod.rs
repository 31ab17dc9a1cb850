//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `UrlState`: per-URL state machine (queued, visiting, visited, rejected-by-robots, fetch-failed)
//! - `CrawlState`: the frontier, every admitted URL's state, and emitted pages for one run

mod crawl_state;
mod url_state;

// Re-export main types
pub use crawl_state::CrawlState;
pub use url_state::UrlState;
