use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One successfully fetched URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Hex SHA-256 of the normalized URL
    pub doc_id: String,
    /// Normalized URL
    pub url: String,
    /// `<title>` text, or the URL when the page has none
    pub title: String,
    pub raw_html: String,
    /// Normalized in-scope outbound links, in first-seen order
    pub links: Vec<String>,
    pub last_crawled_at: DateTime<Utc>,
    pub status_code: u16,
    pub content_type: String,
}

/// Computes the stable document identifier for a normalized URL
///
/// ```
/// use adk_docs_crawler::crawler::doc_id_for;
///
/// let id = doc_id_for("https://docs.example/adk/");
/// assert_eq!(id.len(), 64);
/// assert_eq!(id, doc_id_for("https://docs.example/adk/"));
/// ```
pub fn doc_id_for(url: &str) -> String {
    hex::encode(Sha256::digest(url.as_bytes()))
}
