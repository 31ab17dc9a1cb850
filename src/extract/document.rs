use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Extracted structural representation of one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Same identifier as the source page
    pub doc_id: String,
    pub url: String,
    pub title: String,
    /// Sections in document order; never empty
    pub sections: Vec<Section>,
    pub last_crawled_at: DateTime<Utc>,
    pub source_type: String,
}

/// A heading-delimited span of body text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading texts leading to this section; empty before the first heading
    pub heading_path: Vec<String>,
    /// Space-joined body text
    pub text: String,
    pub code_blocks: Vec<CodeBlock>,
}

/// Preformatted code kept apart from prose
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Language from a `language-*`/`lang-*` class, or "text"
    pub language: String,
    pub code: String,
}
