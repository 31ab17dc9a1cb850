//! ADK Docs Crawler: a documentation crawl-and-index pipeline
//!
//! This crate walks a documentation site within a declared scope, extracts
//! heading-segmented sections from each page, splits them into token-bounded
//! chunks for retrieval indexing, and uploads the artifacts to object storage.

pub mod chunk;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod robots;
pub mod state;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for pipeline operations
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Extraction failed for {url}: {message}")]
    Extraction { url: String, message: String },

    #[error("Chunking failed for {url}: {message}")]
    Chunking { url: String, message: String },

    #[error("Upload error: {0}")]
    Upload(#[from] object_store::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Missing environment variable for {key}. Please set {var} environment variable.")]
    MissingEnvVar { key: String, var: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use chunk::{Chunk, Chunker};
pub use config::Config;
pub use crawler::{CrawlOutcome, Crawler, Page};
pub use extract::{CodeBlock, Document, Extractor, Section};
pub use output::Manifest;
pub use state::{CrawlState, UrlState};
pub use storage::{UploadedArtifacts, Uploader};
pub use url::{normalize_url, CrawlScope};
