use serde::Deserialize;

/// Main configuration structure for the docs pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub gcp: GcpConfig,
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub gcs_paths: GcsPaths,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Cloud project and bucket identification
#[derive(Debug, Clone, Deserialize)]
pub struct GcpConfig {
    /// GCP project identifier
    #[serde(default)]
    pub project_id: String,

    /// Bucket name, with or without a `gs://` prefix
    #[serde(default)]
    pub bucket_name: String,
}

impl GcpConfig {
    /// Returns the bucket name without any `gs://` prefix
    pub fn bucket(&self) -> &str {
        self.bucket_name
            .strip_prefix("gs://")
            .unwrap_or(&self.bucket_name)
            .trim_end_matches('/')
    }
}

/// Crawl scope and politeness configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Seed URL; always crawled first
    pub base_url: String,

    /// Hosts (optionally with `:port`) that links may point to
    pub allowed_domains: Vec<String>,

    /// Path prefixes that links must start with
    pub allowed_paths: Vec<String>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Minimum seconds between the start of consecutive page fetches
    #[serde(default = "default_rate_limit")]
    pub rate_limit_seconds: f64,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: f64,

    /// Whether robots.txt is fetched and honored
    #[serde(default = "default_true")]
    pub respect_robots_txt: bool,

    /// Maximum number of pages to emit
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

/// HTML extraction configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// Minimum trimmed characters for a section to count as content
    #[serde(default = "default_min_content_length")]
    pub min_content_length: usize,

    /// Tag written on every document and chunk
    #[serde(default = "default_source_type")]
    pub source_type: String,

    /// Keep ancestor headings of lower level in the heading path
    #[serde(default)]
    pub nested_headings: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_content_length: default_min_content_length(),
            source_type: default_source_type(),
            nested_headings: false,
        }
    }
}

/// Chunking configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChunkingConfig {
    /// Upper bound on estimated tokens (chars / 4) per chunk
    #[serde(default = "default_max_chunk_tokens")]
    pub max_chunk_tokens: usize,

    /// Sections with fewer trimmed characters are dropped
    #[serde(default = "default_min_section_chars")]
    pub min_section_chars: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_tokens: default_max_chunk_tokens(),
            min_section_chars: default_min_section_chars(),
        }
    }
}

/// Local artifact locations
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_tmp_dir")]
    pub tmp_dir: String,

    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    #[serde(default = "default_raw_docs_file")]
    pub raw_docs_file: String,

    #[serde(default = "default_chunks_file")]
    pub chunks_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            tmp_dir: default_tmp_dir(),
            manifest_file: default_manifest_file(),
            raw_docs_file: default_raw_docs_file(),
            chunks_file: default_chunks_file(),
        }
    }
}

/// Object storage keys for uploaded artifacts
#[derive(Debug, Clone, Deserialize)]
pub struct GcsPaths {
    /// Fixed key for the documents JSONL (overwritten each run)
    #[serde(default = "default_gcs_raw_docs")]
    pub raw_docs: String,

    /// Fixed key for the chunks JSONL (overwritten each run)
    #[serde(default = "default_gcs_chunks")]
    pub chunks: String,

    /// Prefix for timestamped manifests
    #[serde(default = "default_gcs_manifests")]
    pub manifests: String,
}

impl Default for GcsPaths {
    fn default() -> Self {
        Self {
            raw_docs: default_gcs_raw_docs(),
            chunks: default_gcs_chunks(),
            manifests: default_gcs_manifests(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// DEBUG, INFO, WARNING or ERROR
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub log_to_file: bool,

    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_to_file: false,
            log_file: default_log_file(),
        }
    }
}

fn default_user_agent() -> String {
    "ADKDocsCrawler/1.0".to_string()
}

fn default_rate_limit() -> f64 {
    1.0
}

fn default_timeout() -> f64 {
    30.0
}

fn default_true() -> bool {
    true
}

fn default_max_pages() -> usize {
    500
}

fn default_min_content_length() -> usize {
    50
}

fn default_source_type() -> String {
    "adk-docs".to_string()
}

fn default_max_chunk_tokens() -> usize {
    1000
}

fn default_min_section_chars() -> usize {
    50
}

fn default_tmp_dir() -> String {
    "tmp/adk_crawler".to_string()
}

fn default_manifest_file() -> String {
    "tmp/adk_crawler/manifest.json".to_string()
}

fn default_raw_docs_file() -> String {
    "tmp/adk_crawler/docs.jsonl".to_string()
}

fn default_chunks_file() -> String {
    "tmp/adk_crawler/chunks.jsonl".to_string()
}

fn default_gcs_raw_docs() -> String {
    "adk-docs/raw/docs.jsonl".to_string()
}

fn default_gcs_chunks() -> String {
    "adk-docs/chunks/chunks.jsonl".to_string()
}

fn default_gcs_manifests() -> String {
    "adk-docs/manifests/".to_string()
}

fn default_log_level() -> String {
    "INFO".to_string()
}

fn default_log_file() -> String {
    "tmp/adk_docs_crawler.log".to_string()
}
