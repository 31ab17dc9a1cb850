//! Configuration module
//!
//! This module handles loading YAML configuration files, substituting
//! `${VAR}` environment placeholders, and validating the result.
//!
//! # Example
//!
//! ```no_run
//! use adk_docs_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.yaml")).unwrap();
//! println!("Crawler will fetch at most {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    ChunkingConfig, Config, CrawlerConfig, ExtractionConfig, GcpConfig, GcsPaths, LoggingConfig,
    OutputConfig,
};

// Re-export parser functions
pub use parser::{
    env_template, load_config, parse_config, placeholders, substitute_env_vars, substitute_with,
};

pub use validation::MAX_INTERVAL_SECONDS;
