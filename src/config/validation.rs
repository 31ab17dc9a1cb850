use crate::config::types::{
    ChunkingConfig, Config, CrawlerConfig, GcpConfig, GcsPaths, OutputConfig,
};
use crate::ConfigError;
use url::Url;

/// Largest accepted rate limit or timeout, in seconds (one day)
pub const MAX_INTERVAL_SECONDS: f64 = 86_400.0;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_gcp_config(&config.gcp)?;
    validate_crawler_config(&config.crawler)?;
    validate_chunking_config(&config.chunking)?;
    validate_output_config(&config.output)?;
    validate_gcs_paths(&config.gcs_paths)?;
    Ok(())
}

/// Validates project and bucket values after env substitution
fn validate_gcp_config(config: &GcpConfig) -> Result<(), ConfigError> {
    for (key, value) in [
        ("gcp.project_id", &config.project_id),
        ("gcp.bucket_name", &config.bucket_name),
    ] {
        if let Some(var) = unresolved_placeholder(value) {
            return Err(ConfigError::MissingEnvVar {
                key: key.to_string(),
                var,
            });
        }

        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", key)));
        }
    }

    tracing::debug!(
        "GCP config validated: project={}, bucket={}",
        config.project_id,
        config.bucket()
    );
    Ok(())
}

/// Returns the variable name of the first `${VAR}` left in `value`
fn unresolved_placeholder(value: &str) -> Option<String> {
    let start = value.find("${")?;
    let rest = &value[start + 2..];
    let name = match rest.find('}') {
        Some(end) => &rest[..end],
        None => rest,
    };
    Some(name.to_string())
}

/// Validates crawl scope and politeness settings
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' must use http or https",
            config.base_url
        )));
    }

    if config.allowed_domains.is_empty() {
        return Err(ConfigError::Validation(
            "crawler.allowed_domains must list at least one domain".to_string(),
        ));
    }

    if config.allowed_domains.iter().any(|d| d.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "crawler.allowed_domains cannot contain empty entries".to_string(),
        ));
    }

    if config.allowed_paths.is_empty() {
        return Err(ConfigError::Validation(
            "crawler.allowed_paths must list at least one path prefix".to_string(),
        ));
    }

    for prefix in &config.allowed_paths {
        if !prefix.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "allowed path prefix '{}' must start with '/'",
                prefix
            )));
        }
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler.user_agent cannot be empty".to_string(),
        ));
    }

    if !config.rate_limit_seconds.is_finite() || config.rate_limit_seconds < 0.0 {
        return Err(ConfigError::Validation(format!(
            "rate_limit_seconds must be >= 0, got {}",
            config.rate_limit_seconds
        )));
    }

    if !config.timeout_seconds.is_finite() || config.timeout_seconds <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "timeout_seconds must be > 0, got {}",
            config.timeout_seconds
        )));
    }

    for (key, value) in [
        ("rate_limit_seconds", config.rate_limit_seconds),
        ("timeout_seconds", config.timeout_seconds),
    ] {
        if value > MAX_INTERVAL_SECONDS {
            return Err(ConfigError::Validation(format!(
                "{} must be <= {}, got {}",
                key, MAX_INTERVAL_SECONDS, value
            )));
        }
    }

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    Ok(())
}

/// Validates chunking limits
fn validate_chunking_config(config: &ChunkingConfig) -> Result<(), ConfigError> {
    if config.max_chunk_tokens < 1 {
        return Err(ConfigError::Validation(format!(
            "max_chunk_tokens must be >= 1, got {}",
            config.max_chunk_tokens
        )));
    }
    Ok(())
}

/// Validates local artifact paths
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    for (key, value) in [
        ("output.tmp_dir", &config.tmp_dir),
        ("output.manifest_file", &config.manifest_file),
        ("output.raw_docs_file", &config.raw_docs_file),
        ("output.chunks_file", &config.chunks_file),
    ] {
        if value.is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", key)));
        }
    }
    Ok(())
}

/// Validates object storage keys
fn validate_gcs_paths(paths: &GcsPaths) -> Result<(), ConfigError> {
    for (key, value) in [
        ("gcs_paths.raw_docs", &paths.raw_docs),
        ("gcs_paths.chunks", &paths.chunks),
    ] {
        if value.is_empty() || value.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "{} must name an object key, got '{}'",
                key, value
            )));
        }
    }
    Ok(())
}
