use crate::UrlError;
use url::Url;

/// Normalizes a URL for frontier admission and deduplication
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Require an HTTP or HTTPS scheme and a host
/// 3. Remove fragment (everything after #)
/// 4. Remove a single trailing slash, except that any URL equal to the base
///    URL with or without its trailing slash becomes the base URL exactly
///
/// Query strings are left untouched; a URL with a query keeps its path as-is.
///
/// # Arguments
///
/// * `url_str` - The URL string to normalize
/// * `base_url` - The crawl's canonical base URL
///
/// # Examples
///
/// ```
/// use adk_docs_crawler::url::normalize_url;
///
/// let base = "https://docs.example/adk/";
/// assert_eq!(
///     normalize_url("https://docs.example/adk/page/#intro", base).unwrap(),
///     "https://docs.example/adk/page"
/// );
/// assert_eq!(normalize_url("https://docs.example/adk", base).unwrap(), base);
/// ```
pub fn normalize_url(url_str: &str, base_url: &str) -> Result<String, UrlError> {
    let url = parse_web_url(url_str)?;
    let serialized = url.as_str();

    if url.query().is_some() {
        return Ok(serialized.to_string());
    }

    let trimmed = strip_one_slash(serialized);
    if trimmed == strip_one_slash(base_url) {
        return Ok(base_url.to_string());
    }

    Ok(trimmed.to_string())
}

/// Parses an absolute http(s) URL and drops its fragment
pub fn parse_web_url(url_str: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingDomain);
    }

    url.set_fragment(None);
    Ok(url)
}

fn strip_one_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}
