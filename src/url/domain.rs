use url::Url;

/// Extracts the lowercase host from a URL
///
/// # Examples
///
/// ```
/// use url::Url;
/// use adk_docs_crawler::url::extract_domain;
///
/// let url = Url::parse("https://DOCS.example/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("docs.example".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Extracts the network location (`host` or `host:port` when a non-default port is given)
///
/// # Examples
///
/// ```
/// use url::Url;
/// use adk_docs_crawler::url::extract_netloc;
///
/// let url = Url::parse("http://127.0.0.1:8080/docs").unwrap();
/// assert_eq!(extract_netloc(&url), Some("127.0.0.1:8080".to_string()));
///
/// let url = Url::parse("https://docs.example:443/docs").unwrap();
/// assert_eq!(extract_netloc(&url), Some("docs.example".to_string()));
/// ```
pub fn extract_netloc(url: &Url) -> Option<String> {
    let host = extract_domain(url)?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host,
    })
}
