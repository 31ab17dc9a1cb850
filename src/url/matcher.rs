use std::collections::HashSet;

/// Checks whether a URL's host or network location is an allowed domain
///
/// Both arguments are expected to be lowercase. A URL on a non-default
/// port matches either its bare host or its `host:port` form.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use adk_docs_crawler::url::matches_domain;
///
/// let allowed: HashSet<String> = ["docs.example".to_string()].into_iter().collect();
/// assert!(matches_domain(&allowed, "docs.example", "docs.example"));
/// assert!(!matches_domain(&allowed, "blog.docs.example", "blog.docs.example"));
/// ```
pub fn matches_domain(allowed: &HashSet<String>, host: &str, netloc: &str) -> bool {
    allowed.contains(netloc) || allowed.contains(host)
}

/// Checks whether a path starts with any allowed prefix
///
/// # Examples
///
/// ```
/// use adk_docs_crawler::url::matches_path_prefix;
///
/// let prefixes = vec!["/adk/".to_string()];
/// assert!(matches_path_prefix(&prefixes, "/adk/guide"));
/// assert!(!matches_path_prefix(&prefixes, "/other/page"));
/// ```
pub fn matches_path_prefix(prefixes: &[String], path: &str) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
}
