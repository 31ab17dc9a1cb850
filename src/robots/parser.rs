//! Robots.txt rule evaluation backed by the robotstxt crate

use robotstxt::DefaultMatcher;

/// Robots.txt rules for one origin
///
/// Either a permissive policy (robots.txt missing, unreachable, or disabled)
/// or the raw file content, evaluated on demand against a full URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotsPolicy {
    AllowAll,
    Rules(String),
}

impl RobotsPolicy {
    pub fn from_content(content: &str) -> Self {
        if content.trim().is_empty() {
            Self::AllowAll
        } else {
            Self::Rules(content.to_string())
        }
    }

    /// Checks if a URL may be fetched by the given agent token
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL to check
    /// * `agent` - User agent product token (e.g. "ADKDocsCrawler")
    pub fn is_allowed(&self, url: &str, agent: &str) -> bool {
        match self {
            Self::AllowAll => true,
            Self::Rules(content) => {
                let mut matcher = DefaultMatcher::default();
                matcher.one_agent_allowed_by_robots(content, agent, url)
            }
        }
    }

    pub fn allows_everything(&self) -> bool {
        matches!(self, Self::AllowAll)
    }
}
