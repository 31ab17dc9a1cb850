/// Per-URL crawl state definitions
use std::fmt;

/// Represents the current state of a URL in the crawl process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlState {
    // ===== Active States =====
    /// Admitted to the frontier, waiting to be fetched
    Queued,

    /// Popped from the frontier; robots check and fetch in progress
    Visiting,

    // ===== Terminal States =====
    /// Fetched successfully and emitted as a Page
    Visited,

    /// Disallowed by robots.txt; never fetched
    RejectedByRobots,

    /// Network error, timeout, or non-2xx status
    FetchFailed,
}

impl UrlState {
    /// Returns true if this is a terminal state (the URL is never revisited)
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    /// Returns true if the URL may still be processed
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Queued | Self::Visiting)
    }

    /// Returns true if a Page was emitted for the URL
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Visited)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Visiting => "visiting",
            Self::Visited => "visited",
            Self::RejectedByRobots => "rejected_by_robots",
            Self::FetchFailed => "fetch_failed",
        }
    }

    /// Returns true if moving from `self` to `next` is a legal transition
    ///
    /// Queued → Visiting → {Visited, RejectedByRobots, FetchFailed}.
    pub fn can_transition_to(&self, next: UrlState) -> bool {
        match self {
            Self::Queued => next == Self::Visiting,
            Self::Visiting => next.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for UrlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
