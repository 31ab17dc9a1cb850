use crate::crawler::Page;
use crate::state::UrlState;
use std::collections::{HashMap, VecDeque};

/// Mutable state of a single crawl run
///
/// Owns the FIFO frontier, the state of every URL ever admitted, and the
/// pages emitted so far. One value is created per run; nothing is shared
/// between runs.
#[derive(Debug, Default)]
pub struct CrawlState {
    frontier: VecDeque<String>,
    states: HashMap<String, UrlState>,
    pages: Vec<Page>,
}

impl CrawlState {
    /// Creates a state with the seed URL queued
    pub fn new(seed: &str) -> Self {
        let mut state = Self::default();
        state.enqueue(seed);
        state
    }

    /// Queues a normalized URL unless it has been seen before
    ///
    /// Returns true if the URL was added to the frontier.
    pub fn enqueue(&mut self, url: &str) -> bool {
        if self.states.contains_key(url) {
            return false;
        }
        self.states.insert(url.to_string(), UrlState::Queued);
        self.frontier.push_back(url.to_string());
        true
    }

    /// Pops the next URL and marks it visiting
    pub fn next_url(&mut self) -> Option<String> {
        let url = self.frontier.pop_front()?;
        self.transition(&url, UrlState::Visiting);
        Some(url)
    }

    /// Records a terminal outcome for a URL that is being visited
    pub fn finish(&mut self, url: &str, outcome: UrlState) {
        self.transition(url, outcome);
    }

    /// Records a fetched page and marks its URL visited
    pub fn record_page(&mut self, page: Page) {
        self.transition(&page.url, UrlState::Visited);
        self.pages.push(page);
    }

    fn transition(&mut self, url: &str, next: UrlState) {
        let current = self.states.get(url).copied();
        match current {
            Some(state) if state.can_transition_to(next) => {}
            other => tracing::debug!("Unexpected transition for {}: {:?} -> {}", url, other, next),
        }
        self.states.insert(url.to_string(), next);
    }

    pub fn state_of(&self, url: &str) -> Option<UrlState> {
        self.states.get(url).copied()
    }

    /// Returns true if the URL was ever queued
    pub fn is_known(&self, url: &str) -> bool {
        self.states.contains_key(url)
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn frontier_is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }

    /// Number of URLs that reached a terminal state
    pub fn visited_count(&self) -> usize {
        self.states.values().filter(|s| s.is_terminal()).count()
    }

    /// Number of URLs currently in the given state
    pub fn count(&self, state: UrlState) -> usize {
        self.states.values().filter(|s| **s == state).count()
    }

    /// URLs in the given state, sorted for stable reporting
    pub fn urls_in(&self, state: UrlState) -> Vec<&str> {
        let mut urls: Vec<&str> = self
            .states
            .iter()
            .filter(|(_, s)| **s == state)
            .map(|(url, _)| url.as_str())
            .collect();
        urls.sort_unstable();
        urls
    }
}
