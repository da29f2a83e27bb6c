use engine_logging::{engine_debug, engine_warn};

use crate::{Generation, LoadError, MovieSummary, SearchPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
    Loaded,
    Failed,
}

/// A page fetch the store wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: Generation,
    pub query: String,
    pub page: u32,
}

/// Search/pagination state for one session.
///
/// Results accumulate across pages of the committed query. At most one page
/// request is live at a time; a new search supersedes an in-flight one and the
/// superseded response is discarded by generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStore {
    query: String,
    page: u32,
    results: Vec<MovieSummary>,
    total_count: usize,
    phase: SearchPhase,
    error: Option<LoadError>,
    has_more: bool,
    generation: Generation,
    in_flight_page: Option<u32>,
}

impl Default for SearchStore {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            results: Vec::new(),
            total_count: 0,
            phase: SearchPhase::Idle,
            error: None,
            has_more: true,
            generation: 0,
            in_flight_page: None,
        }
    }
}

impl SearchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits `query` and asks for its first page. Blank queries are ignored.
    pub fn start_search(&mut self, query: &str) -> Option<SearchRequest> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        self.query = query.to_string();
        self.results.clear();
        self.total_count = 0;
        self.page = 1;
        self.error = None;
        self.has_more = true;
        Some(self.dispatch(1))
    }

    /// Asks for the next page of the committed query.
    ///
    /// No-op while a page is in flight, after the last page, or before any search.
    pub fn load_more(&mut self) -> Option<SearchRequest> {
        if !self.can_load_more() {
            return None;
        }
        self.error = None;
        Some(self.dispatch(self.page + 1))
    }

    /// Drops accumulated results but keeps the committed query.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.in_flight_page = None;
        self.results.clear();
        self.total_count = 0;
        self.page = 1;
        self.has_more = true;
        self.error = None;
        self.phase = SearchPhase::Idle;
    }

    /// Applies a page response. Returns `false` when the response was stale.
    pub fn apply(&mut self, generation: Generation, result: Result<SearchPage, LoadError>) -> bool {
        let page = match self.in_flight_page {
            Some(page) if generation == self.generation => page,
            _ => {
                engine_debug!(
                    "discarding stale search response generation={} current={}",
                    generation,
                    self.generation
                );
                return false;
            }
        };
        self.in_flight_page = None;

        match result {
            Ok(SearchPage { items, total_count }) => {
                let received = items.len();
                if page == 1 {
                    self.results = items;
                } else {
                    self.results.extend(items);
                }
                self.results.truncate(total_count);
                self.total_count = total_count;
                self.page = page;
                self.has_more = self.results.len() < total_count && (page == 1 || received > 0);
                self.phase = SearchPhase::Loaded;
                engine_debug!(
                    "search page={} received={} accumulated={} total={}",
                    page,
                    received,
                    self.results.len(),
                    total_count
                );
            }
            Err(err) => {
                engine_warn!("search page={} failed: {}", page, err);
                self.error = Some(err);
                self.has_more = false;
                self.phase = SearchPhase::Failed;
            }
        }
        true
    }

    pub fn can_load_more(&self) -> bool {
        !self.is_loading() && self.has_more && !self.query.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn results(&self) -> &[MovieSummary] {
        &self.results
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    fn dispatch(&mut self, page: u32) -> SearchRequest {
        self.generation += 1;
        self.in_flight_page = Some(page);
        self.phase = SearchPhase::Searching;
        SearchRequest {
            generation: self.generation,
            query: self.query.clone(),
            page,
        }
    }
}
