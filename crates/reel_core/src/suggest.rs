use engine_logging::engine_debug;

use crate::{Generation, MovieSummary};

/// Inputs shorter than this never reach the gateway.
pub const MIN_SUGGESTION_CHARS: usize = 2;
/// Upper bound on the visible suggestion list.
pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub generation: Generation,
    pub query: String,
}

/// Live autocomplete list, independent of the paginated results.
/// Only the most recently dispatched fetch may set the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuggestionStore {
    suggestions: Vec<MovieSummary>,
    generation: Generation,
}

pub fn is_suggestable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_SUGGESTION_CHARS
}

impl SuggestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a request for `query`, or clears the list when the query is too short.
    pub fn fetch(&mut self, query: &str) -> Option<SuggestionRequest> {
        if !is_suggestable(query) {
            self.clear();
            return None;
        }
        self.generation += 1;
        Some(SuggestionRequest {
            generation: self.generation,
            query: query.trim().to_string(),
        })
    }

    pub fn apply(&mut self, generation: Generation, mut items: Vec<MovieSummary>) -> bool {
        if generation != self.generation {
            engine_debug!(
                "discarding stale suggestions generation={} current={}",
                generation,
                self.generation
            );
            return false;
        }
        items.truncate(MAX_SUGGESTIONS);
        self.suggestions = items;
        true
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.suggestions.clear();
    }

    pub fn suggestions(&self) -> &[MovieSummary] {
        &self.suggestions
    }
}
