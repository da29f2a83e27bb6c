use std::time::Duration;

use crate::view_model::{AppViewModel, DetailView, ErrorView};
use crate::{
    Debounce, DetailStore, LoadError, ScrollSentinel, SearchPhase, SearchStore, SentinelKey,
    SuggestionStore,
};

/// Query issued when the result list mounts without a committed search.
pub const DEFAULT_QUERY: &str = "Batman";
/// Quiet period before typed input turns into a suggestion fetch.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreSettings {
    pub debounce_delay: Duration,
    pub default_query: String,
}

impl Default for CoreSettings {
    fn default() -> Self {
        Self {
            debounce_delay: DEFAULT_DEBOUNCE,
            default_query: DEFAULT_QUERY.to_string(),
        }
    }
}

/// Whole client session: the independent stores plus the raw input line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    settings: CoreSettings,
    input: String,
    pub(crate) debounce: Debounce<String>,
    pub(crate) search: SearchStore,
    pub(crate) suggestions: SuggestionStore,
    pub(crate) detail: DetailStore,
    pub(crate) sentinel: ScrollSentinel,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: CoreSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &CoreSettings {
        &self.settings
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn search(&self) -> &SearchStore {
        &self.search
    }

    pub fn suggestions(&self) -> &SuggestionStore {
        &self.suggestions
    }

    pub fn detail(&self) -> &DetailStore {
        &self.detail
    }

    pub fn sentinel(&self) -> &ScrollSentinel {
        &self.sentinel
    }

    pub fn view(&self) -> AppViewModel {
        let search = &self.search;
        let detail = self.detail.id().map(|id| DetailView {
            id: id.to_string(),
            loading: self.detail.is_loading(),
            detail: self.detail.detail().cloned(),
            error: self.detail.error().map(error_view),
        });
        AppViewModel {
            input: self.input.clone(),
            query: search.query().to_string(),
            phase: search.phase(),
            page: search.page(),
            results: search.results().to_vec(),
            total_count: search.total_count(),
            loading: search.is_loading(),
            has_more: search.has_more(),
            error: search.error().map(error_view),
            no_results: search.phase() == SearchPhase::Loaded && search.results().is_empty(),
            suggestions: self.suggestions.suggestions().to_vec(),
            detail,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.mark_dirty();
        }
    }

    /// Points the sentinel at the current last result.
    pub(crate) fn rearm_sentinel(&mut self) {
        let key = SentinelKey::last_of(self.search.results());
        self.sentinel.observe(key);
    }
}

fn error_view(err: &LoadError) -> ErrorView {
    ErrorView {
        message: err.message.clone(),
        rate_limited: err.is_rate_limited(),
        remediation: err.remediation(),
    }
}
