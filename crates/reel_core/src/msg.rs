use crate::{Generation, LoadError, MovieDetail, MovieSummary, SearchPage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The result list became visible for the first time.
    ListMounted,
    /// User edited the search input (raw, not yet debounced).
    InputChanged(String),
    /// The debounce timer for `generation` ran out.
    DebounceElapsed { generation: Generation },
    /// User submitted the current input.
    SearchSubmitted,
    /// User picked an entry from the suggestion list.
    SuggestionPicked { index: usize },
    /// User dismissed the suggestion list.
    SuggestionsDismissed,
    /// User asked to run the committed search again after a failure.
    RetryClicked,
    /// User cleared the accumulated results.
    ResetClicked,
    /// The scroll sentinel moved into or out of view.
    SentinelVisibility { visible: bool },
    /// Gateway answer for a page request.
    SearchCompleted {
        generation: Generation,
        result: Result<SearchPage, LoadError>,
    },
    /// Gateway answer for a suggestion request.
    SuggestionsLoaded {
        generation: Generation,
        items: Vec<MovieSummary>,
    },
    /// User opened the detail view for a title.
    DetailOpened { id: String },
    /// User left the detail view.
    DetailClosed,
    /// Gateway answer for a detail request.
    DetailCompleted {
        generation: Generation,
        result: Result<MovieDetail, LoadError>,
    },
    /// Owner is shutting down; nothing may be emitted afterwards.
    Teardown,
}
