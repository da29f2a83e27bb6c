use std::time::Duration;

use crate::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// (Re)start the debounce timer; the previous one must not fire.
    ScheduleDebounce {
        generation: Generation,
        delay: Duration,
    },
    CancelDebounce,
    FetchSearchPage {
        generation: Generation,
        query: String,
        page: u32,
    },
    FetchSuggestions {
        generation: Generation,
        query: String,
    },
    FetchDetail {
        generation: Generation,
        id: String,
    },
}
