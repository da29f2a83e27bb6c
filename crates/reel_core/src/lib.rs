//! Reel core: pure search, suggestion and detail state machines.
mod debounce;
mod detail;
mod effect;
mod model;
mod msg;
mod search;
mod sentinel;
mod state;
mod suggest;
mod update;
mod view_model;

pub use debounce::Debounce;
pub use detail::{DetailRequest, DetailStore};
pub use effect::Effect;
pub use model::{
    FailureKind, Generation, LoadError, MovieDetail, MovieSummary, Rating, SearchPage,
    RATE_LIMIT_MARKER,
};
pub use msg::Msg;
pub use search::{SearchPhase, SearchRequest, SearchStore};
pub use sentinel::{ScrollSentinel, SentinelKey};
pub use state::{AppState, CoreSettings, DEFAULT_DEBOUNCE, DEFAULT_QUERY};
pub use suggest::{
    is_suggestable, SuggestionRequest, SuggestionStore, MAX_SUGGESTIONS, MIN_SUGGESTION_CHARS,
};
pub use update::update;
pub use view_model::{AppViewModel, DetailView, ErrorView};
