use crate::{MovieDetail, MovieSummary, SearchPhase};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorView {
    pub message: String,
    pub rate_limited: bool,
    pub remediation: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailView {
    pub id: String,
    pub loading: bool,
    pub detail: Option<MovieDetail>,
    pub error: Option<ErrorView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub query: String,
    pub phase: SearchPhase,
    pub page: u32,
    pub results: Vec<MovieSummary>,
    pub total_count: usize,
    pub loading: bool,
    pub has_more: bool,
    pub error: Option<ErrorView>,
    /// Committed query finished with nothing to show.
    pub no_results: bool,
    pub suggestions: Vec<MovieSummary>,
    pub detail: Option<DetailView>,
    pub dirty: bool,
}
