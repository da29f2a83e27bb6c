use std::fmt;

/// Monotonic per-store counter used to tag dispatched requests.
pub type Generation = u64;

/// Marker the remote service puts in its quota message.
pub const RATE_LIMIT_MARKER: &str = "Request limit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSummary {
    pub id: String,
    pub title: String,
    pub year: String,
    pub kind: String,
    /// `None` when the service reported no poster.
    pub poster_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub source: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovieDetail {
    pub id: String,
    pub title: String,
    pub year: String,
    pub kind: String,
    pub poster_url: Option<String>,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub ratings: Vec<Rating>,
    pub metascore: String,
    pub imdb_rating: String,
    pub imdb_votes: String,
    pub box_office: Option<String>,
    pub production: String,
    pub website: String,
    pub response: bool,
}

/// One page of search results as reported by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPage {
    pub items: Vec<MovieSummary>,
    pub total_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    RateLimited,
    Unauthorized,
    Network,
}

/// A failed search or detail fetch, carried as data through the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub kind: FailureKind,
    pub message: String,
}

impl LoadError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.kind == FailureKind::RateLimited || self.message.contains(RATE_LIMIT_MARKER)
    }

    /// Extra copy shown next to the message when the user has to fix configuration or wait.
    pub fn remediation(&self) -> Option<&'static str> {
        if self.is_rate_limited() || self.kind == FailureKind::Unauthorized {
            Some(
                "The OMDB API key may be invalid, unauthorized, or the request limit has been \
                 reached. Check the configured API key or try again later.",
            )
        } else {
            None
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
