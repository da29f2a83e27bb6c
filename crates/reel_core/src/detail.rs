use engine_logging::{engine_debug, engine_warn};

use crate::{Generation, LoadError, MovieDetail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub generation: Generation,
    pub id: String,
}

/// Single-title fetch tied to the lifetime of the detail view.
/// Nothing is cached: leaving the view drops the detail and invalidates any pending fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailStore {
    id: Option<String>,
    detail: Option<MovieDetail>,
    loading: bool,
    error: Option<LoadError>,
    generation: Generation,
}

impl DetailStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, id: &str) -> DetailRequest {
        self.generation += 1;
        self.id = Some(id.to_string());
        self.detail = None;
        self.error = None;
        self.loading = true;
        DetailRequest {
            generation: self.generation,
            id: id.to_string(),
        }
    }

    pub fn exit(&mut self) {
        self.generation += 1;
        self.id = None;
        self.detail = None;
        self.error = None;
        self.loading = false;
    }

    pub fn apply(&mut self, generation: Generation, result: Result<MovieDetail, LoadError>) -> bool {
        if generation != self.generation || self.id.is_none() {
            engine_debug!(
                "discarding stale detail generation={} current={}",
                generation,
                self.generation
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(detail) => self.detail = Some(detail),
            Err(err) => {
                engine_warn!("detail fetch for {:?} failed: {}", self.id, err);
                self.error = Some(err);
            }
        }
        true
    }

    pub fn is_open(&self) -> bool {
        self.id.is_some()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn detail(&self) -> Option<&MovieDetail> {
        self.detail.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }
}
