use crate::MovieSummary;

/// Identity of the element currently observed as the scroll sentinel.
/// Ids can repeat across pages, so the position is part of the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentinelKey {
    pub index: usize,
    pub id: String,
}

impl SentinelKey {
    pub fn last_of(results: &[MovieSummary]) -> Option<Self> {
        results.last().map(|movie| Self {
            index: results.len() - 1,
            id: movie.id.clone(),
        })
    }
}

/// Edge detector for the "last rendered item became visible" signal.
///
/// Observing a new element re-arms the watcher; each observed element can fire
/// at most once per transition into view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrollSentinel {
    observed: Option<SentinelKey>,
    intersecting: bool,
}

impl ScrollSentinel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches observation to `key`, releasing the old element. Returns `true` if it changed.
    pub fn observe(&mut self, key: Option<SentinelKey>) -> bool {
        if self.observed == key {
            return false;
        }
        self.observed = key;
        self.intersecting = false;
        true
    }

    /// Records a visibility report and returns `true` on a transition into view.
    pub fn visibility_changed(&mut self, visible: bool) -> bool {
        if self.observed.is_none() {
            return false;
        }
        let entered = visible && !self.intersecting;
        self.intersecting = visible;
        entered
    }

    pub fn observed(&self) -> Option<&SentinelKey> {
        self.observed.as_ref()
    }
}
