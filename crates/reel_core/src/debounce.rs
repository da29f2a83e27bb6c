use crate::Generation;

/// Value side of a debounced input.
///
/// Every `push` supersedes the previous pending value and returns a fresh
/// generation. The timer owner reports back with [`Debounce::elapsed`]; only the
/// latest generation yields a value, and nothing is yielded after `cancel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debounce<T> {
    pending: Option<T>,
    generation: Generation,
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self {
            pending: None,
            generation: 0,
        }
    }
}

impl<T> Debounce<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: T) -> Generation {
        self.generation += 1;
        self.pending = Some(value);
        self.generation
    }

    pub fn elapsed(&mut self, generation: Generation) -> Option<T> {
        if generation != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
