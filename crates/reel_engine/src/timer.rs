use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A single pending timer owned by its creator.
///
/// Re-arming cancels the previous timer; dropping the owner cancels the pending one.
/// A timer that has fired is no longer armed.
pub struct ScopedTimer {
    handle: Handle,
    pending: Option<(CancellationToken, JoinHandle<()>)>,
}

impl ScopedTimer {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            pending: None,
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }

    pub fn arm<F>(&mut self, delay: Duration, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let task = self.handle.spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    if !cancelled.is_cancelled() {
                        on_fire();
                    }
                }
            }
        });
        self.pending = Some((token, task));
    }

    pub fn cancel(&mut self) {
        if let Some((token, _)) = self.pending.take() {
            token.cancel();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|(token, task)| !token.is_cancelled() && !task.is_finished())
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Forwards only the last value pushed within a quiet period.
pub struct Debouncer<T> {
    timer: ScopedTimer,
    sink: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(handle: Handle, sink: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            timer: ScopedTimer::new(handle),
            sink: Arc::new(sink),
        }
    }

    /// Restarts the quiet period with `value` as the candidate.
    pub fn push(&mut self, value: T, delay: Duration) {
        let sink = self.sink.clone();
        self.timer.arm(delay, move || sink(value));
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_armed()
    }
}
