//! Cooperative cancellation token shared between a scheduler and the
//! playback it started.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

#[derive(Debug, Default)]
struct Inner {
    done: Mutex<bool>,
    cond: Condvar,
}

/// A cancellation token.
///
/// Clones share the same flag. Cancellation wakes every thread blocked in
/// [`wait_until`](Self::wait_until), and it is serialised with
/// [`run_unless_done`](Self::run_unless_done): once `cancel` returns, no
/// guarded closure of this context will start.
#[derive(Clone, Debug, Default)]
pub struct Context {
    inner: Arc<Inner>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, bool> {
        self.inner.done.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        *self.lock()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        let mut done = self.lock();
        *done = true;
        self.inner.cond.notify_all();
    }

    /// Block until `deadline` passes or the context is cancelled.
    ///
    /// Returns `true` if the context was cancelled.
    pub fn wait_until(&self, deadline: Instant) -> bool {
        let mut done = self.lock();
        loop {
            if *done {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            done = self
                .inner
                .cond
                .wait_timeout(done, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
    }

    /// Run `f` unless the context is cancelled, holding the cancellation
    /// lock for the duration of the call.
    ///
    /// `f` must not call [`cancel`](Self::cancel) on this context.
    pub fn run_unless_done<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        let done = self.lock();
        if *done {
            return None;
        }
        let out = f();
        drop(done);
        Some(out)
    }
}
