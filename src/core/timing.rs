//! Timing Control Utilities
//!
//! `delay`, `debounce` and `throttle` on top of tokio timers. Wrapper state
//! sits behind an `Arc<Mutex<..>>` shared with the scheduled task; the lock
//! is always released before the wrapped callback runs.
//!
//! Calling a `Debounced` or `Throttled` wrapper spawns onto the current
//! tokio runtime and panics outside of one.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::models::config::ThrottleOptions;

type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Poisoning only means a callback panicked on another thread; the state
/// itself is still consistent.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Resolve after `ms` milliseconds without blocking the thread
pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

// ============================================
// DEBOUNCE
// ============================================

struct DebounceState {
    pending: Option<JoinHandle<()>>,
    /// Bumped on every call; a timer only fires if it is still current
    generation: u64,
}

/// Wrapper returned by [`debounce`]
pub struct Debounced<A> {
    f: Callback<A>,
    wait: Duration,
    state: Arc<Mutex<DebounceState>>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            wait: self.wait,
            state: Arc::clone(&self.state),
        }
    }
}

/// Postpone `f` until `ms` milliseconds have passed since the last call.
///
/// Only the arguments of the last call before the quiet period are used.
pub fn debounce<A, F>(f: F, ms: u64) -> Debounced<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debounced {
        f: Arc::new(f),
        wait: Duration::from_millis(ms),
        state: Arc::new(Mutex::new(DebounceState {
            pending: None,
            generation: 0,
        })),
    }
}

impl<A: Send + 'static> Debounced<A> {
    /// (Re)schedule the callback, cancelling any pending run
    pub fn call(&self, args: A) {
        let mut state = lock(&self.state);
        if let Some(handle) = state.pending.take() {
            handle.abort();
            debug!("debounce: pending run cancelled");
        }
        state.generation += 1;
        let generation = state.generation;

        let shared = Arc::clone(&self.state);
        let f = Arc::clone(&self.f);
        let wait = self.wait;
        state.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            {
                let mut state = lock(&shared);
                if state.generation != generation {
                    return;
                }
                state.pending = None;
            }
            f(args);
        }));
        debug!("debounce: run scheduled in {:?}", wait);
    }
}

// ============================================
// THROTTLE
// ============================================

struct ThrottleState<A> {
    last_invoked: Option<Instant>,
    trailing: Option<JoinHandle<()>>,
    /// Arguments for the scheduled trailing run
    latest: Option<A>,
    generation: u64,
}

/// Wrapper returned by [`throttle`]
pub struct Throttled<A> {
    f: Callback<A>,
    wait: Duration,
    options: ThrottleOptions,
    state: Arc<Mutex<ThrottleState<A>>>,
}

impl<A> Clone for Throttled<A> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            wait: self.wait,
            options: self.options,
            state: Arc::clone(&self.state),
        }
    }
}

/// Invoke `f` at most once per `ms` milliseconds.
///
/// With `leading` the first call runs immediately; with `trailing` a call
/// landing inside the window schedules one more run at the end of it using
/// the latest arguments. Disabling both means `f` never runs.
pub fn throttle<A, F>(f: F, ms: u64, options: ThrottleOptions) -> Throttled<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Throttled {
        f: Arc::new(f),
        wait: Duration::from_millis(ms),
        options,
        state: Arc::new(Mutex::new(ThrottleState {
            last_invoked: None,
            trailing: None,
            latest: None,
            generation: 0,
        })),
    }
}

impl<A: Send + 'static> Throttled<A> {
    pub fn call(&self, args: A) {
        let now = Instant::now();
        let mut state = lock(&self.state);

        let run_now = match state.last_invoked {
            None => self.options.leading,
            Some(last) => now.duration_since(last) >= self.wait,
        };

        if run_now {
            if let Some(handle) = state.trailing.take() {
                handle.abort();
                debug!("throttle: pending trailing run cancelled");
            }
            state.generation += 1;
            state.latest = None;
            state.last_invoked = Some(now);
            drop(state);

            (self.f)(args);
            return;
        }

        if !self.options.trailing {
            return;
        }

        state.latest = Some(args);
        if state.trailing.is_some() {
            return;
        }

        let remaining = match state.last_invoked {
            Some(last) => self.wait.saturating_sub(now.duration_since(last)),
            None => self.wait,
        };
        state.generation += 1;
        let generation = state.generation;

        let shared = Arc::clone(&self.state);
        let f = Arc::clone(&self.f);
        state.trailing = Some(tokio::spawn(async move {
            tokio::time::sleep(remaining).await;
            let args = {
                let mut state = lock(&shared);
                if state.generation != generation {
                    return;
                }
                state.trailing = None;
                state.last_invoked = Some(Instant::now());
                state.latest.take()
            };
            if let Some(args) = args {
                f(args);
            }
        }));
        debug!("throttle: trailing run scheduled in {:?}", remaining);
    }
}
