//! Cancellation tokens for in-flight analysis runs.
//!
//! The UI owns one [`AnalysisSession`]. Starting a new run or
//! navigating away invalidates older tokens, so results that arrive
//! late are discarded instead of clobbering newer view state.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct AnalysisSession {
    generation: AtomicU64,
}

/// Identifies the run a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken(u64);

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new run, invalidating tokens from earlier runs.
    pub fn begin(&self) -> RunToken {
        RunToken(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Abandon the current run without starting a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// True if `token` belongs to the most recent `begin`.
    pub fn is_current(&self, token: RunToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.0
    }

    /// Pass `value` through only when its run is still current; stale
    /// results are dropped.
    pub fn accept<T>(&self, token: RunToken, value: T) -> Option<T> {
        self.is_current(token).then_some(value)
    }
}
