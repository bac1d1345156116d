//! Last-request-wins guard for overlapping gateway calls.
//!
//! Gateway calls carry no ordering guarantee: two in-flight requests
//! resolve in whatever order the network allows. A call site that displays
//! results issues a token per invocation and discards any response whose
//! token is no longer the latest, so the shown result is always that of
//! the most recent request rather than the slowest one.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
pub struct RequestTracker {
    counter: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        RequestTracker {
            counter: AtomicU64::new(0),
        }
    }

    /// Issues the next token; the previously issued token becomes stale.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.counter.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.counter.load(Ordering::Relaxed)
    }

    /// Returns the value only when the token is still the latest issued.
    pub fn accept<T>(&self, token: RequestToken, value: T) -> Option<T> {
        if self.is_current(token) {
            Some(value)
        } else {
            None
        }
    }
}
