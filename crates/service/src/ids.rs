//! Identifier issuance.

use std::sync::atomic::{AtomicI64, Ordering};

use models::HeroId;

/// Hands out strictly increasing hero ids. Never resets, never reuses a value.
#[derive(Debug)]
pub struct IdIssuer {
    next: AtomicI64,
}

impl IdIssuer {
    /// The first call to [`IdIssuer::next`] returns `start`.
    pub fn new(start: HeroId) -> Self {
        Self { next: AtomicI64::new(start) }
    }

    pub fn next(&self) -> HeroId {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// Value the next call would return.
    pub fn peek(&self) -> HeroId {
        self.next.load(Ordering::SeqCst)
    }
}

impl Default for IdIssuer {
    fn default() -> Self {
        Self::new(1)
    }
}
