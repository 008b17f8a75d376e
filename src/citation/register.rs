//! Session-wide citation counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out citation labels `1, 2, 3, ...` for one document session.
///
/// Labels are never reused and never reset. Reading and advancing the
/// counter is a single atomic step, so concurrent callers still receive
/// distinct, gap-free labels.
#[derive(Debug)]
pub struct CitationRegister {
    first: u64,
    next: AtomicU64,
}

impl CitationRegister {
    /// First label issued in a session.
    pub const FIRST_LABEL: u64 = 1;

    /// Create a register for a new session.
    pub fn new() -> Self {
        Self::starting_at(Self::FIRST_LABEL)
    }

    /// Create a register that continues numbering at `first`, e.g. for the
    /// second part of a document split across several builds.
    pub fn starting_at(first: u64) -> Self {
        Self {
            first,
            next: AtomicU64::new(first),
        }
    }

    /// Take the current label and advance the counter.
    pub fn next_label(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// The label the next citation will receive.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }

    /// Number of labels issued so far.
    pub fn issued(&self) -> u64 {
        self.peek().saturating_sub(self.first)
    }
}

impl Default for CitationRegister {
    fn default() -> Self {
        Self::new()
    }
}
