//! Note identifier allocation.
//!
//! # Responsibility
//! - Derive ids from creation time in epoch milliseconds.
//! - Guarantee ids never collide, even for notes created in the same tick.
//!
//! # Invariants
//! - Allocated ids are strictly increasing for one allocator.
//! - An allocated id is never equal to an id the caller reports as taken.

use crate::model::note::NoteId;

/// Monotonic, collision-checked id allocator.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: Option<i64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next id for a note created at `now_ms`.
    ///
    /// Uses `now_ms` when it is ahead of the previous id, otherwise the previous
    /// id plus one. Candidates rejected by `is_taken` are skipped.
    pub fn allocate(&mut self, now_ms: i64, is_taken: impl Fn(NoteId) -> bool) -> NoteId {
        let mut candidate = match self.last {
            Some(last) if now_ms <= last => last.saturating_add(1),
            _ => now_ms,
        };
        while is_taken(NoteId(candidate)) {
            candidate = candidate.saturating_add(1);
        }
        self.last = Some(candidate);
        NoteId(candidate)
    }

    /// Returns the most recently allocated id.
    pub fn last(&self) -> Option<NoteId> {
        self.last.map(NoteId)
    }
}
