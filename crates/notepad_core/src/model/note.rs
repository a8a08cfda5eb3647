//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical record shown in the note list and mirrored remotely.
//! - Own the creation-time validation rule for title/content input.
//!
//! # Invariants
//! - `id` is stable and never reassigned for the lifetime of a note.
//! - `created_at` is fixed at construction and never mutated by edits.
//! - Only creation enforces the "title or content must be non-blank" rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier of a note inside the in-memory collection.
///
/// Values are epoch-millisecond based, but uniqueness is guaranteed by
/// [`crate::id::IdAllocator`], not by clock resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl NoteId {
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for NoteId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// One user-authored note.
///
/// Serialized field names match the remote create-note payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Trimmed at creation and on save. May be empty.
    pub title: String,
    /// Trimmed at creation and on save. May be empty.
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Builds a note from raw user input.
    ///
    /// Returns `None` when both trimmed fields are empty; there is nothing to
    /// create in that case.
    pub fn from_input(
        id: NoteId,
        title: &str,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> Option<Self> {
        let (title, content) = normalize_fields(title, content);
        if title.is_empty() && content.is_empty() {
            return None;
        }

        Some(Self {
            id,
            title,
            content,
            created_at,
        })
    }

    /// Overwrites title and content with trimmed values.
    ///
    /// Empty results are accepted here; only creation rejects blank input.
    pub fn apply_edit(&mut self, title: &str, content: &str) {
        let (title, content) = normalize_fields(title, content);
        self.title = title;
        self.content = content;
    }

    /// Returns whether the stored content is empty.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}

/// Returns whether raw input would be accepted by [`Note::from_input`].
pub fn is_creatable(title: &str, content: &str) -> bool {
    !title.trim().is_empty() || !content.trim().is_empty()
}

fn normalize_fields(title: &str, content: &str) -> (String, String) {
    (title.trim().to_string(), content.trim().to_string())
}
