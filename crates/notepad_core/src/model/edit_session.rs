//! Transient edit session state.
//!
//! # Responsibility
//! - Track which note, if any, is being edited.
//! - Hold working copies of title/content independent of the stored note.
//!
//! # Invariants
//! - At most one session exists at a time; opening a new one replaces the old.
//! - Working copies never alias stored note fields.

use crate::model::note::{Note, NoteId};

/// Edit-state machine: either idle or editing exactly one note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    /// No note is being edited.
    #[default]
    Idle,
    /// Working copies for the note identified by `note_id`.
    Editing {
        note_id: NoteId,
        title: String,
        content: String,
    },
}

impl EditSession {
    /// Opens a session seeded from the note's current stored values.
    pub fn open(note: &Note) -> Self {
        Self::Editing {
            note_id: note.id,
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }

    /// Resets to idle, discarding working copies.
    pub fn close(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Returns the id of the note being edited.
    pub fn editing_id(&self) -> Option<NoteId> {
        match self {
            Self::Idle => None,
            Self::Editing { note_id, .. } => Some(*note_id),
        }
    }

    pub fn is_editing(&self, id: NoteId) -> bool {
        self.editing_id() == Some(id)
    }

    /// Working title; empty when idle.
    pub fn title(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Editing { title, .. } => title,
        }
    }

    /// Working content; empty when idle.
    pub fn content(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Editing { content, .. } => content,
        }
    }

    /// Replaces the working title. Ignored when idle.
    pub fn set_title(&mut self, value: impl Into<String>) {
        if let Self::Editing { title, .. } = self {
            *title = value.into();
        }
    }

    /// Replaces the working content. Ignored when idle.
    pub fn set_content(&mut self, value: impl Into<String>) {
        if let Self::Editing { content, .. } = self {
            *content = value.into();
        }
    }
}
