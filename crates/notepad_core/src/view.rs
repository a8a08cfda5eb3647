//! Read-only display projection of the note list.
//!
//! # Responsibility
//! - Decide per note whether stored fields or edit working copies are shown.
//! - Format creation timestamps for humans.
//!
//! # Invariants
//! - Projection is pure: it never mutates notes or the edit session.

use crate::model::edit_session::EditSession;
use crate::model::note::Note;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

/// Shown instead of an empty note list.
pub const EMPTY_LIST_MESSAGE: &str = "No notes yet. Create your first note above!";
/// Shown instead of empty note content.
pub const CONTENT_PLACEHOLDER: &str = "No content";

// en-US month/day/year with two-digit 12-hour time, e.g. "Mar 5, 2024, 02:07 PM".
const CREATED_AT_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Content as rendered in display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentView<'a> {
    Text(&'a str),
    /// Stored content is empty.
    Placeholder,
}

impl Display for ContentView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Placeholder => f.write_str(CONTENT_PLACEHOLDER),
        }
    }
}

/// How one note is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteView<'a> {
    /// Stored fields, read-only.
    Display {
        note: &'a Note,
        /// `None` when the stored title is empty and the heading is hidden.
        title: Option<&'a str>,
        content: ContentView<'a>,
        created: String,
    },
    /// Editable working copies from the open session.
    Editing {
        note: &'a Note,
        title: &'a str,
        content: &'a str,
    },
}

impl<'a> NoteView<'a> {
    pub fn note(&self) -> &'a Note {
        match self {
            Self::Display { note, .. } | Self::Editing { note, .. } => *note,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }
}

/// Projects one note against the current edit session.
pub fn project_note<'a>(note: &'a Note, session: &'a EditSession) -> NoteView<'a> {
    if session.is_editing(note.id) {
        return NoteView::Editing {
            note,
            title: session.title(),
            content: session.content(),
        };
    }

    NoteView::Display {
        note,
        title: Some(note.title.as_str()).filter(|title| !title.is_empty()),
        content: if note.has_content() {
            ContentView::Text(note.content.as_str())
        } else {
            ContentView::Placeholder
        },
        created: format_created_at(note.created_at),
    }
}

/// Formats a creation timestamp in the local time zone.
pub fn format_created_at(at: DateTime<Utc>) -> String {
    format_created_at_in(at, &Local)
}

/// Formats a creation timestamp in an explicit time zone.
pub fn format_created_at_in<Tz>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format(CREATED_AT_FORMAT).to_string()
}
