//! Best-effort mirroring of new notes to a remote service.
//!
//! # Responsibility
//! - Define the `NoteSink` port the store publishes created notes to.
//! - Provide the HTTP adapter and the shared sync error type.
//!
//! # Invariants
//! - `NoteSink::note_created` returns without waiting for remote I/O.
//! - Sink outcomes are observed through logging only; they never feed back
//!   into local note state.

pub mod http;

use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type SyncResult<T> = Result<T, SyncError>;

/// Failure of one remote persistence attempt or of sink setup.
#[derive(Debug)]
pub enum SyncError {
    /// Configured base URL is unusable.
    InvalidBaseUrl(String),
    /// Note could not be encoded as the request body.
    Encode(serde_json::Error),
    /// Connection, TLS or protocol failure.
    Transport(reqwest::Error),
    /// Remote answered with a non-success status.
    Status { code: u16, body: String },
}

impl Display for SyncError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBaseUrl(value) => {
                write!(f, "invalid base url `{value}`; expected http:// or https://")
            }
            Self::Encode(err) => write!(f, "failed to encode note payload: {err}"),
            Self::Transport(err) => write!(f, "create-note request failed: {err}"),
            Self::Status { code, body } => {
                write!(f, "create-note returned HTTP {code}: {body}")
            }
        }
    }
}

impl Error for SyncError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Transport(err) => Some(err),
            Self::InvalidBaseUrl(_) | Self::Status { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Port receiving notes right after they are added locally.
///
/// Implementations must not block on remote I/O and must swallow failures
/// after logging them.
pub trait NoteSink {
    fn note_created(&self, note: &Note);
}

/// Sink that drops every note. Used for offline sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl NoteSink for NoopSink {
    fn note_created(&self, note: &Note) {
        log::debug!(
            "event=note_sync module=sync status=skipped reason=offline note_id={}",
            note.id
        );
    }
}

impl<S: NoteSink + ?Sized> NoteSink for Arc<S> {
    fn note_created(&self, note: &Note) {
        (**self).note_created(note)
    }
}

impl<S: NoteSink + ?Sized> NoteSink for Box<S> {
    fn note_created(&self, note: &Note) {
        (**self).note_created(note)
    }
}
