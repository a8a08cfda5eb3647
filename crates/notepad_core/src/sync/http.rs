//! HTTP adapter for the create-note endpoint.
//!
//! # Responsibility
//! - POST each newly added note as JSON to `{base_url}/notes`.
//! - Log the acknowledgement or failure of every attempt.
//!
//! # Invariants
//! - Requests run on the injected runtime; callers never await them.
//! - No retries and no request timeout; an unanswered attempt is abandoned
//!   when the runtime shuts down.
//! - Log lines carry ids, statuses and sanitized remote messages, never note text.

use crate::logging::sanitize_message;
use crate::model::note::{Note, NoteId};
use crate::sync::{NoteSink, SyncError, SyncResult};
use log::{info, warn};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use serde::Deserialize;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Base address of the local note service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const NOTES_PATH: &str = "/notes";
const JSON_CONTENT_TYPE: &str = "application/json";
const MAX_LOGGED_BODY_CHARS: usize = 200;

/// Where created notes are mirrored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    base_url: String,
}

impl SyncConfig {
    /// Validates and normalizes a base URL.
    ///
    /// # Errors
    /// - Returns `SyncError::InvalidBaseUrl` when the value is blank or does not
    ///   start with `http://` / `https://`.
    pub fn new(base_url: &str) -> SyncResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(SyncError::InvalidBaseUrl(base_url.trim().to_string()));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full create-note URL.
    pub fn notes_url(&self) -> String {
        format!("{}{}", self.base_url, NOTES_PATH)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Parsed create-note response, kept for diagnostics only.
///
/// Unknown or non-JSON bodies decode to an empty ack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateNoteAck {
    /// Row id assigned by the remote service; unrelated to `NoteId`.
    #[serde(rename = "id", default)]
    pub remote_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl CreateNoteAck {
    fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

/// Fire-and-forget `NoteSink` backed by `reqwest`.
#[derive(Clone)]
pub struct HttpNoteSink {
    client: reqwest::Client,
    url: String,
    runtime: Handle,
}

impl HttpNoteSink {
    /// Creates a sink that spawns requests onto `runtime`.
    pub fn new(config: &SyncConfig, runtime: Handle) -> SyncResult<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            url: config.notes_url(),
            runtime,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Starts one create-note attempt and returns its task handle.
    ///
    /// The outcome is logged inside the task; the handle only exists so tests
    /// and shutdown code can observe completion.
    pub fn dispatch(&self, note: &Note) -> JoinHandle<SyncResult<CreateNoteAck>> {
        let client = self.client.clone();
        let url = self.url.clone();
        let note = note.clone();

        self.runtime.spawn(async move {
            let outcome = post_note(&client, &url, &note).await;
            log_outcome(note.id, &outcome);
            outcome
        })
    }
}

impl NoteSink for HttpNoteSink {
    fn note_created(&self, note: &Note) {
        // Detached: dropping the handle does not cancel the task.
        drop(self.dispatch(note));
    }
}

async fn post_note(client: &reqwest::Client, url: &str, note: &Note) -> SyncResult<CreateNoteAck> {
    let body = serde_json::to_vec(note)?;
    let response = client
        .post(url)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .header(USER_AGENT, concat!("notepad/", env!("CARGO_PKG_VERSION")))
        .body(body)
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(SyncError::Status {
            code: status.as_u16(),
            body: sanitize_message(&text, MAX_LOGGED_BODY_CHARS),
        });
    }

    Ok(CreateNoteAck::from_body(&text))
}

fn log_outcome(note_id: NoteId, outcome: &SyncResult<CreateNoteAck>) {
    match outcome {
        Ok(ack) => info!(
            "event=note_sync module=sync status=ok note_id={} remote_id={} message={}",
            note_id,
            ack.remote_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "none".to_string()),
            ack.message
                .as_deref()
                .map(|message| sanitize_message(message, MAX_LOGGED_BODY_CHARS))
                .unwrap_or_else(|| "none".to_string())
        ),
        Err(err) => warn!(
            "event=note_sync module=sync status=error note_id={} error={}",
            note_id,
            sanitize_message(&err.to_string(), MAX_LOGGED_BODY_CHARS)
        ),
    }
}
