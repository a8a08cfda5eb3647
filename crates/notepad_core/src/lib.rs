//! Core note lifecycle and edit-state logic for Notepad.
//! This crate is the single source of truth for note list invariants.

pub mod clock;
pub mod id;
pub mod logging;
pub mod model;
pub mod service;
pub mod sync;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use id::IdAllocator;
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::draft::Draft;
pub use model::edit_session::EditSession;
pub use model::note::{Note, NoteId};
pub use service::note_store::NoteStore;
pub use sync::http::{CreateNoteAck, HttpNoteSink, SyncConfig, DEFAULT_BASE_URL};
pub use sync::{NoopSink, NoteSink, SyncError, SyncResult};
pub use view::{
    format_created_at, format_created_at_in, project_note, ContentView, NoteView,
    CONTENT_PLACEHOLDER, EMPTY_LIST_MESSAGE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
