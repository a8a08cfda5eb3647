//! Domain model for the note list and its edit state.
//!
//! # Responsibility
//! - Define the note record, the edit session and the compose draft.
//! - Keep transient UI state as explicit values separate from stored notes.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is a hard removal; there are no tombstones.

pub mod draft;
pub mod edit_session;
pub mod note;
