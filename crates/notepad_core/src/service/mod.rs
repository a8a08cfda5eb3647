//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate note state transitions for the presentation layer.
//! - Keep presentation code decoupled from id assignment and sync details.

pub mod note_store;
