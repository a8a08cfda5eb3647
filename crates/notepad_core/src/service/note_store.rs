//! Note store and editor.
//!
//! # Responsibility
//! - Own the in-memory note list and the single edit session.
//! - Apply add/delete/edit transitions synchronously.
//! - Publish newly added notes to the injected `NoteSink`.
//!
//! # Invariants
//! - The list is newest-first; edits never move a note.
//! - Ids in the list are unique.
//! - A deleted note never stays referenced by the edit session.
//! - Sink outcomes never change the list.
//! - Absent ids are silent no-ops; there is no not-found error.

use crate::clock::{Clock, SystemClock};
use crate::id::IdAllocator;
use crate::model::draft::Draft;
use crate::model::edit_session::EditSession;
use crate::model::note::{is_creatable, Note, NoteId};
use crate::sync::NoteSink;
use crate::view::{project_note, NoteView};
use log::debug;

/// Single owner of the note list and edit state.
pub struct NoteStore<S: NoteSink, C: Clock = SystemClock> {
    notes: Vec<Note>,
    session: EditSession,
    draft: Draft,
    ids: IdAllocator,
    sink: S,
    clock: C,
}

impl<S: NoteSink> NoteStore<S, SystemClock> {
    /// Creates an empty store using the system clock.
    pub fn new(sink: S) -> Self {
        Self::with_clock(sink, SystemClock)
    }
}

impl<S: NoteSink, C: Clock> NoteStore<S, C> {
    /// Creates an empty store with an explicit clock.
    pub fn with_clock(sink: S, clock: C) -> Self {
        Self {
            notes: Vec::new(),
            session: EditSession::Idle,
            draft: Draft::default(),
            ids: IdAllocator::new(),
            sink,
            clock,
        }
    }

    /// Adds a note from raw input and mirrors it to the sink.
    ///
    /// Returns the new id, or `None` when both trimmed fields are empty (no
    /// note is created and the sink is not called).
    pub fn add(&mut self, title: &str, content: &str) -> Option<NoteId> {
        if !is_creatable(title, content) {
            debug!("event=note_add module=store status=skipped reason=blank_input");
            return None;
        }

        let created_at = self.clock.now();
        let notes = &self.notes;
        let id = self.ids.allocate(created_at.timestamp_millis(), |candidate| {
            notes.iter().any(|note| note.id == candidate)
        });
        let note = Note::from_input(id, title, content, created_at)?;

        self.notes.insert(0, note);
        debug!(
            "event=note_add module=store status=ok note_id={} title_len={} content_len={} total={}",
            id,
            self.notes[0].title.len(),
            self.notes[0].content.len(),
            self.notes.len()
        );
        self.sink.note_created(&self.notes[0]);
        Some(id)
    }

    /// Removes the note with `id` if present and closes its edit session.
    pub fn delete(&mut self, id: NoteId) {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.session.is_editing(id) {
            self.session.close();
        }
        debug!(
            "event=note_delete module=store status={} note_id={}",
            if self.notes.len() < before { "ok" } else { "absent" },
            id
        );
    }

    /// Opens (or replaces) the edit session for `note`.
    ///
    /// Working copies come from the stored note with the same id, so a stale
    /// value still opens with current fields. Notes no longer in the list are
    /// ignored and the current session is kept.
    pub fn begin_edit(&mut self, note: &Note) {
        self.begin_edit_by_id(note.id);
    }

    /// Opens the edit session for a stored note by id. Unknown ids are ignored.
    pub fn begin_edit_by_id(&mut self, id: NoteId) {
        match self.notes.iter().find(|note| note.id == id) {
            Some(note) => {
                self.session = EditSession::open(note);
                debug!("event=edit_begin module=store status=ok note_id={id}");
            }
            None => debug!("event=edit_begin module=store status=absent note_id={id}"),
        }
    }

    /// Closes the edit session without touching any note.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.session.editing_id() {
            debug!("event=edit_cancel module=store status=ok note_id={id}");
        }
        self.session.close();
    }

    /// Writes the trimmed working copies into the note with `id`, then closes
    /// the session.
    ///
    /// Runs even without a matching session, using whatever working fields are
    /// held (empty when idle). Blank results are kept.
    pub fn save_edit(&mut self, id: NoteId) {
        let status = match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                note.apply_edit(self.session.title(), self.session.content());
                "ok"
            }
            None => "absent",
        };
        debug!("event=edit_save module=store status={status} note_id={id}");
        self.session.close();
    }

    /// Replaces the working title of the open session.
    pub fn set_edit_title(&mut self, title: impl Into<String>) {
        self.session.set_title(title);
    }

    /// Replaces the working content of the open session.
    pub fn set_edit_content(&mut self, content: impl Into<String>) {
        self.session.set_content(content);
    }

    /// Mutable access to the compose draft.
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Adds a note from the compose draft.
    ///
    /// The draft is cleared only when a note was created.
    pub fn submit_draft(&mut self) -> Option<NoteId> {
        let Draft { title, content } = self.draft.clone();
        let id = self.add(&title, &content)?;
        self.draft.clear();
        Some(id)
    }

    /// Notes in display order (newest first).
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.session
    }

    /// Per-note display projection in list order.
    pub fn views(&self) -> Vec<NoteView<'_>> {
        self.notes
            .iter()
            .map(|note| project_note(note, &self.session))
            .collect()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
