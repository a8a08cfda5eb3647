//! Compose-form draft for new notes.

use crate::model::note::is_creatable;

/// Unsubmitted title/content typed into the "add note" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns whether submitting this draft would create a note.
    pub fn is_submittable(&self) -> bool {
        is_creatable(&self.title, &self.content)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}
