//! Applies parsed commands to a note store.

use crate::command::{Command, HELP_TEXT};
use crate::render::render_list;
use notepad_core::{Clock, NoteSink, NoteStore};

/// Result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

/// Interactive front end over one `NoteStore`.
pub struct Session<S: NoteSink, C: Clock> {
    store: NoteStore<S, C>,
}

impl<S: NoteSink, C: Clock> Session<S, C> {
    pub fn new(store: NoteStore<S, C>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &NoteStore<S, C> {
        &self.store
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        let message = match command {
            Command::Add { title, content } => {
                let draft = self.store.draft_mut();
                draft.title = title;
                draft.content = content;
                match self.store.submit_draft() {
                    Some(id) => format!("added note {id}"),
                    None => {
                        self.store.draft_mut().clear();
                        "nothing to add: title and content are empty".to_string()
                    }
                }
            }
            Command::List => return Outcome::Continue(render_list(&self.store.views())),
            Command::Edit(id) => {
                self.store.begin_edit_by_id(id);
                if self.store.edit_session().is_editing(id) {
                    format!("editing note {id}")
                } else {
                    format!("no note {id}")
                }
            }
            Command::Title(title) => self.with_session(|store| store.set_edit_title(title)),
            Command::Content(content) => {
                self.with_session(|store| store.set_edit_content(content))
            }
            Command::Save => match self.store.edit_session().editing_id() {
                Some(id) => {
                    self.store.save_edit(id);
                    format!("saved note {id}")
                }
                None => "not editing".to_string(),
            },
            Command::Cancel => {
                self.store.cancel_edit();
                "edit cancelled".to_string()
            }
            Command::Delete(id) => {
                self.store.delete(id);
                format!("deleted note {id}")
            }
            Command::Help => HELP_TEXT.to_string(),
            Command::Quit => return Outcome::Quit,
        };

        Outcome::Continue(format!("{message}\n"))
    }

    fn with_session(&mut self, update: impl FnOnce(&mut NoteStore<S, C>)) -> String {
        match self.store.edit_session().editing_id() {
            Some(id) => {
                update(&mut self.store);
                format!("updated working copy of note {id}")
            }
            None => "not editing; use `edit <id>` first".to_string(),
        }
    }
}
