//! Plain-text rendering of note views.

use notepad_core::{NoteView, EMPTY_LIST_MESSAGE};

/// Renders the whole list, newest first.
pub fn render_list(views: &[NoteView<'_>]) -> String {
    if views.is_empty() {
        return format!("{EMPTY_LIST_MESSAGE}\n");
    }

    views.iter().map(render_view).collect()
}

fn render_view(view: &NoteView<'_>) -> String {
    match view {
        NoteView::Display {
            note,
            title,
            content,
            created,
        } => format!(
            "[{}] {}\n    {content}\n    {created}\n",
            note.id,
            title.unwrap_or("")
        ),
        NoteView::Editing {
            note,
            title,
            content,
        } => format!(
            "[{}] (editing) title: {title}\n    content: {content}\n",
            note.id
        ),
    }
}
