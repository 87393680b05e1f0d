//! Watch actions: list every note without side effects.

use crate::domain::{Note, NoteSet};

/// Renders every note as `"<id> <name>\n<text>"`, in collection order.
pub fn watch_all(notes: &NoteSet) -> Vec<String> {
    notes.iter().map(Note::to_string).collect()
}

/// Returns every note's name, in collection order.
pub fn watch_names(notes: &NoteSet) -> Vec<String> {
    notes.iter().map(|note| note.name().to_string()).collect()
}
