//! Core types: Note, NoteId, IdAllocator, NoteSet

mod note;
mod note_id;
mod note_set;

pub use note::Note;
pub use note_id::{IdAllocator, IdsExhausted, NoteId, ParseNoteIdError};
pub use note_set::NoteSet;
