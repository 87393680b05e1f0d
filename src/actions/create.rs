//! Create action: add a note with a freshly allocated id.

use chrono::NaiveDateTime;

use super::ActionError;
use crate::domain::{IdAllocator, Note, NoteId, NoteSet};

/// Fields for a note that does not have an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub name: String,
    pub text: String,
    pub date: NaiveDateTime,
}

/// Allocates an id for `new_note`, inserts it into `notes` and returns the id.
///
/// Leaves `notes` untouched when no id is left.
pub fn create_note(
    notes: &mut NoteSet,
    ids: &mut IdAllocator,
    new_note: NewNote,
) -> Result<NoteId, ActionError> {
    let id = ids.allocate()?;
    let NewNote { name, text, date } = new_note;
    notes.insert(Note::new(id, name, text, date));
    log::debug!("created note {id}");
    Ok(id)
}
