//! Ordered collection of notes keyed by id.

use crate::domain::{Note, NoteId};
use std::collections::BTreeMap;

/// The notes of one session, iterated in ascending id order.
///
/// Ids are allocated monotonically, so id order is also creation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteSet {
    notes: BTreeMap<NoteId, Note>,
}

impl NoteSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a note, returning the previous note stored under the same id.
    pub fn insert(&mut self, note: Note) -> Option<Note> {
        self.notes.insert(note.id(), note)
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.notes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the largest id in the set, if any.
    pub fn max_id(&self) -> Option<NoteId> {
        self.notes.keys().next_back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }
}

impl FromIterator<Note> for NoteSet {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        let mut set = NoteSet::new();
        for note in iter {
            set.insert(note);
        }
        set
    }
}

impl<'a> IntoIterator for &'a NoteSet {
    type Item = &'a Note;
    type IntoIter = std::collections::btree_map::Values<'a, NoteId, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.values()
    }
}
