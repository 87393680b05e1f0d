//! Note record: id, name, free text and creation date.

use crate::domain::NoteId;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// A single user-authored note.
///
/// The id is fixed at construction; the remaining fields are read-only
/// once the note exists.
///
/// # Examples
///
/// ```
/// use notebook::domain::{Note, NoteId};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(9, 30, 0).unwrap();
/// let note = Note::new(NoteId::new(1), "Groceries", "milk eggs", date);
/// assert_eq!(note.to_string(), "1 Groceries\nmilk eggs");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    name: String,
    text: String,
    date: NaiveDateTime,
}

impl Note {
    /// Creates a note from its parts.
    pub fn new(
        id: NoteId,
        name: impl Into<String>,
        text: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            text: text.into(),
            date,
        }
    }

    /// Returns the note's identifier.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the note's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the note's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns when the note was created.
    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// Returns the calendar day the note was created on.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Iterates over the whitespace-separated words of the text.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}\n{}", self.id, self.name, self.text)
    }
}
