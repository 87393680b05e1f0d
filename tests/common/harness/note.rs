//! Builder for test notes with sensible defaults.

#![allow(dead_code)]

use chrono::NaiveDateTime;
use notebook::domain::{Note, NoteId};
use notebook::infra::parse_timestamp;

/// Builder for creating test notes with sensible defaults.
#[derive(Debug, Clone)]
pub struct TestNote {
    id: u64,
    name: String,
    text: String,
    date: NaiveDateTime,
}

impl TestNote {
    /// Creates a test note with the given id and name, empty text and a fixed date.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            text: String::new(),
            date: parse_timestamp("2024-01-05T10:00:00").expect("valid default date"),
        }
    }

    /// Sets the text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the date from any format the store accepts.
    pub fn date(mut self, date: &str) -> Self {
        self.date = parse_timestamp(date).expect("Invalid date");
        self
    }

    /// Returns the rendered form used by watch and search output.
    pub fn rendered(&self) -> String {
        self.to_note().to_string()
    }

    /// Converts to a domain Note.
    pub fn to_note(&self) -> Note {
        Note::new(NoteId::new(self.id), &self.name, &self.text, self.date)
    }
}
