//! JSON note store with atomic writes.
//!
//! The store is a single JSON object mapping string-encoded note ids to
//! `{ "name", "text", "date" }` records.

use crate::domain::{Note, NoteId, NoteSet};
use crate::infra::timestamp::{format_timestamp, parse_timestamp};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors while reading or writing the note store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("note store not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed note store {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid note id '{key}' in {path}")]
    InvalidId { path: PathBuf, key: String },

    #[error("duplicate note id {id} in {path}")]
    DuplicateId { path: PathBuf, id: NoteId },

    #[error("invalid date '{value}' for note {id} in {path}")]
    InvalidDate {
        path: PathBuf,
        id: NoteId,
        value: String,
    },

    #[error("failed to encode notes for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied { path: path.into() },
            _ => StoreError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// One note as it appears in the store, minus the id key.
#[derive(Debug, Serialize, Deserialize)]
struct StoredNote {
    name: String,
    text: String,
    date: String,
}

impl StoredNote {
    fn from_note(note: &Note) -> Self {
        Self {
            name: note.name().to_string(),
            text: note.text().to_string(),
            date: format_timestamp(note.date()),
        }
    }
}

/// Serializes a note set as an id-keyed map in ascending id order.
struct StoreDocument<'a>(&'a NoteSet);

impl Serialize for StoreDocument<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for note in self.0 {
            map.serialize_entry(&note.id().to_string(), &StoredNote::from_note(note))?;
        }
        map.end()
    }
}

/// Every `(key, record)` pair of a store document, in document order.
///
/// Repeated keys are kept so the loader can reject them instead of letting
/// the last one win.
struct StoreEntries(Vec<(String, StoredNote)>);

impl<'de> Deserialize<'de> for StoreEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = StoreEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object of note records")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, StoredNote>()? {
                    entries.push(entry);
                }
                Ok(StoreEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Reads every note from the store at `path`.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if the file doesn't exist.
/// Returns `StoreError::Malformed` if the file is not a JSON object of note records.
/// Returns `StoreError::InvalidId` / `StoreError::InvalidDate` for bad keys or dates.
/// Returns `StoreError::DuplicateId` if two keys name the same id.
pub fn load_notes(path: &Path) -> Result<NoteSet, StoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::from_io(path, e))?;
    let notes = parse_notes(&content, path)?;
    log::info!("loaded {} notes from {}", notes.len(), path.display());
    Ok(notes)
}

/// Parses store content that has already been read.
///
/// `path` is only used for error messages.
pub fn parse_notes(content: &str, path: &Path) -> Result<NoteSet, StoreError> {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);

    let StoreEntries(records) =
        serde_json::from_str(content).map_err(|e| StoreError::Malformed {
            path: path.into(),
            source: e,
        })?;

    let mut notes = NoteSet::new();
    for (key, record) in records {
        let id: NoteId = key.parse().map_err(|_| StoreError::InvalidId {
            path: path.into(),
            key: key.clone(),
        })?;
        let date = parse_timestamp(&record.date).ok_or_else(|| StoreError::InvalidDate {
            path: path.into(),
            id,
            value: record.date.clone(),
        })?;
        if notes
            .insert(Note::new(id, record.name, record.text, date))
            .is_some()
        {
            return Err(StoreError::DuplicateId {
                path: path.into(),
                id,
            });
        }
    }

    Ok(notes)
}

/// Renders a note set as pretty-printed store JSON.
pub fn render_notes(notes: &NoteSet) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(&StoreDocument(notes))?;
    json.push('\n');
    Ok(json)
}

/// Writes every note to the store at `path`, replacing it atomically.
///
/// Uses a temporary file in the same directory and a rename, so a failed
/// save leaves the previous store untouched.
///
/// # Errors
///
/// Returns `StoreError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `StoreError::AtomicWrite` if the rename fails.
pub fn save_notes(path: &Path, notes: &NoteSet) -> Result<(), StoreError> {
    let parent = store_parent(path);
    if !parent.exists() {
        return Err(StoreError::ParentNotFound {
            path: parent.into(),
        });
    }

    let content = render_notes(notes).map_err(|e| StoreError::Encode {
        path: path.into(),
        source: e,
    })?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| StoreError::Io {
        path: path.into(),
        source: e,
    })?;

    temp.write_all(content.as_bytes())
        .map_err(|e| StoreError::Io {
            path: path.into(),
            source: e,
        })?;

    temp.persist(path).map_err(|e| StoreError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    log::info!("saved {} notes to {}", notes.len(), path.display());
    Ok(())
}

/// Creates an empty store at `path` if nothing exists there yet.
///
/// Returns `true` if a new store was written.
pub fn init_store(path: &Path) -> Result<bool, StoreError> {
    if path.exists() {
        return Ok(false);
    }
    save_notes(path, &NoteSet::new())?;
    log::info!("initialized empty note store at {}", path.display());
    Ok(true)
}

// A bare file name has an empty parent; that means the working directory.
fn store_parent(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
