//! Integer note identifier and the session-owned allocator that hands them out.

use crate::domain::NoteSet;
use std::fmt;
use std::str::FromStr;

/// A unique identifier for a note within a store.
///
/// Ids are positive integers. In the JSON store they appear as the
/// string-encoded keys of the top-level object.
///
/// # Examples
///
/// ```
/// use notebook::domain::NoteId;
///
/// let id: NoteId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(u64);

impl NoteId {
    /// Wraps a raw integer id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

/// Error returned when parsing an invalid note id string.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': expected a whole number", self.value)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(NoteId)
            .map_err(|_| ParseNoteIdError {
                value: s.to_string(),
            })
    }
}

/// Error returned when every id up to `u64::MAX` has been handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdsExhausted;

impl fmt::Display for IdsExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no note ids left: the largest id {} is already taken", u64::MAX)
    }
}

impl std::error::Error for IdsExhausted {}

/// Hands out fresh note ids for one session.
///
/// The allocator is seeded from the highest id already present in the
/// loaded store, so newly created notes never collide with loaded ones.
/// Once `u64::MAX` is taken the allocator is exhausted; the loaded notes
/// remain usable, only creation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: Option<u64>,
}

impl IdAllocator {
    /// Creates an allocator whose first id is 1.
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    /// Creates an allocator that continues after the largest id in `notes`.
    pub fn seeded_from(notes: &NoteSet) -> Self {
        let next = notes.max_id().map_or(Some(1), |id| id.get().checked_add(1));
        Self { next }
    }

    /// Returns the id the next call to [`allocate`](Self::allocate) will yield,
    /// or `None` if the allocator is exhausted.
    pub fn peek(&self) -> Option<NoteId> {
        self.next.map(NoteId)
    }

    /// Returns a fresh id and advances the counter.
    ///
    /// # Errors
    ///
    /// Returns `IdsExhausted` once `u64::MAX` has been allocated.
    pub fn allocate(&mut self) -> Result<NoteId, IdsExhausted> {
        let raw = self.next.ok_or(IdsExhausted)?;
        self.next = raw.checked_add(1);
        Ok(NoteId(raw))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
