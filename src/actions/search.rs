//! Search actions: filter notes by id, name, day or keyword.

use chrono::NaiveDate;
use std::collections::HashSet;

use super::{ActionError, ActionKind};
use crate::domain::{Note, NoteId, NoteSet};

/// A search and its single parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Exact id.
    Id(NoteId),
    /// Exact name.
    Name(String),
    /// Calendar day; time of day is ignored.
    Date(NaiveDate),
    /// Any word of the text equals one of these.
    Keywords(Vec<String>),
}

impl SearchQuery {
    pub fn kind(&self) -> ActionKind {
        match self {
            SearchQuery::Id(_) => ActionKind::SearchById,
            SearchQuery::Name(_) => ActionKind::SearchByName,
            SearchQuery::Date(_) => ActionKind::SearchByDate,
            SearchQuery::Keywords(_) => ActionKind::SearchByKeywords,
        }
    }
}

/// Returns the notes matching `query`, in collection order.
///
/// # Errors
///
/// Returns `ActionError::KeyNotFound` if `query` is an id that is not in `notes`.
pub fn search<'a>(notes: &'a NoteSet, query: &SearchQuery) -> Result<Vec<&'a Note>, ActionError> {
    let found = match query {
        SearchQuery::Id(id) => {
            let note = notes.get(*id).ok_or(ActionError::KeyNotFound { id: *id })?;
            vec![note]
        }
        SearchQuery::Name(name) => notes.iter().filter(|n| n.name() == name).collect(),
        SearchQuery::Date(day) => notes.iter().filter(|n| n.day() == *day).collect(),
        SearchQuery::Keywords(keywords) => {
            let wanted: HashSet<&str> = keywords.iter().map(String::as_str).collect();
            notes
                .iter()
                .filter(|n| n.words().any(|word| wanted.contains(word)))
                .collect()
        }
    };
    log::debug!("{:?} matched {} notes", query.kind(), found.len());
    Ok(found)
}
