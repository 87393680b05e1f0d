//! Watch, search and create operations over a session's notes.
//!
//! Every operation is an [`ActionKind`]. The kind's [`Category`] tells the
//! console which parameters to collect; those parameters travel in an
//! [`Action`], which is executed against the note set.

mod create;
mod search;
mod watch;


use chrono::NaiveDateTime;
use thiserror::Error;

use crate::domain::{IdAllocator, IdsExhausted, NoteId, NoteSet};

pub use create::{NewNote, create_note};
pub use search::{SearchQuery, search};
pub use watch::{watch_all, watch_names};

/// Errors raised while executing an action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    /// Search by id named a note that does not exist.
    #[error("note not found: {id}")]
    KeyNotFound { id: NoteId },

    /// Create could not get a fresh id.
    #[error(transparent)]
    IdsExhausted(#[from] IdsExhausted),
}

/// The parameter a search action needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Id,
    Name,
    Date,
    Keywords,
}

/// Which listing a watch action prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchKind {
    /// Every note rendered in full.
    All,
    /// Note names only.
    Names,
}

/// What an action needs as input and what it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// No parameters; lists notes without side effects.
    Watch(WatchKind),
    /// One typed parameter; lists matching notes.
    Search(ParamKind),
    /// Name, text and timestamp; adds a note.
    Create,
}

/// The registered operations, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Create,
    WatchAll,
    WatchNames,
    SearchById,
    SearchByDate,
    SearchByName,
    SearchByKeywords,
}

impl ActionKind {
    /// Every action, in the order the menu numbers them.
    pub const ALL: [ActionKind; 7] = [
        ActionKind::Create,
        ActionKind::WatchAll,
        ActionKind::WatchNames,
        ActionKind::SearchById,
        ActionKind::SearchByDate,
        ActionKind::SearchByName,
        ActionKind::SearchByKeywords,
    ];

    pub fn category(self) -> Category {
        match self {
            ActionKind::WatchAll => Category::Watch(WatchKind::All),
            ActionKind::WatchNames => Category::Watch(WatchKind::Names),
            ActionKind::SearchById => Category::Search(ParamKind::Id),
            ActionKind::SearchByName => Category::Search(ParamKind::Name),
            ActionKind::SearchByDate => Category::Search(ParamKind::Date),
            ActionKind::SearchByKeywords => Category::Search(ParamKind::Keywords),
            ActionKind::Create => Category::Create,
        }
    }
}

/// An action together with the parameters it was invoked with.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    WatchAll,
    WatchNames,
    Search(SearchQuery),
    Create(NewNote),
}

impl Action {
    /// Returns the kind this action was built for.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::WatchAll => ActionKind::WatchAll,
            Action::WatchNames => ActionKind::WatchNames,
            Action::Search(query) => query.kind(),
            Action::Create(_) => ActionKind::Create,
        }
    }

    /// Runs the action against `notes`, allocating ids from `ids` for creates.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::KeyNotFound` when a search by id misses, and
    /// `ActionError::IdsExhausted` when a create finds no id left.
    pub fn execute(
        self,
        notes: &mut NoteSet,
        ids: &mut IdAllocator,
    ) -> Result<ActionOutcome, ActionError> {
        match self {
            Action::WatchAll => Ok(ActionOutcome::Listing(watch_all(notes))),
            Action::WatchNames => Ok(ActionOutcome::Listing(watch_names(notes))),
            Action::Search(query) => {
                let found = search(notes, &query)?;
                Ok(ActionOutcome::Listing(
                    found.into_iter().map(|note| note.to_string()).collect(),
                ))
            }
            Action::Create(new_note) => {
                Ok(ActionOutcome::Created(create_note(notes, ids, new_note)?))
            }
        }
    }
}

/// The result of executing an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Rendered notes (or names) to print, one block each.
    Listing(Vec<String>),
    /// Id of the note a create action added.
    Created(NoteId),
}

/// Builds a create action stamped with `date`.
pub fn create_action(name: String, text: String, date: NaiveDateTime) -> Action {
    Action::Create(NewNote { name, text, date })
}
