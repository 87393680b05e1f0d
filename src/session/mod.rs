//! Session state and the phase machine that drives a run.
//!
//! A [`Session`] owns everything one run of the program needs: the current
//! [`Phase`], the loaded notes, the id allocator, the registered actions and
//! the store path. [`Session::advance`] performs the current phase's work and
//! moves to the next phase; [`Session::run`] repeats that until `End`.

mod console_work;
mod phase;


use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::actions::{Action, ActionError, ActionKind, ActionOutcome};
use crate::cli::console::Console;
use crate::cli::locale::Locale;
use crate::cli::params::ParamError;
use crate::domain::{IdAllocator, NoteSet};
use crate::infra::{StoreError, load_notes, save_notes};

pub use console_work::{EXIT_COMMAND, build_menu, read_action, resolve_command};
pub use phase::Phase;

/// Errors that can end or interrupt a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The console could not be read or written.
    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),

    /// The menu token does not name a registered action.
    #[error("unknown command: '{token}'")]
    UnknownCommand { token: String },

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Param(#[from] ParamError),

    /// Input ended while an action was collecting its parameters.
    #[error("input closed")]
    InputClosed,
}

impl SessionError {
    /// Returns true for input mistakes the command loop reports and survives.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SessionError::UnknownCommand { .. } | SessionError::Action(_) | SessionError::Param(_)
        )
    }
}

/// The mutable state of one program run.
#[derive(Debug)]
pub struct Session {
    phase: Phase,
    store_path: PathBuf,
    notes: NoteSet,
    ids: IdAllocator,
    actions: Vec<ActionKind>,
    selected: Option<ActionKind>,
    locale: Locale,
}

impl Session {
    /// Creates a session in the `ReadData` phase with every action registered.
    pub fn new(store_path: impl Into<PathBuf>, locale: Locale) -> Self {
        Self {
            phase: Phase::ReadData,
            store_path: store_path.into(),
            notes: NoteSet::new(),
            ids: IdAllocator::new(),
            actions: ActionKind::ALL.to_vec(),
            selected: None,
            locale,
        }
    }

    /// Replaces the registered actions (and thus the menu).
    pub fn with_actions(mut self, actions: Vec<ActionKind>) -> Self {
        self.actions = actions;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true once the session has reached `End`.
    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn notes(&self) -> &NoteSet {
        &self.notes
    }

    pub fn actions(&self) -> &[ActionKind] {
        &self.actions
    }

    /// The action most recently chosen from the menu.
    pub fn selected(&self) -> Option<ActionKind> {
        self.selected
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn select(&mut self, kind: ActionKind) {
        self.selected = Some(kind);
    }

    /// Executes `action` against this session's notes.
    pub fn execute(&mut self, action: Action) -> Result<ActionOutcome, ActionError> {
        log::debug!("executing {:?}", action.kind());
        action.execute(&mut self.notes, &mut self.ids)
    }

    /// Performs the current phase's work and moves to the next phase.
    ///
    /// - `ReadData` loads the store and seeds the id allocator.
    /// - `ConsoleWork` runs the command loop until the exit command.
    /// - `SaveData` writes the notes back to the store.
    /// - `End` does nothing.
    ///
    /// # Errors
    ///
    /// Store failures and console I/O failures are returned; input mistakes
    /// inside the command loop are reported to the console instead.
    pub fn advance<C: Console>(&mut self, console: &mut C) -> Result<(), SessionError> {
        match self.phase {
            Phase::ReadData => {
                self.notes = load_notes(&self.store_path)?;
                self.ids = IdAllocator::seeded_from(&self.notes);
            }
            Phase::ConsoleWork => console_work::run_command_loop(self, console)?,
            Phase::SaveData => save_notes(&self.store_path, &self.notes)?,
            Phase::End => return Ok(()),
        }

        let next = self.phase.next();
        log::debug!("phase {} -> {}", self.phase, next);
        self.phase = next;
        Ok(())
    }

    /// Advances until the session reaches `End`.
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<(), SessionError> {
        while !self.is_finished() {
            self.advance(console)?;
        }
        Ok(())
    }
}
