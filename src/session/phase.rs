//! Program lifecycle phases.

use std::fmt;

/// One stage of a session: ReadData → ConsoleWork → SaveData → End.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Load the store into memory.
    #[default]
    ReadData,
    /// Run the interactive command loop.
    ConsoleWork,
    /// Write the notes back to the store.
    SaveData,
    /// Terminal.
    End,
}

impl Phase {
    /// Returns the fixed successor of this phase. `End` is its own successor.
    pub fn next(self) -> Phase {
        match self {
            Phase::ReadData => Phase::ConsoleWork,
            Phase::ConsoleWork => Phase::SaveData,
            Phase::SaveData => Phase::End,
            Phase::End => Phase::End,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::End
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::ReadData => "read-data",
            Phase::ConsoleWork => "console-work",
            Phase::SaveData => "save-data",
            Phase::End => "end",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
