//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::{NotebookCommand, TestNote};
use notebook::domain::NoteSet;
use notebook::infra::{load_notes, save_notes};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary store and config directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Commands run with the config directory pointed inside it, so a real
/// user config never leaks into tests.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with no store file yet.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Creates an environment whose store holds `notes`.
    pub fn with_notes(notes: &[TestNote]) -> Self {
        let env = Self::new();
        env.write_notes(notes);
        env
    }

    /// Returns the environment's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the note store.
    pub fn store_path(&self) -> PathBuf {
        self.root.join("notes.json")
    }

    /// Returns the directory used as `XDG_CONFIG_HOME`.
    pub fn config_home(&self) -> PathBuf {
        self.root.join("config")
    }

    /// Writes `notes` to the store, replacing it.
    pub fn write_notes(&self, notes: &[TestNote]) {
        let set: NoteSet = notes.iter().map(TestNote::to_note).collect();
        save_notes(&self.store_path(), &set).expect("Failed to write test store");
    }

    /// Writes raw content to the store.
    pub fn write_store(&self, content: &str) {
        std::fs::write(self.store_path(), content).expect("Failed to write store");
    }

    /// Reads the store as it is on disk now.
    pub fn read_store(&self) -> String {
        std::fs::read_to_string(self.store_path()).expect("Failed to read store")
    }

    /// Loads the store through the library.
    pub fn load_notes(&self) -> NoteSet {
        load_notes(&self.store_path()).expect("Failed to load store")
    }

    /// Writes `notebook/config.toml` under the config directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.config_home().join("notebook");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Creates a NotebookCommand isolated to this environment, without a FILE argument.
    pub fn bare_cmd(&self) -> NotebookCommand {
        NotebookCommand::new()
            .current_dir(&self.root)
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("HOME", &self.root)
    }

    /// Creates a NotebookCommand pointed at this environment's store.
    pub fn cmd(&self) -> NotebookCommand {
        self.bare_cmd().file(&self.store_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir(), "root should be a directory");
        assert!(!env.store_path().exists(), "store starts absent");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_with_notes_writes_store() {
        let env = TestEnv::with_notes(&[TestNote::new(1, "One"), TestNote::new(4, "Four")]);
        let notes = env.load_notes();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes.max_id().map(|id| id.get()), Some(4));
    }
}
