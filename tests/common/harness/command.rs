//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `notebook` binary.
///
/// Collects arguments, environment and a stdin script, then runs the
/// binary once on `assert`.
pub struct NotebookCommand {
    args: Vec<String>,
    envs: Vec<(String, OsString)>,
    current_dir: Option<PathBuf>,
    stdin: String,
}

impl NotebookCommand {
    /// Creates a new command for the `notebook` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            current_dir: None,
            stdin: String::new(),
        }
    }

    /// Sets the store file argument.
    pub fn file(self, path: &Path) -> Self {
        let path = path.to_string_lossy().to_string();
        self.args([path])
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Sets an environment variable for the process.
    pub fn env(mut self, key: &str, value: impl Into<OsString>) -> Self {
        self.envs.push((key.to_string(), value.into()));
        self
    }

    /// Sets the working directory.
    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.current_dir = Some(dir.to_path_buf());
        self
    }

    /// Feeds `lines` to stdin, one per line.
    pub fn input<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.stdin.push_str(line.as_ref());
            self.stdin.push('\n');
        }
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Returns the stdin script (for testing).
    pub fn get_stdin(&self) -> &str {
        &self.stdin
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("notebook").expect("Failed to find notebook binary");
        cmd.args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.env_remove("RUST_LOG");
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        cmd.write_stdin(self.stdin);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    // ===========================================
    // Option Shortcuts
    // ===========================================

    /// Adds `--init`.
    pub fn init(self) -> Self {
        self.args(["--init"])
    }

    /// Adds `--lang <lang>`.
    pub fn lang(self, lang: &str) -> Self {
        self.args(["--lang", lang])
    }

    /// Adds `-vv`.
    pub fn debug(self) -> Self {
        self.args(["-vv"])
    }
}

impl Default for NotebookCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        NotebookCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.json");
        let cmd = NotebookCommand::new().file(&path);
        assert_eq!(cmd.get_args()[0], path.to_string_lossy());
    }

    #[test]
    fn test_command_input_joins_lines() {
        let cmd = NotebookCommand::new().input(["2", "0"]);
        assert_eq!(cmd.get_stdin(), "2\n0\n");
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = NotebookCommand::new().init().lang("ru");
        let args = cmd.get_args();
        assert!(args.contains(&"--init".to_string()));
        assert!(args.contains(&"--lang".to_string()));
        assert!(args.contains(&"ru".to_string()));
    }
}
