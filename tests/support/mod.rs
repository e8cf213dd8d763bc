#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use mysql_helpers::selinux::commands::ShellCommand;
use mysql_helpers::selinux::runner::CommandRunner;

pub(crate) fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{nanos}"));
    std::fs::create_dir_all(&dir).expect("should create temp dir");
    dir
}

pub(crate) fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
    path
}

/// Records every command and answers with a fixed exit code.
pub(crate) struct RecordingRunner {
    pub(crate) commands: Vec<ShellCommand>,
    pub(crate) exit_code: Option<i32>,
}

impl RecordingRunner {
    pub(crate) fn succeeding() -> Self {
        Self {
            commands: Vec::new(),
            exit_code: Some(0),
        }
    }

    pub(crate) fn failing_with(code: i32) -> Self {
        Self {
            commands: Vec::new(),
            exit_code: Some(code),
        }
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.commands.iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn execute(&mut self, command: &ShellCommand) -> Result<Option<i32>, String> {
        self.commands.push(command.clone());
        Ok(self.exit_code)
    }
}
