use std::process::Command;

use crate::selinux::commands::ShellCommand;

/// Executes context commands.
///
/// Implementations report the exit code, or `None` when the process ended
/// without one (killed by a signal).
pub trait CommandRunner {
    /// Run `command` to completion.
    fn execute(&mut self, command: &ShellCommand) -> Result<Option<i32>, String>;
}

/// Runs each command as a child process and waits for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn execute(&mut self, command: &ShellCommand) -> Result<Option<i32>, String> {
        let status = Command::new(command.program())
            .args(command.args())
            .status()
            .map_err(|error| format!("Failed to run `{}`: {error}", command.program()))?;
        Ok(status.code())
    }
}
