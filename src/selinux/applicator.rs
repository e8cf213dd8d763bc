use std::io::{self, Write};

use crate::selinux::commands::commands_for;
use crate::selinux::rules::ContextRule;
use crate::selinux::runner::CommandRunner;

/// Printed once at the start of a dry run.
pub const DRY_RUN_NOTICE: &str = "Informational output only. These commands will not be executed.";

/// Execution policy for [`apply_rules`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Echo each command before running it.
    pub verbose: bool,
    /// Print commands without running them.
    pub dry_run: bool,
}

/// What happened during an apply run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Commands built from the rules (printed, executed, or both).
    pub issued: usize,
    /// Commands handed to the runner.
    pub executed: usize,
    /// Executed commands that did not exit successfully.
    pub failed: usize,
}

/// Build and run (or print) the commands for every rule, in order.
///
/// Command failures are logged and counted but never stop the run.
pub fn apply_rules<W: Write>(
    rules: &[ContextRule],
    runner: &mut dyn CommandRunner,
    options: &ApplyOptions,
    out: &mut W,
) -> io::Result<ApplyReport> {
    let mut report = ApplyReport::default();
    if options.dry_run {
        writeln!(out, "{DRY_RUN_NOTICE}")?;
    }

    for rule in rules {
        for command in commands_for(rule) {
            report.issued += 1;
            if options.verbose || options.dry_run {
                writeln!(out, "{command}")?;
                out.flush()?;
            }
            if options.dry_run {
                continue;
            }

            report.executed += 1;
            match runner.execute(&command) {
                Ok(Some(0)) => {
                    tracing::debug!(command = %command, "command succeeded");
                }
                Ok(code) => {
                    report.failed += 1;
                    tracing::warn!(command = %command, ?code, "command failed; continuing");
                }
                Err(error) => {
                    report.failed += 1;
                    tracing::warn!(command = %command, %error, "command could not run; continuing");
                }
            }
        }
    }

    Ok(report)
}
