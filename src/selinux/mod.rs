/// Apply loop: echo, dry-run, and execution of context commands.
pub mod applicator;
/// `semanage` / `restorecon` command construction.
pub mod commands;
/// MySQL option-file (`my.cnf`) parsing.
pub mod mycnf;
/// Recognized option keys and the context rules derived from them.
pub mod rules;
/// The [`runner::CommandRunner`] seam and its process-backed implementation.
pub mod runner;
