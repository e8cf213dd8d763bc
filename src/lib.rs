//! Build MySQL tables from CSV files and label MySQL paths for SELinux.
#![warn(missing_docs)]

/// CSV width scanning and table naming.
pub mod csv_schema;
/// Shared error type and exit-code mapping.
pub mod error;
/// `tracing` subscriber setup for the binaries.
pub mod logging;
/// SELinux context rules derived from `my.cnf` and their application.
pub mod selinux;
/// SQL statement generation.
pub mod sql;
