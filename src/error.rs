use std::path::PathBuf;

/// Failures shared by both command-line tools.
///
/// Every variant maps to a process exit status through [`ToolError::exit_code`].
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The input file does not exist or is not a regular file.
    #[error("The source file, {}, does not exist or is not a file.", .0.display())]
    InputNotFound(PathBuf),

    /// Both statement-suppression flags were given, leaving nothing to emit.
    #[error("With both the --no-create and --no-load options, there's nothing left to do. Goodbye.")]
    NothingToEmit,

    /// The CSV input could not be decoded.
    #[error("CSV error in {}: {message}", .path.display())]
    Csv {
        /// File being scanned.
        path: PathBuf,
        /// Reader diagnostic, including the record position when known.
        message: String,
    },

    /// Reading the input failed.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The option file is syntactically invalid.
    #[error("Invalid option file {} at line {line}: {message}", .path.display())]
    Config {
        /// Option file being parsed.
        path: PathBuf,
        /// 1-based line number of the offending line.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },
}

impl ToolError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ToolError::InputNotFound(_) => 2,
            ToolError::NothingToEmit => 3,
            ToolError::Csv { .. } | ToolError::Io { .. } | ToolError::Config { .. } => 1,
        }
    }
}

/// Fail with [`ToolError::InputNotFound`] unless `path` names an existing regular file.
pub fn require_regular_file(path: &std::path::Path) -> Result<(), ToolError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ToolError::InputNotFound(path.to_path_buf()))
    }
}
