use std::path::PathBuf;
use thiserror::Error;

use crate::engine::MAX_DEPTH;

pub type Result<T> = std::result::Result<T, HelpError>;

#[derive(Debug, Error)]
pub enum HelpError {
    #[error("help not initialized")]
    Uninitialized,

    #[error("help already initialized")]
    AlreadyInitialized,

    #[error("not enough memory to show the help")]
    OutOfMemory,

    #[error(
        "help is incorrectly formatted: line {line} opens a depth-{depth} node with no depth-{missing} parent"
    )]
    Format {
        line: usize,
        depth: usize,
        missing: usize,
    },

    #[error(
        "help is incorrectly formatted: line {line} nests {depth} levels deep (depth must stay below {max})",
        max = MAX_DEPTH
    )]
    DepthExceeded { line: usize, depth: usize },

    #[error("the keyword entered could not be found")]
    KeywordNotFound,

    #[error("help file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read help file {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HelpError {
    /// `KeywordNotFound` describes a well-formed document without matches,
    /// every other variant is a failure.
    pub fn is_info(&self) -> bool {
        matches!(self, HelpError::KeywordNotFound)
    }

    pub fn is_format(&self) -> bool {
        matches!(
            self,
            HelpError::Format { .. } | HelpError::DepthExceeded { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_info() {
            1
        } else {
            2
        }
    }

    /// Stable kebab-case identifier used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            HelpError::Uninitialized => "uninitialized",
            HelpError::AlreadyInitialized => "already-initialized",
            HelpError::OutOfMemory => "out-of-memory",
            HelpError::Format { .. } => "format-error",
            HelpError::DepthExceeded { .. } => "depth-exceeded",
            HelpError::KeywordNotFound => "keyword-not-found",
            HelpError::NotFound(_) => "not-found",
            HelpError::ReadFailure { .. } => "read-failure",
        }
    }
}

impl From<std::collections::TryReserveError> for HelpError {
    fn from(_: std::collections::TryReserveError) -> Self {
        HelpError::OutOfMemory
    }
}
