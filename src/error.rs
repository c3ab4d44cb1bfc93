//! Error types for tree listing and searching

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ExplorerError>;

/// Why a root failed directory validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootProblem {
    /// Nothing exists at the path.
    Missing,
    /// The path exists but is not a directory.
    NotADirectory,
}

impl fmt::Display for RootProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootProblem::Missing => write!(f, "does not exist"),
            RootProblem::NotADirectory => write!(f, "is not a directory"),
        }
    }
}

/// Why an exact-name search came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundCause {
    EmptyName,
    InvalidRoot(RootProblem),
    NoMatch,
}

impl fmt::Display for NotFoundCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundCause::EmptyName => write!(f, "no file name given"),
            NotFoundCause::InvalidRoot(problem) => write!(f, "search root {}", problem),
            NotFoundCause::NoMatch => write!(f, "no results"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("{}: {reason}", .path.display())]
    NotADirectory { path: PathBuf, reason: RootProblem },

    #[error("{cause} (file name {name:?}, root {})", .root.display())]
    NotFound {
        root: PathBuf,
        name: String,
        cause: NotFoundCause,
    },
}

impl ExplorerError {
    pub fn is_not_a_directory(&self) -> bool {
        matches!(self, ExplorerError::NotADirectory { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ExplorerError::NotFound { .. })
    }
}
