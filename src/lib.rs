//! dirq - list directory trees and search them by name, key, or size

pub mod entry;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use entry::{DiskEntry, Entry, MemEntry, MemNode};
pub use error::{ExplorerError, NotFoundCause, Result, RootProblem};
pub use output::{OutputConfig, ResultPrinter, SearchOutput, print_json};
pub use tree::{SizeBounds, TreeWalker, WalkerConfig};
