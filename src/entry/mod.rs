//! Filesystem entry abstraction
//!
//! The walker never touches the OS directly. It queries nodes through the
//! `Entry` trait, which has two implementations:
//!
//! - `DiskEntry`: backed by `std::fs`
//! - `MemEntry`: backed by an in-memory tree, for tests and synthetic trees

mod disk;
mod memory;

use std::path::PathBuf;

pub use disk::DiskEntry;
pub use memory::{MemEntry, MemNode};

/// A handle to one node of a directory tree.
pub trait Entry: Sized {
    fn exists(&self) -> bool;

    fn is_dir(&self) -> bool;

    fn is_file(&self) -> bool;

    /// Final path component.
    fn name(&self) -> String;

    /// Full path of the node, including the root it was reached from.
    fn path(&self) -> PathBuf;

    /// Size in bytes. Only meaningful for files.
    fn size(&self) -> u64;

    /// Immediate children in backend enumeration order.
    /// Empty for anything that is not a readable directory.
    fn children(&self) -> Vec<Self>;
}
