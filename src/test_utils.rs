//! Test utilities for building directory trees on disk.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::entry::DiskEntry;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The tree root as a walkable entry.
    pub fn root(&self) -> DiskEntry {
        DiskEntry::new(self.dir.path())
    }

    /// Add a file of exactly `size` bytes.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, size: usize) -> PathBuf {
        self.add_file_with_content(path, &"x".repeat(size))
    }

    /// Add a file with the given content.
    ///
    /// Creates parent directories as needed.
    pub fn add_file_with_content(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build `a.txt(50b)`, `sub/b.txt(150b)` and `sub/c.log(300b)`.
    pub fn sample() -> Self {
        let tree = Self::new();
        tree.add_file("a.txt", 50);
        tree.add_file("sub/b.txt", 150);
        tree.add_file("sub/c.log", 300);
        tree
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
