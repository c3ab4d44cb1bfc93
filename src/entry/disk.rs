//! `Entry` implementation over the real filesystem

use std::path::PathBuf;

use super::Entry;

/// A path on disk. Classification follows symlinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskEntry {
    path: PathBuf,
}

impl DiskEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Entry for DiskEntry {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn is_dir(&self) -> bool {
        self.path.is_dir()
    }

    fn is_file(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn size(&self) -> u64 {
        self.path.metadata().map(|m| m.len()).unwrap_or(0)
    }

    fn children(&self) -> Vec<Self> {
        let entries = match std::fs::read_dir(&self.path) {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read directory");
                return Vec::new();
            }
        };

        entries
            .filter_map(|e| match e {
                Ok(e) => Some(DiskEntry::new(e.path())),
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "skipping unreadable entry");
                    None
                }
            })
            .collect()
    }
}
