//! Recursive traversal shared by the list and search operations.
//!
//! Every operation walks the same way: children in order, descending into each
//! directory as it is met. They differ only in the per-file predicate and in
//! whether the walk stops at the first hit.

use std::path::PathBuf;

use crate::entry::Entry;

use super::config::WalkerConfig;

pub struct BaseTraversal<'a> {
    pub config: &'a WalkerConfig,
}

impl<'a> BaseTraversal<'a> {
    pub fn new(config: &'a WalkerConfig) -> Self {
        Self { config }
    }

    /// Children of `dir`, sorted by name when configured.
    pub fn read_entries<E: Entry>(&self, dir: &E) -> Vec<E> {
        let mut entries = dir.children();
        if self.config.sort_entries {
            entries.sort_by_cached_key(|e| e.name());
        }
        entries
    }

    /// Append the name of every file under `dir` accepted by `keep`, pre-order.
    pub fn collect_files<E, F>(&self, dir: &E, keep: &F, out: &mut Vec<String>)
    where
        E: Entry,
        F: Fn(&E) -> bool,
    {
        tracing::debug!(dir = %dir.path().display(), "descending");
        for entry in self.read_entries(dir) {
            if entry.is_dir() {
                self.collect_files(&entry, keep, out);
            } else if entry.is_file() && keep(&entry) {
                tracing::trace!(file = %entry.path().display(), "matched");
                out.push(entry.name());
            }
        }
    }

    /// Path of the first file under `dir` accepted by `hit`.
    ///
    /// A subdirectory without a hit does not end the scan of its siblings.
    pub fn find_first<E, F>(&self, dir: &E, hit: &F) -> Option<PathBuf>
    where
        E: Entry,
        F: Fn(&E) -> bool,
    {
        tracing::debug!(dir = %dir.path().display(), "descending");
        for entry in self.read_entries(dir) {
            if entry.is_dir() {
                if let Some(found) = self.find_first(&entry, hit) {
                    return Some(found);
                }
            } else if entry.is_file() && hit(&entry) {
                return Some(entry.path());
            }
        }
        None
    }
}
