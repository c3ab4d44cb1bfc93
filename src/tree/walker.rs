//! TreeWalker - lists and searches a directory subtree

use std::path::PathBuf;

use crate::entry::Entry;
use crate::error::{ExplorerError, NotFoundCause, Result, RootProblem};

use super::config::WalkerConfig;
use super::traversal::BaseTraversal;

/// Lists and searches directory trees reached through any `Entry` backend.
///
/// `list_contents`, `deep_list_contents` and `search_by_name` reject a root
/// that is not an existing directory. `search_by_key` and `search_by_size`
/// treat such a root as an empty tree.
#[derive(Debug, Clone, Default)]
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    fn traversal(&self) -> BaseTraversal<'_> {
        BaseTraversal::new(&self.config)
    }

    /// Names of the immediate children of `root`, files and directories alike.
    pub fn list_contents<E: Entry>(&self, root: &E) -> Result<Vec<String>> {
        if !root.is_dir() || root.is_file() {
            return Err(ExplorerError::NotADirectory {
                path: root.path(),
                reason: root_problem(root),
            });
        }

        Ok(self
            .traversal()
            .read_entries(root)
            .iter()
            .map(|e| e.name())
            .collect())
    }

    /// Names of every file at any depth under `root`. Directories are not listed.
    pub fn deep_list_contents<E: Entry>(&self, root: &E) -> Result<Vec<String>> {
        if !root.exists() || !root.is_dir() {
            return Err(ExplorerError::NotADirectory {
                path: root.path(),
                reason: root_problem(root),
            });
        }

        let mut files = Vec::new();
        self.traversal().collect_files(root, &|_: &E| true, &mut files);
        Ok(files)
    }

    /// Full path of the first file named exactly `file_name`, depth-first.
    pub fn search_by_name<E: Entry>(&self, root: &E, file_name: &str) -> Result<PathBuf> {
        let not_found = |cause| ExplorerError::NotFound {
            root: root.path(),
            name: file_name.to_string(),
            cause,
        };

        if file_name.is_empty() {
            return Err(not_found(NotFoundCause::EmptyName));
        }
        if !root.is_dir() || !root.exists() {
            return Err(not_found(NotFoundCause::InvalidRoot(root_problem(root))));
        }

        self.traversal()
            .find_first(root, &|e: &E| e.name() == file_name)
            .ok_or_else(|| not_found(NotFoundCause::NoMatch))
    }

    /// Names of every file whose name contains `key`, case-sensitively.
    pub fn search_by_key<E: Entry>(&self, root: &E, key: &str) -> Vec<String> {
        let mut files = Vec::new();
        if root.is_dir() {
            self.traversal()
                .collect_files(root, &|e: &E| e.name().contains(key), &mut files);
        }
        files
    }

    /// Names of every file whose size falls within `size_min` and `size_max`.
    ///
    /// Bounds are exclusive unless the walker is configured with
    /// `SizeBounds::Inclusive`. Inverted bounds match nothing.
    pub fn search_by_size<E: Entry>(&self, root: &E, size_min: i64, size_max: i64) -> Vec<String> {
        let bounds = self.config.size_bounds;
        let mut files = Vec::new();
        if root.is_dir() {
            self.traversal().collect_files(
                root,
                &|e: &E| bounds.contains(e.size(), size_min, size_max),
                &mut files,
            );
        }
        files
    }
}

fn root_problem<E: Entry>(root: &E) -> RootProblem {
    if root.exists() {
        RootProblem::NotADirectory
    } else {
        RootProblem::Missing
    }
}
