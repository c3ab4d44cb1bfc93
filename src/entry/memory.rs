//! In-memory directory trees
//!
//! `MemNode` describes a tree; `MemEntry` is a handle into it that tracks the
//! path it was reached by. Children keep the order they were given in, which
//! stands in for filesystem enumeration order.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::Entry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemNode {
    File {
        name: String,
        size: u64,
    },
    Dir {
        name: String,
        children: Vec<Rc<MemNode>>,
    },
}

impl MemNode {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        MemNode::File {
            name: name.into(),
            size,
        }
    }

    pub fn dir(name: impl Into<String>, children: impl IntoIterator<Item = MemNode>) -> Self {
        MemNode::Dir {
            name: name.into(),
            children: children.into_iter().map(Rc::new).collect(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MemNode::File { name, .. } => name,
            MemNode::Dir { name, .. } => name,
        }
    }
}

/// Handle to a node of an in-memory tree, or to a path with nothing behind it.
#[derive(Debug, Clone)]
pub struct MemEntry {
    path: PathBuf,
    node: Option<Rc<MemNode>>,
}

impl MemEntry {
    /// Root handle; its path is the node's own name.
    pub fn root(node: MemNode) -> Self {
        Self {
            path: PathBuf::from(node.name()),
            node: Some(Rc::new(node)),
        }
    }

    /// Root handle mounted at an explicit path.
    pub fn mounted(path: impl Into<PathBuf>, node: MemNode) -> Self {
        Self {
            path: path.into(),
            node: Some(Rc::new(node)),
        }
    }

    /// A path that does not exist.
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            node: None,
        }
    }

    fn child(parent: &Path, node: &Rc<MemNode>) -> Self {
        Self {
            path: parent.join(node.name()),
            node: Some(Rc::clone(node)),
        }
    }
}

impl Entry for MemEntry {
    fn exists(&self) -> bool {
        self.node.is_some()
    }

    fn is_dir(&self) -> bool {
        matches!(self.node.as_deref(), Some(MemNode::Dir { .. }))
    }

    fn is_file(&self) -> bool {
        matches!(self.node.as_deref(), Some(MemNode::File { .. }))
    }

    fn name(&self) -> String {
        match &self.node {
            Some(node) => node.name().to_string(),
            None => self
                .path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default(),
        }
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn size(&self) -> u64 {
        match self.node.as_deref() {
            Some(MemNode::File { size, .. }) => *size,
            _ => 0,
        }
    }

    fn children(&self) -> Vec<Self> {
        match self.node.as_deref() {
            Some(MemNode::Dir { children, .. }) => children
                .iter()
                .map(|c| MemEntry::child(&self.path, c))
                .collect(),
            _ => Vec::new(),
        }
    }
}
