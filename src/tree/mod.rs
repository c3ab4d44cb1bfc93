//! Directory tree listing and searching
//!
//! `TreeWalker` exposes five queries over a root entry. All of them share one
//! recursive traversal; they differ in what they keep and when they stop.

mod config;
mod traversal;
mod walker;

pub use config::{SizeBounds, WalkerConfig};
pub use walker::TreeWalker;
