//! JSON output formatting

use std::io;
use std::path::PathBuf;

use serde::Serialize;

/// Result of one query, in the shape written by `--json`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchOutput {
    Names { root: PathBuf, names: Vec<String> },
    Path { root: PathBuf, path: PathBuf },
}

/// Print a query result as pretty-printed JSON to stdout.
pub fn print_json(output: &SearchOutput) -> io::Result<()> {
    let json = serde_json::to_string_pretty(output).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
