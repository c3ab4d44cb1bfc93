//! Output configuration types

/// Configuration for result printing.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Substring to highlight in printed names (key searches)
    pub highlight: Option<String>,
}

impl OutputConfig {
    /// Highlight pattern, if there is one worth drawing.
    pub fn highlight(&self) -> Option<&str> {
        self.highlight.as_deref().filter(|h| !h.is_empty())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            highlight: None,
        }
    }
}
