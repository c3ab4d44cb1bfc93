//! Configuration types for tree walkers

/// How `search_by_size` treats its bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizeBounds {
    /// `min < size < max`
    #[default]
    Exclusive,
    /// `min <= size <= max`
    Inclusive,
}

impl SizeBounds {
    /// Bounds are signed so a negative minimum can admit empty files.
    pub fn contains(self, size: u64, min: i64, max: i64) -> bool {
        let size = i64::try_from(size).unwrap_or(i64::MAX);
        match self {
            SizeBounds::Exclusive => size > min && size < max,
            SizeBounds::Inclusive => size >= min && size <= max,
        }
    }
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    pub size_bounds: SizeBounds,
    /// Visit children sorted by name instead of in enumeration order
    pub sort_entries: bool,
}
