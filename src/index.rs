//! Model index for addressing items in table and collection surfaces.
//!
//! The `ModelIndex` type is the way the bridge and its delegates refer
//! to a concrete row or item on an indexed surface. It is produced by
//! the surface's own point-to-item resolution and handed back to the
//! host when a cached interaction needs to find its item again.

use std::fmt;

/// Represents the position of an item within an indexed surface.
///
/// For table surfaces the column is typically 0 and the row identifies
/// the cell; collection surfaces use both coordinates. Indices should be
/// used immediately and not stored long-term: after the surface's data
/// changes, previously obtained indices may no longer resolve to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelIndex {
    /// The row of the item.
    row: usize,
    /// The column of the item.
    column: usize,
    /// Whether this index addresses a real item.
    valid: bool,
}

impl Default for ModelIndex {
    fn default() -> Self {
        Self::invalid()
    }
}

impl ModelIndex {
    /// Creates an invalid (null) model index.
    ///
    /// An invalid index represents a non-existent or out-of-bounds item.
    #[inline]
    pub const fn invalid() -> Self {
        Self {
            row: 0,
            column: 0,
            valid: false,
        }
    }

    /// Creates a new valid model index.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            valid: true,
        }
    }

    /// The row of the item.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// The column of the item.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Whether this index addresses a real item.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl fmt::Display for ModelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "({}, {})", self.row, self.column)
        } else {
            write!(f, "(invalid)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index() {
        let index = ModelIndex::invalid();
        assert!(!index.is_valid());
        assert_eq!(index.row(), 0);
        assert_eq!(index.column(), 0);
    }

    #[test]
    fn test_valid_index() {
        let index = ModelIndex::new(5, 3);
        assert!(index.is_valid());
        assert_eq!(index.row(), 5);
        assert_eq!(index.column(), 3);
    }

    #[test]
    fn test_ordering() {
        assert!(ModelIndex::new(0, 0) < ModelIndex::new(1, 0));
        assert!(ModelIndex::new(0, 0) < ModelIndex::new(0, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(ModelIndex::new(2, 1).to_string(), "(2, 1)");
        assert_eq!(ModelIndex::invalid().to_string(), "(invalid)");
    }
}
