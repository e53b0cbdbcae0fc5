//! Edges and cells on the dot grid.
//!
//! An edge is a unit segment between two adjacent dots, identified by its
//! orientation and the row/column of its upper-left dot:
//!
//! - `Horizontal` at `(row, col)` connects dot `(row, col)` to `(row, col + 1)`
//! - `Vertical` at `(row, col)` connects dot `(row, col)` to `(row + 1, col)`
//!
//! A cell is the unit square at `(row, col)` of the box grid. Its four
//! sides are the horizontal edges `(row, col)` and `(row + 1, col)` and the
//! vertical edges `(row, col)` and `(row, col + 1)`.

use serde::{Deserialize, Serialize};

/// Which edge grid a coordinate pair indexes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A drawable edge. This is the move value of the game: one move draws
/// exactly one edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

impl Edge {
    /// Create an edge.
    #[must_use]
    pub const fn new(orientation: Orientation, row: usize, col: usize) -> Self {
        Self {
            orientation,
            row,
            col,
        }
    }

    /// Shorthand for a horizontal edge.
    #[must_use]
    pub const fn horizontal(row: usize, col: usize) -> Self {
        Self::new(Orientation::Horizontal, row, col)
    }

    /// Shorthand for a vertical edge.
    #[must_use]
    pub const fn vertical(row: usize, col: usize) -> Self {
        Self::new(Orientation::Vertical, row, col)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.orientation {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        };
        write!(f, "{}({}, {})", tag, self.row, self.col)
    }
}

/// Coordinates of one cell in the box grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a cell coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_shorthands() {
        let h = Edge::horizontal(2, 3);
        assert_eq!(h.orientation, Orientation::Horizontal);
        assert_eq!((h.row, h.col), (2, 3));

        let v = Edge::vertical(0, 1);
        assert_eq!(v.orientation, Orientation::Vertical);
        assert_eq!((v.row, v.col), (0, 1));
    }

    #[test]
    fn test_edge_equality() {
        assert_eq!(Edge::horizontal(1, 2), Edge::horizontal(1, 2));
        assert_ne!(Edge::horizontal(1, 2), Edge::vertical(1, 2));
        assert_ne!(Edge::horizontal(1, 2), Edge::horizontal(2, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Edge::horizontal(0, 4)), "H(0, 4)");
        assert_eq!(format!("{}", Edge::vertical(3, 0)), "V(3, 0)");
        assert_eq!(format!("{}", Cell::new(1, 1)), "Cell(1, 1)");
    }

    #[test]
    fn test_serialization() {
        let edge = Edge::vertical(2, 5);
        let json = serde_json::to_string(&edge).unwrap();
        let deserialized: Edge = serde_json::from_str(&json).unwrap();
        assert_eq!(edge, deserialized);
    }
}
