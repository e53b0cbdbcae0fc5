//! Rectangular grids with persistent storage.
//!
//! `Grid<T>` is a fixed-shape 2D array over an `im::Vector`, addressed in
//! row-major order. Cloning is O(1) and a single-element write shares all
//! untouched structure with earlier clones, which keeps the state copy
//! made for every accepted move cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

/// A fixed-shape rectangular grid.
///
/// Indexing is `(row, col)` with `0 <= row < rows` and `0 <= col < cols`.
/// Out-of-range access panics; callers that take indices from the outside
/// world bounds-check with [`Grid::contains`] first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T: Clone> {
    rows: usize,
    cols: usize,
    data: Vector<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every element set to `fill`.
    #[must_use]
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            data: std::iter::repeat(fill).take(rows * cols).collect(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` is inside the grid.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get the element at `(row, col)`. Panics if out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> &T {
        assert!(
            self.contains(row, col),
            "grid index ({}, {}) out of range for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }

    /// Replace the element at `(row, col)`. Panics if out of range.
    ///
    /// Untouched elements remain shared with any earlier clones.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(
            self.contains(row, col),
            "grid index ({}, {}) out of range for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        self.data.set(row * self.cols + col, value);
    }

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}
