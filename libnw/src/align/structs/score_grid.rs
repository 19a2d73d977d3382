use std::fmt::{Debug, Formatter};

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A (row, column) cell coordinate in a score grid.
///
/// The row indexes the first sequence, the column indexes the second.
pub type Coord = (usize, usize);

#[derive(Error, Debug, PartialEq, Eq)]
#[error("score grid of {rows} x {cols} cells exceeds the limit of {max_cells} cells")]
pub struct CapacityError {
    pub rows: usize,
    pub cols: usize,
    pub max_cells: usize,
}

/// The shape of the score grid for a pair of sequences of
/// length n and m, which is always (n + 1) x (m + 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl GridDimensions {
    pub fn new(seq_1_length: usize, seq_2_length: usize) -> Self {
        GridDimensions {
            rows: seq_1_length.saturating_add(1),
            cols: seq_2_length.saturating_add(1),
        }
    }

    /// The total number of cells, or None if that doesn't fit in a usize.
    pub fn cells(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Check the grid against a cell ceiling before anything is allocated.
    pub fn ensure_within(&self, max_cells: usize) -> Result<(), CapacityError> {
        match self.cells() {
            Some(cells) if cells <= max_cells => Ok(()),
            _ => Err(CapacityError {
                rows: self.rows,
                cols: self.cols,
                max_cells,
            }),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ScoreGrid {
    rows: usize,
    cols: usize,
    /// The grid cells as a flat vector.
    ///
    /// It's stored in row-major order:
    /// ```text
    ///     [
    ///
    ///         s_(0, 0), s_(0, 1), ..., s_(0, M),
    ///         s_(1, 0), s_(1, 1), ..., s_(1, M),
    ///         ...
    ///         s_(N, 0), s_(N, 1), ..., s_(N, M)
    ///
    ///     ]
    /// ```
    ///
    /// where:
    ///
    /// ```text
    ///     N:        <length of the first sequence>
    ///     M:        <length of the second sequence>
    ///     s_(i, j): the optimal score of aligning the first i symbols
    ///               of the first sequence with the first j of the second
    /// ```
    data: Vec<i64>,
}

impl ScoreGrid {
    pub fn new(dimensions: GridDimensions) -> Self {
        ScoreGrid {
            rows: dimensions.rows,
            cols: dimensions.cols,
            data: vec![0; dimensions.rows * dimensions.cols],
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        GridDimensions {
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        self.data[row * self.cols + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: i64) {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[i64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[i64]> {
        // a grid always has at least one column
        self.data.chunks(self.cols)
    }

    /// The score in the bottom-right cell, which is the optimal global alignment score.
    pub fn final_score(&self) -> i64 {
        self.get(self.rows - 1, self.cols - 1)
    }
}

impl Serialize for ScoreGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_rows())
    }
}

impl Debug for ScoreGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.iter_rows() {
            for score in row {
                write!(f, "{score:>5}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
