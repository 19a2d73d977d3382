use log::{debug, trace};
use rayon::prelude::*;

use crate::align::structs::{GridDimensions, ScoreGrid, ScoringScheme};

/// The order in which the interior of the score grid is computed.
///
/// Both strategies produce identical grids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FillStrategy {
    /// Strict row-major order on the calling thread
    #[default]
    RowMajor,
    /// One anti-diagonal at a time, with the cells of each
    /// anti-diagonal computed in parallel on the rayon pool
    AntiDiagonal,
}

/// The fewest anti-diagonal cells that are handed to a single rayon task.
const ANTI_DIAGONAL_MIN_TASK_LENGTH: usize = 256;

#[inline]
fn cell_score<T: PartialEq>(
    grid: &ScoreGrid,
    seq_1: &[T],
    seq_2: &[T],
    scheme: &ScoringScheme,
    row: usize,
    col: usize,
) -> i64 {
    let diag_score =
        grid.get(row - 1, col - 1) + scheme.substitution(&seq_1[row - 1], &seq_2[col - 1]);
    let up_score = grid.get(row - 1, col) + scheme.gap_score;
    let left_score = grid.get(row, col - 1) + scheme.gap_score;

    diag_score.max(up_score.max(left_score))
}

/// Fill a Needleman-Wunsch score grid for two sequences.
///
/// Cell (i, j) of the returned grid holds the optimal score of aligning the
/// first i symbols of `seq_1` with the first j symbols of `seq_2`. The grid is
/// allocated in full, so callers that need a memory ceiling should check
/// [`GridDimensions::ensure_within`] first. Scores are summed unchecked; see
/// [`ScoringScheme::ensure_fits`].
pub fn fill_score_grid<T: PartialEq + Sync>(
    seq_1: &[T],
    seq_2: &[T],
    scheme: &ScoringScheme,
    strategy: FillStrategy,
) -> ScoreGrid {
    let dimensions = GridDimensions::new(seq_1.len(), seq_2.len());
    debug!(
        "filling {} x {} score grid ({:?})",
        dimensions.rows, dimensions.cols, strategy
    );

    let mut grid = ScoreGrid::new(dimensions);

    for seq_2_idx in 0..grid.cols() {
        grid.set(0, seq_2_idx, (seq_2_idx as i64) * scheme.gap_score);
    }

    for seq_1_idx in 1..grid.rows() {
        grid.set(seq_1_idx, 0, (seq_1_idx as i64) * scheme.gap_score);
    }

    match strategy {
        FillStrategy::RowMajor => fill_row_major(&mut grid, seq_1, seq_2, scheme),
        FillStrategy::AntiDiagonal => fill_anti_diagonal(&mut grid, seq_1, seq_2, scheme),
    }

    grid
}

fn fill_row_major<T: PartialEq>(
    grid: &mut ScoreGrid,
    seq_1: &[T],
    seq_2: &[T],
    scheme: &ScoringScheme,
) {
    for seq_1_idx in 1..=seq_1.len() {
        for seq_2_idx in 1..=seq_2.len() {
            let score = cell_score(grid, seq_1, seq_2, scheme, seq_1_idx, seq_2_idx);
            grid.set(seq_1_idx, seq_2_idx, score);
        }
    }
}

fn fill_anti_diagonal<T: PartialEq + Sync>(
    grid: &mut ScoreGrid,
    seq_1: &[T],
    seq_2: &[T],
    scheme: &ScoringScheme,
) {
    let seq_1_length = seq_1.len();
    let seq_2_length = seq_2.len();

    // the interior runs from cell (1, 1) on anti-diagonal 2
    // to cell (n, m) on anti-diagonal n + m
    for anti_diagonal_idx in 2..=(seq_1_length + seq_2_length) {
        let row_start = anti_diagonal_idx.saturating_sub(seq_2_length).max(1);
        let row_end = seq_1_length.min(anti_diagonal_idx - 1);

        if row_start > row_end {
            continue;
        }

        let scores: Vec<i64> = {
            let grid: &ScoreGrid = grid;
            (row_start..row_end + 1)
                .into_par_iter()
                .with_min_len(ANTI_DIAGONAL_MIN_TASK_LENGTH)
                .map(|row| cell_score(grid, seq_1, seq_2, scheme, row, anti_diagonal_idx - row))
                .collect()
        };

        trace!(
            "anti-diagonal {}: rows {}..={}",
            anti_diagonal_idx,
            row_start,
            row_end
        );

        for (row, score) in (row_start..=row_end).zip(scores) {
            grid.set(row, anti_diagonal_idx - row, score);
        }
    }
}
