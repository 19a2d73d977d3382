pub mod structs;

mod needleman_wunsch;
pub use needleman_wunsch::{fill_score_grid, FillStrategy};

mod traceback;
pub use traceback::traceback;

use log::debug;
use structs::{Alignment, ScoringScheme};

/// Globally align two sequences with the Needleman-Wunsch algorithm.
///
/// Symbols are compared by equality only; no alphabet is assumed. Any two
/// sequences, including empty ones, produce an alignment.
pub fn align<T>(seq_1: &[T], seq_2: &[T], scheme: &ScoringScheme) -> Alignment
where
    T: Copy + PartialEq + Sync + Into<char>,
{
    align_with_strategy(seq_1, seq_2, scheme, FillStrategy::default())
}

pub fn align_with_strategy<T>(
    seq_1: &[T],
    seq_2: &[T],
    scheme: &ScoringScheme,
    strategy: FillStrategy,
) -> Alignment
where
    T: Copy + PartialEq + Sync + Into<char>,
{
    let grid = fill_score_grid(seq_1, seq_2, scheme, strategy);
    let trace = traceback(&grid, seq_1, seq_2, scheme);
    let alignment = Alignment::new(seq_1, seq_2, grid, trace);

    debug!(
        "alignment score: {} ({} matches over {} columns)",
        alignment.score, alignment.match_count, alignment.length
    );

    alignment
}

/// Align two strings character by character.
pub fn align_str(seq_1: &str, seq_2: &str, scheme: &ScoringScheme) -> Alignment {
    let seq_1: Vec<char> = seq_1.chars().collect();
    let seq_2: Vec<char> = seq_2.chars().collect();
    align(&seq_1, &seq_2, scheme)
}
