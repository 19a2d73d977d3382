use std::fmt::{Display, Formatter};

use serde::Serialize;

use super::{Coord, ScoreGrid, Trace, TraceStep};

/// A global alignment of two sequences, along with
/// the score grid and path it was recovered from.
#[derive(Debug, Clone, Serialize)]
pub struct Alignment {
    /// The first sequence with gaps inserted
    pub aligned_1: String,
    /// The second sequence with gaps inserted
    pub aligned_2: String,
    /// The display in between the two aligned sequences:
    /// a pipe where the symbols match, a space otherwise
    pub marker_line: String,
    /// The optimal global alignment score
    pub score: i64,
    /// The number of columns that hold two equal symbols
    pub match_count: usize,
    /// The number of alignment columns
    pub length: usize,
    /// The percentage of columns that hold two equal symbols
    pub similarity: f64,
    pub grid: ScoreGrid,
    pub trace: Trace,
}

fn similarity_percentage(match_count: usize, length: usize) -> f64 {
    if length == 0 {
        0.0
    } else {
        match_count as f64 / length as f64 * 100.0
    }
}

impl Alignment {
    pub const GAP: char = '-';
    pub const MATCH_MARKER: char = '|';
    pub const MISMATCH_MARKER: char = ' ';

    /// Lay out the aligned sequences described by a trace.
    ///
    /// A column counts as a match only when it is a diagonal step over
    /// two equal symbols; a gap never matches anything. This differs from
    /// comparing the aligned characters when an input symbol is itself `-`.
    pub fn new<T>(seq_1: &[T], seq_2: &[T], grid: ScoreGrid, trace: Trace) -> Self
    where
        T: Copy + PartialEq + Into<char>,
    {
        let mut aligned_1 = String::with_capacity(trace.len());
        let mut aligned_2 = String::with_capacity(trace.len());
        let mut marker_line = String::with_capacity(trace.len());
        let mut match_count = 0usize;

        let mut seq_1_idx = 0;
        let mut seq_2_idx = 0;

        for step in &trace.steps {
            match step {
                TraceStep::Diagonal => {
                    let seq_1_symbol = seq_1[seq_1_idx];
                    let seq_2_symbol = seq_2[seq_2_idx];
                    aligned_1.push(seq_1_symbol.into());
                    aligned_2.push(seq_2_symbol.into());

                    if seq_1_symbol == seq_2_symbol {
                        match_count += 1;
                        marker_line.push(Self::MATCH_MARKER);
                    } else {
                        marker_line.push(Self::MISMATCH_MARKER);
                    }
                    seq_1_idx += 1;
                    seq_2_idx += 1;
                }
                TraceStep::Up => {
                    aligned_1.push(seq_1[seq_1_idx].into());
                    aligned_2.push(Self::GAP);
                    marker_line.push(Self::MISMATCH_MARKER);
                    seq_1_idx += 1;
                }
                TraceStep::Left => {
                    aligned_1.push(Self::GAP);
                    aligned_2.push(seq_2[seq_2_idx].into());
                    marker_line.push(Self::MISMATCH_MARKER);
                    seq_2_idx += 1;
                }
            }
        }

        let length = trace.len();

        Alignment {
            aligned_1,
            aligned_2,
            marker_line,
            score: grid.final_score(),
            match_count,
            length,
            similarity: similarity_percentage(match_count, length),
            grid,
            trace,
        }
    }

    /// The visited cells, from (n, m) down to (0, 0).
    pub fn path(&self) -> &[Coord] {
        &self.trace.path
    }

    /// The lengths of the two input sequences.
    pub fn sequence_lengths(&self) -> (usize, usize) {
        (self.grid.rows() - 1, self.grid.cols() - 1)
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (seq_1_length, seq_2_length) = self.sequence_lengths();

        writeln!(f, "{}", self.aligned_1)?;
        writeln!(f, "{}", self.marker_line)?;
        writeln!(f, "{}", self.aligned_2)?;
        writeln!(f)?;
        writeln!(f, "Matches = {}", self.match_count)?;
        writeln!(f, "Length  = {}", self.length)?;
        // the percentage is truncated, not rounded
        writeln!(f, "Similarity = {} %", self.similarity as u64)?;
        write!(f, "Tracing back: M[{seq_1_length},{seq_2_length}]")
    }
}
