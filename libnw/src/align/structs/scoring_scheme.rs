use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("match score ({match_score}) is lower than mismatch score ({mismatch_score})")]
pub struct ConfigurationError {
    pub match_score: i64,
    pub mismatch_score: i64,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("scores of magnitude {max_magnitude} over {path_length} alignment columns overflow an i64")]
pub struct ScoreOverflowError {
    pub max_magnitude: u64,
    pub path_length: usize,
}

/// The linear scoring parameters used to fill a Needleman-Wunsch score grid.
///
/// None of the scores are constrained in sign: a zero or
/// positive gap score is used exactly as it is given.
///
/// Grid arithmetic is not checked. Every cell is a sum of at most n + m
/// scores, so `(n + m) * max(|match|, |mismatch|, |gap|)` must fit in an
/// i64; [`ScoringScheme::ensure_fits`] checks that before aligning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringScheme {
    /// The score for aligning two equal symbols
    pub match_score: i64,
    /// The score for aligning two different symbols
    pub mismatch_score: i64,
    /// The score for aligning a symbol against a gap
    pub gap_score: i64,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        ScoringScheme {
            match_score: 1,
            mismatch_score: -1,
            gap_score: 0,
        }
    }
}

impl ScoringScheme {
    pub fn new(match_score: i64, mismatch_score: i64, gap_score: i64) -> Self {
        ScoringScheme {
            match_score,
            mismatch_score,
            gap_score,
        }
    }

    /// The score of placing `a` and `b` in the same alignment column.
    #[inline]
    pub fn substitution<T: PartialEq>(&self, a: &T, b: &T) -> i64 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    /// An opt-in sanity check for callers that want to reject schemes
    /// that reward mismatches over matches. Alignment never calls this.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.match_score < self.mismatch_score {
            Err(ConfigurationError {
                match_score: self.match_score,
                mismatch_score: self.mismatch_score,
            })
        } else {
            Ok(())
        }
    }

    /// Check that no grid cell for sequences of these lengths can overflow.
    pub fn ensure_fits(
        &self,
        seq_1_length: usize,
        seq_2_length: usize,
    ) -> Result<(), ScoreOverflowError> {
        let max_magnitude = self
            .match_score
            .unsigned_abs()
            .max(self.mismatch_score.unsigned_abs())
            .max(self.gap_score.unsigned_abs());
        let path_length = seq_1_length.saturating_add(seq_2_length);

        match (path_length as u64).checked_mul(max_magnitude) {
            Some(bound) if bound <= i64::MAX as u64 => Ok(()),
            _ => Err(ScoreOverflowError {
                max_magnitude,
                path_length,
            }),
        }
    }
}
