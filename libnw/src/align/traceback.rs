use crate::align::structs::{GridDimensions, ScoreGrid, ScoringScheme, Trace, TraceStep};

/// Walk a filled score grid from (n, m) back to (0, 0), recovering one optimal alignment.
///
/// When more than one predecessor produces the current cell's score, the tie is
/// broken in a fixed order: diagonal, then up, then left. That makes the output
/// deterministic for a given grid.
///
/// # Panics
///
/// The grid must be the one filled for exactly these sequences and this scheme.
/// Anything else is a programming error and this panics.
pub fn traceback<T: PartialEq>(
    grid: &ScoreGrid,
    seq_1: &[T],
    seq_2: &[T],
    scheme: &ScoringScheme,
) -> Trace {
    assert!(
        grid.dimensions() == GridDimensions::new(seq_1.len(), seq_2.len()),
        "score grid dimensions {:?} don't match sequence lengths ({}, {})",
        grid.dimensions(),
        seq_1.len(),
        seq_2.len()
    );

    let mut seq_1_idx = seq_1.len();
    let mut seq_2_idx = seq_2.len();

    let mut steps: Vec<TraceStep> = Vec::with_capacity(seq_1_idx + seq_2_idx);
    let mut path = Vec::with_capacity(seq_1_idx + seq_2_idx + 1);
    path.push((seq_1_idx, seq_2_idx));

    while seq_1_idx > 0 || seq_2_idx > 0 {
        let current_score = grid.get(seq_1_idx, seq_2_idx);

        let step = if seq_1_idx > 0
            && seq_2_idx > 0
            && current_score
                == grid.get(seq_1_idx - 1, seq_2_idx - 1)
                    + scheme.substitution(&seq_1[seq_1_idx - 1], &seq_2[seq_2_idx - 1])
        {
            TraceStep::Diagonal
        } else if seq_1_idx > 0
            && current_score == grid.get(seq_1_idx - 1, seq_2_idx) + scheme.gap_score
        {
            TraceStep::Up
        } else if seq_2_idx > 0
            && current_score == grid.get(seq_1_idx, seq_2_idx - 1) + scheme.gap_score
        {
            TraceStep::Left
        } else {
            panic!(
                "traceback failed: no predecessor of cell ({seq_1_idx}, {seq_2_idx}) yields score {current_score}"
            )
        };

        let (seq_1_delta, seq_2_delta) = step.delta();
        seq_1_idx -= seq_1_delta;
        seq_2_idx -= seq_2_delta;

        steps.push(step);
        path.push((seq_1_idx, seq_2_idx));
    }

    // the steps were collected from the destination back to
    // the origin, but they are reported in alignment order
    steps.reverse();

    Trace { steps, path }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::{fill_score_grid, FillStrategy};
    use assert2::check;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    fn trace_for(seq_1: &[u8], seq_2: &[u8], scheme: &ScoringScheme) -> Trace {
        let grid = fill_score_grid(seq_1, seq_2, scheme, FillStrategy::RowMajor);
        traceback(&grid, seq_1, seq_2, scheme)
    }

    #[test]
    fn test_wikipedia_traceback() {
        let trace = trace_for(b"GCATGCU", b"GATTACA", &ScoringScheme::new(1, -1, -1));

        check!(trace.to_string() == "DUDLDDDD");
        check!(
            trace.path
                == vec![
                    (7, 7),
                    (6, 6),
                    (5, 5),
                    (4, 4),
                    (3, 3),
                    (3, 2),
                    (2, 1),
                    (1, 1),
                    (0, 0)
                ]
        );
    }

    #[test]
    fn test_tail_against_gaps() {
        let scheme = ScoringScheme::new(1, -1, -2);

        let trace = trace_for(b"ACGT", b"", &scheme);
        check!(trace.to_string() == "UUUU");
        check!(trace.path == vec![(4, 0), (3, 0), (2, 0), (1, 0), (0, 0)]);

        let trace = trace_for(b"", b"AC", &scheme);
        check!(trace.to_string() == "LL");
        check!(trace.path == vec![(0, 2), (0, 1), (0, 0)]);

        let trace = trace_for(b"", b"", &scheme);
        check!(trace.is_empty());
        check!(trace.path == vec![(0, 0)]);
    }

    #[test]
    fn test_leading_gap() {
        let trace = trace_for(b"AC", b"GAC", &ScoringScheme::new(2, -1, -1));
        check!(trace.to_string() == "LDD");
        check!(trace.path == vec![(2, 3), (1, 2), (0, 1), (0, 0)]);
    }

    #[test]
    fn test_positive_gap_prefers_up_before_left() {
        let trace = trace_for(b"AAA", b"A", &ScoringScheme::new(1, -1, 2));
        check!(trace.to_string() == "LUUU");
        check!(trace.path == vec![(3, 1), (2, 1), (1, 1), (0, 1), (0, 0)]);
    }

    #[test]
    fn test_path_validity() {
        let mut rng = Pcg64::seed_from_u64(3);

        for _ in 0..100 {
            let seq_1: Vec<u8> = (0..rng.gen_range(0..25))
                .map(|_| b"ACGT"[rng.gen_range(0..4)])
                .collect();
            let seq_2: Vec<u8> = (0..rng.gen_range(0..25))
                .map(|_| b"ACGT"[rng.gen_range(0..4)])
                .collect();
            let scheme = ScoringScheme::new(
                rng.gen_range(-4..=4),
                rng.gen_range(-4..=4),
                rng.gen_range(-4..=4),
            );

            let trace = trace_for(&seq_1, &seq_2, &scheme);

            check!(trace.path.first() == Some(&(seq_1.len(), seq_2.len())));
            check!(trace.path.last() == Some(&(0, 0)));
            check!(trace.path.len() == trace.steps.len() + 1);

            // the path runs from the destination, so each step is a decrease
            for (cells, step) in trace.path.windows(2).zip(trace.steps.iter().rev()) {
                let delta = (cells[0].0 - cells[1].0, cells[0].1 - cells[1].1);
                assert!(delta == (1, 1) || delta == (1, 0) || delta == (0, 1));
                assert_eq!(delta, step.delta());
            }
        }
    }

    #[test]
    fn test_determinism() {
        let scheme = ScoringScheme::new(1, 0, 0);
        let first = trace_for(b"ACACACTA", b"AGCACACA", &scheme);

        (0..10).for_each(|_| {
            assert_eq!(trace_for(b"ACACACTA", b"AGCACACA", &scheme), first);
        });
    }

    #[test]
    #[should_panic(expected = "don't match sequence lengths")]
    fn test_mismatched_grid_dimensions() {
        let scheme = ScoringScheme::default();
        let grid = fill_score_grid(b"ACGT", b"AC", &scheme, FillStrategy::RowMajor);
        traceback(&grid, b"ACG", b"AC", &scheme);
    }

    #[test]
    #[should_panic(expected = "traceback failed")]
    fn test_mismatched_scheme() {
        let grid = fill_score_grid(
            b"ACGT",
            b"AGT",
            &ScoringScheme::new(1, -1, -1),
            FillStrategy::RowMajor,
        );
        traceback(&grid, b"ACGT", b"AGT", &ScoringScheme::new(3, -3, -5));
    }
}
