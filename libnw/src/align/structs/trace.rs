use std::fmt::{Display, Formatter};

use serde::Serialize;

use super::Coord;

/// A single move through the score grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraceStep {
    /// Both sequences advance: a match or a mismatch
    Diagonal,
    /// Only the first sequence advances: a gap in the second
    Up,
    /// Only the second sequence advances: a gap in the first
    Left,
}

impl TraceStep {
    /// The (row, column) distance covered by the step.
    pub fn delta(&self) -> Coord {
        match self {
            TraceStep::Diagonal => (1, 1),
            TraceStep::Up => (1, 0),
            TraceStep::Left => (0, 1),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            TraceStep::Diagonal => 'D',
            TraceStep::Up => 'U',
            TraceStep::Left => 'L',
        }
    }
}

/// One optimal route through a score grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Trace {
    /// The moves in origin-to-destination order, i.e. in alignment column order
    pub steps: Vec<TraceStep>,
    /// Every visited cell in traversal order, from (n, m) down to (0, 0)
    pub path: Vec<Coord>,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn path_from_origin(&self) -> impl Iterator<Item = Coord> + '_ {
        self.path.iter().rev().copied()
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for step in &self.steps {
            write!(f, "{}", step.symbol())?;
        }
        Ok(())
    }
}
