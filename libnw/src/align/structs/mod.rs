mod alignment;
pub use alignment::Alignment;

mod score_grid;
pub use score_grid::{CapacityError, Coord, GridDimensions, ScoreGrid};

mod scoring_scheme;
pub use scoring_scheme::{ConfigurationError, ScoreOverflowError, ScoringScheme};

mod trace;
pub use trace::{Trace, TraceStep};
