use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use libnw::align::structs::ScoringScheme;
use libnw::align::FillStrategy;

#[derive(Subcommand)]
pub enum SubCommands {
    #[command(about = "Globally align two sequences with the Needleman-Wunsch algorithm")]
    Align(AlignArgs),
}

#[derive(Parser)]
#[command(name = "nw")]
#[command(about = "Pairwise global sequence alignment")]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// The number of threads that nw will use
    #[arg(
        short = 't',
        long = "threads",
        default_value_t = 8usize,
        value_name = "n"
    )]
    pub num_threads: usize,

    /// Allow nw to overwrite files
    #[arg(short = 'q', long = "allow-overwrite", default_value_t = false)]
    pub allow_overwrite: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Debug, Args)]
pub struct AlignArgs {
    /// The first sequence
    #[arg(value_name = "SEQ1")]
    pub seq_1: String,

    /// The second sequence
    #[arg(value_name = "SEQ2")]
    pub seq_2: String,

    /// Arguments that set the scoring scheme
    #[command(flatten)]
    pub scoring_args: ScoringArgs,

    /// Arguments that control how the alignment is computed
    #[command(flatten)]
    pub nw_args: NwArgs,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,

    /// Arguments that are common across all nw subcommands
    #[command(flatten)]
    pub common_args: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ScoringArgs {
    /// The score for aligning two equal symbols
    #[arg(
        short = 'M',
        long = "match",
        default_value_t = 1i64,
        value_name = "N",
        allow_negative_numbers = true
    )]
    pub match_score: i64,

    /// The score for aligning two different symbols
    #[arg(
        short = 'X',
        long = "mismatch",
        default_value_t = -1i64,
        value_name = "N",
        allow_negative_numbers = true
    )]
    pub mismatch_score: i64,

    /// The score for aligning a symbol against a gap
    #[arg(
        short = 'G',
        long = "gap",
        default_value_t = 0i64,
        value_name = "N",
        allow_negative_numbers = true
    )]
    pub gap_score: i64,

    /// Refuse scoring schemes with a match score lower than the mismatch score
    #[arg(long, action)]
    pub strict: bool,
}

impl ScoringArgs {
    pub fn scheme(&self) -> ScoringScheme {
        ScoringScheme::new(self.match_score, self.mismatch_score, self.gap_score)
    }
}

#[derive(Args, Debug, Clone)]
pub struct NwArgs {
    /// Align the sequences exactly as given instead of upper-casing them first
    #[arg(long = "keep-case", action)]
    pub keep_case: bool,

    /// The largest score grid, in cells, that nw will allocate
    #[arg(long = "max-cells", default_value_t = 25_000_000usize, value_name = "N")]
    pub max_cells: usize,

    /// Fill the score grid one anti-diagonal at a time, in parallel
    #[arg(long = "anti-diagonal", action)]
    pub anti_diagonal: bool,
}

impl NwArgs {
    pub fn fill_strategy(&self) -> FillStrategy {
        if self.anti_diagonal {
            FillStrategy::AntiDiagonal
        } else {
            FillStrategy::RowMajor
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Where to place JSON output: the alignment, its score grid, and traceback path
    #[arg(short = 'J', long = "json", value_name = "path")]
    pub json_path: Option<PathBuf>,
}
