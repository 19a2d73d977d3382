use std::io::Write;
use std::time::Instant;

use anyhow::Context;
use colored::Colorize;
use libnw::align::align_with_strategy;
use libnw::align::structs::{Alignment, GridDimensions};
use log::info;

use crate::args::AlignArgs;
use crate::util::PathBufExt;

/// Split a sequence argument into the symbols that will be aligned.
fn prepare_sequence(seq: &str, keep_case: bool) -> Vec<char> {
    if keep_case {
        seq.chars().collect()
    } else {
        seq.chars().flat_map(char::to_uppercase).collect()
    }
}

pub fn run_alignment(args: &AlignArgs) -> anyhow::Result<Alignment> {
    let scheme = args.scoring_args.scheme();

    if args.scoring_args.strict {
        scheme.validate().context("refusing scoring scheme")?;
    }

    let seq_1 = prepare_sequence(&args.seq_1, args.nw_args.keep_case);
    let seq_2 = prepare_sequence(&args.seq_2, args.nw_args.keep_case);

    GridDimensions::new(seq_1.len(), seq_2.len())
        .ensure_within(args.nw_args.max_cells)
        .context("sequences are too long to align")?;

    scheme
        .ensure_fits(seq_1.len(), seq_2.len())
        .context("scoring scheme is too large for these sequences")?;

    info!(
        "aligning {} x {} symbols (match: {}, mismatch: {}, gap: {})",
        seq_1.len(),
        seq_2.len(),
        scheme.match_score,
        scheme.mismatch_score,
        scheme.gap_score
    );

    let now = Instant::now();
    let alignment = align_with_strategy(&seq_1, &seq_2, &scheme, args.nw_args.fill_strategy());
    info!("alignment finished in {:.3?}", now.elapsed());

    Ok(alignment)
}

pub fn align(args: &AlignArgs) -> anyhow::Result<()> {
    let alignment = run_alignment(args)?;

    println!("{alignment}");
    println!("{} = {}", "Score".bold(), alignment.score);

    if let Some(ref path) = args.output_args.json_path {
        let mut writer = path
            .open(args.common_args.allow_overwrite)
            .context("failed to open JSON output")?;
        alignment.write_json(&mut writer)?;
        writer.flush().context("failed to write JSON output")?;
        info!("wrote JSON output to {}", path.to_string_lossy());
    }

    Ok(())
}
