mod align;
mod args;
mod util;

use align::align;
use args::{Cli, SubCommands};
use util::{init_logging, set_threads};

use clap::Parser;

fn main() -> anyhow::Result<()> {
    color_backtrace::install();

    match Cli::parse().command {
        SubCommands::Align(args) => {
            init_logging(args.common_args.verbosity);
            set_threads(args.common_args.num_threads)?;
            align(&args)?;
        }
    }
    Ok(())
}
