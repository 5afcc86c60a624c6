#![forbid(unsafe_code)]

use clap::Parser;
use lichtplan::cli::{run, Cli};
use lichtplan::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.log_json)?;

    run(cli)
}
