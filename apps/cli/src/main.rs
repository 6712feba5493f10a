//! aortascreen CLI — keyword triage for research-title spreadsheets.
//!
//! Tags every row of a CSV/TSV title export as "Aortic Disease" or "Other"
//! and writes a labeled copy for manual review.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
