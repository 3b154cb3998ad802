//! Code to parse the command line using `clap`, and the definition of the
//! parsed result

use clap::Parser;
use std::path::PathBuf;

/// Returns the parsed command line: two required card-list paths and an
/// optional exclusion-list path.
#[must_use]
pub fn parsed() -> Args {
    Args::parse()
}

#[derive(Debug, Parser)]
#[command(name = "carddiff", version)]
/// Compare two card lists and report the cards unique to each, plus the cards
/// present in both with different quantities
pub struct Args {
    /// Path to the first card-list file
    pub file1: PathBuf,
    /// Path to the second card-list file
    pub file2: PathBuf,
    /// Exclude the cards listed in this file from both sides of the comparison
    #[arg(long, value_name = "PATH")]
    pub filter: Option<PathBuf>,
}
