use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "folio",
    version,
    about = "A terminal reader for very large plain-text files.",
    long_about = None
)]
pub struct Cli {
    /// Print a single page to stdout instead of starting the TUI
    #[clap(short, long)]
    pub dump: bool,

    /// Page to dump (1-based, defaults to the first)
    #[clap(short, long, value_name = "N")]
    pub page: Option<i64>,

    /// Lines per page (50-500)
    #[clap(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Use a specific configuration file
    #[clap(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Enable debug output
    #[clap(long)]
    pub debug: bool,

    /// Text file to read
    #[clap(name = "FILE")]
    pub file: PathBuf,
}
