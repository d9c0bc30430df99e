use std::path::PathBuf;

use clap::Parser;

/// QuickPeek: a frameless, always-handy window around one web player.
#[derive(Parser, Debug)]
#[command(name = "quickpeek", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. `debug` or `quickpeek=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Open this URL instead of the saved one. Not persisted.
    #[arg(long)]
    pub url: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
