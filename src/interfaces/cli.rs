use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "star-catalog")]
#[command(about = "Load a CSV star catalog and emit star placements")]
pub struct Cli {
    /// TOML config file (defaults, then this file, then STARFIELD_* env vars)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Catalog path or http(s) URL, overrides `source` from config
    #[arg(short, long)]
    pub source: Option<String>,

    /// Write placements as JSON lines to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum records to keep (0 = unlimited)
    #[arg(long)]
    pub max_records: Option<usize>,
}
