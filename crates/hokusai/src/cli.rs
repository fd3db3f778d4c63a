//! CLI definition.

use clap::Parser;
use std::path::PathBuf;

/// Hokusai - capture the Nikkei 225 heatmap and broadcast it to LINE
#[derive(Parser, Debug)]
#[command(name = "hokusai")]
#[command(about = "Capture the Nikkei 225 heatmap, publish it, and broadcast it to LINE", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Run the AI analysis stage and broadcast its summary alongside the
    /// image
    #[arg(long)]
    pub analyze: bool,

    /// Directory the snapshot PNG is written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Configuration file overriding the bundled defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
