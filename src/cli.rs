use clap::Parser;
use std::path::PathBuf;

/// Print a best-effort stable identifier for this device.
#[derive(Debug, Clone, Parser)]
#[command(name = "devid", version, about)]
pub struct Cli {
    /// Configuration file (defaults to `<config dir>/devid/config.toml` when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Platform source: `getprop`, `build_prop` or `static`
    #[arg(short, long, value_name = "SOURCE")]
    pub source: Option<String>,

    /// Print JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Print how the identifier was derived
    #[arg(long)]
    pub explain: bool,
}
