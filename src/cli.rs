use std::path::PathBuf;

use clap::{ArgGroup, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "vendor-licenses",
    about = "List the licenses of a project's vendored dependencies or print their disclaimers",
    version
)]
#[command(group(ArgGroup::new("mode").required(true).args(["manifest", "disclaimer"])))]
pub struct Cli {
    /// Project path (containing Gopkg.lock or go.mod)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Display the manifest of dependent packages
    #[arg(short, long)]
    pub manifest: bool,

    /// Display the disclaimer of dependent packages
    #[arg(short, long)]
    pub disclaimer: bool,

    /// Ignore missing or copyleft licenses instead of failing
    #[arg(short, long)]
    pub ignore_critical: bool,

    /// Use vendored versions of dependent Go modules
    #[arg(long)]
    pub vendor: bool,

    /// Config file [default: ./.vendor-licenses/config.toml, fallback ~/.config/vendor-licenses/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Manifest format
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: ManifestFormat,

    /// Dependencies classified concurrently
    #[arg(short, long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..))]
    pub jobs: u16,

    /// Timeout for each `go` invocation, in seconds
    #[arg(long, default_value_t = 300, value_name = "SECS")]
    pub timeout: u64,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress and status output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ManifestFormat {
    Text,
    Table,
    Json,
}
