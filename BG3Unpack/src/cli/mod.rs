//! BG3Unpack CLI - Command-line interface for extracting LSPK archives

pub mod commands;
pub mod progress;

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "bg3unpack")]
#[command(version)]
#[command(about = "BG3Unpack: extract LSPK v18 .pak and .lsv archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  bg3unpack Shared.pak                 extract into ./Shared/ and write Shared_files.log\n  \
  bg3unpack My Mods/Cool Mod.pak       unquoted spaces are joined back into one path\n  \
  bg3unpack -l Gustav.pak              only write and print the file listing")]
pub struct Cli {
    /// Archive to extract (.pak or .lsv)
    #[arg(required = true, num_args = 1.., value_name = "FILE")]
    pub file: Vec<String>,

    /// Directory to create the output folder in (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// List the archive contents without extracting
    #[arg(short, long)]
    pub list: bool,

    /// Do not write the <name>_files.log listing
    #[arg(long)]
    pub no_listing: bool,

    /// Extract files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress bar and informational output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log metadata for every entry
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The archive path, with argv tokens re-joined by single spaces
    #[must_use]
    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(self.file.join(" "))
    }

    #[must_use]
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}

/// Run the BG3Unpack CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    commands::execute(&cli)
}
