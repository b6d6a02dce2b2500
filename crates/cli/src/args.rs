use std::path::PathBuf;

use clap::{Parser, ValueEnum, ValueHint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Write the report as `index.html` under `--out-dir`
    Html,
    /// Print the parsed report as JSON on stdout
    Json,
}

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "putr_web",
    version = crate::VERSION,
    about = "Render putr diagnostic logs as a static HTML report"
)]
pub struct Args {
    /// Path to the putr log file
    #[arg(value_hint = ValueHint::FilePath)]
    pub logfile: PathBuf,

    /// Directory the HTML report is written to
    #[arg(long, default_value = ".", value_hint = ValueHint::DirPath)]
    pub out_dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "html")]
    pub format: OutputFormat,

    /// Force debug logging regardless of RUST_LOG
    #[arg(long)]
    pub debug: bool,
}
