use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use putr_web_cli::REPORT_FILENAME;
use putr_web_cli::args::{Args, OutputFormat};
use putr_web_cli::error::Result;
use putr_web_engine::report::Report;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging; diagnostics go to stderr so JSON output on
    // stdout stays machine-readable.
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let categories = putr_web_engine::parse_file(&args.logfile)?;

    // RFC-1123 style timestamp, always UTC.
    let timestamp = Utc::now().format("%a, %d %b %Y %H:%M:%S +0000").to_string();
    let report = Report::new(categories, timestamp);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Html => {
            let document = putr_web_engine::render::render(&report);
            std::fs::write(args.out_dir.join(REPORT_FILENAME), document)?;
        }
    }

    Ok(())
}
