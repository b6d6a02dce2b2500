pub mod args;
pub mod error;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The report file name is fixed; only its directory is configurable.
pub const REPORT_FILENAME: &str = "index.html";
