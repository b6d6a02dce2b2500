//! Parsing and rendering engine for putr diagnostic logs.
//!
//! The putr validator emits a semi-structured text log of categories,
//! items (OSM entities) and tagged diagnostic messages. This crate turns
//! such a log into the
//! [`report::Report`] hierarchy and renders it as a single static HTML
//! document.

use std::path::Path;

pub mod classify;
pub mod error;
pub mod filesystem;
pub mod html;
pub mod parser;
pub mod render;
pub mod report;

use crate::error::Result;
use crate::parser::Parser;
use crate::report::Category;

/// Parse an in-memory log into its categories, in first-seen order.
///
/// ```
/// let log = "Stop Areas\n\
///            ----------------------------------------\n\
///            RELATION 12345 (Route 1)\n\
///            ERR: broken geometry\n";
/// let categories = putr_web_engine::parse(log);
/// assert_eq!(categories.len(), 1);
/// assert_eq!(categories[0].items[0].errors, ["broken geometry"]);
/// ```
pub fn parse(text: &str) -> Vec<Category> {
    Parser::new().parse(text.lines())
}

/// Load a log file and parse it.
///
/// # Errors
///
/// Returns an error when the file cannot be read; parsing itself never
/// fails (unrecognized content is simply not part of the output).
pub fn parse_file(path: &Path) -> Result<Vec<Category>> {
    let lines = filesystem::load_lines(path)?;
    Ok(Parser::new().parse(lines))
}
