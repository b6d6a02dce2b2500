//! Static HTML report generation.
//!
//! A pure function from a parsed report to one complete, self-contained
//! HTML5 document: styling is embedded and nothing is read from disk.
//! Message text arrives already escaped; the renderer escapes only the
//! strings it interpolates itself.

use std::fmt::Write;

use crate::html::escape;
use crate::report::{Category, EntityKind, Item, Report};

const OSM_BASE_URL: &str = "https://www.openstreetmap.org";

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em auto; max-width: 60em; color: #222; }\n\
h1 { border-bottom: 2px solid #888; }\n\
table.summary { border-collapse: collapse; margin-bottom: 2em; }\n\
table.summary th, table.summary td { border: 1px solid #aaa; padding: 0.3em 0.8em; }\n\
section { margin-bottom: 2em; }\n\
div.item { border: 1px solid #ccc; border-radius: 4px; padding: 0.5em 1em; margin: 0.8em 0; }\n\
div.item h3 { margin: 0.2em 0; font-size: 1em; }\n\
ul.err li { color: #a00; }\n\
ul.note li { color: #06c; }\n\
footer { margin-top: 3em; font-size: 0.8em; color: #777; }\n";

/// Render the report as a standalone HTML document.
pub fn render(report: &Report) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n<title>putr report</title>\n");
    let _ = write!(out, "<style>\n{STYLE}</style>\n");
    out.push_str("</head>\n<body>\n<h1>putr report</h1>\n");

    render_summary(&mut out, &report.categories);
    for category in &report.categories {
        render_category(&mut out, category);
    }

    let _ = writeln!(
        out,
        "<footer>Report generated at {}</footer>",
        escape(&report.timestamp)
    );
    out.push_str("</body>\n</html>\n");
    out
}

fn render_summary(out: &mut String, categories: &[Category]) {
    out.push_str("<table class=\"summary\">\n");
    out.push_str("<tr><th>Category</th><th>Errors</th><th>Notes</th></tr>\n");
    for category in categories {
        let _ = writeln!(
            out,
            "<tr><td><a href=\"#{}\">{}</a></td><td>{}</td><td>{}</td></tr>",
            category.kind.key(),
            escape(&category.name),
            category.num_errors(),
            category.num_notes()
        );
    }
    out.push_str("</table>\n");
}

fn render_category(out: &mut String, category: &Category) {
    let _ = writeln!(
        out,
        "<section id=\"{}\">\n<h2>{}</h2>",
        category.kind.key(),
        escape(&category.name)
    );
    for item in &category.items {
        render_item(out, item);
    }
    out.push_str("</section>\n");
}

fn render_item(out: &mut String, item: &Item) {
    out.push_str("<div class=\"item\">\n<h3>");

    let kind = item.kind.map_or("item", EntityKind::as_str);
    if let Some(entity) = item.kind.filter(|_| !item.id.is_empty()) {
        let _ = write!(
            out,
            "{kind} <a href=\"{OSM_BASE_URL}/{}/{id}\">{id}</a>",
            entity.as_str(),
            id = item.id
        );
    } else {
        let _ = write!(out, "{kind} {}", item.id);
    }
    if !item.name.is_empty() {
        let _ = write!(out, " ({})", escape(&item.name));
    }
    out.push_str("</h3>\n");

    render_messages(out, "Errors", "err", &item.errors);
    render_messages(out, "Notes", "note", &item.notes);
    out.push_str("</div>\n");
}

fn render_messages(out: &mut String, heading: &str, class: &str, messages: &[String]) {
    if messages.is_empty() {
        return;
    }
    let _ = writeln!(out, "<h4>{heading}</h4>\n<ul class=\"{class}\">");
    for message in messages {
        // Already escaped at creation.
        let _ = writeln!(out, "<li>{message}</li>");
    }
    out.push_str("</ul>\n");
}
