//! Line-pattern matchers for the putr log format.
//!
//! Each matcher is a pure function from one line to a classification (or
//! nothing). The parser tries them in a fixed order; none of them look at
//! any state beyond the line itself.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::html;
use crate::report::{CategoryKind, EntityKind};

/// A run of 40 dashes anywhere in a line starts a new item block.
const ITEM_SEPARATOR: &str = "----------------------------------------";

/// Typed item header prefixes, tried in order against the line start.
/// The first hit suppresses the remaining prefixes.
const TYPE_PREFIXES: [(EntityKind, &str); 3] = [
    (EntityKind::Relation, "RELATION"),
    (EntityKind::Node, "NODE:"),
    (EntityKind::Way, "WAY"),
];

/// Fields extracted from a typed item header line
/// (`RELATION 12345 (Route 1)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemHeader {
    pub kind: EntityKind,
    /// First digit run anywhere in the line; empty when there is none.
    pub id: String,
    /// First parenthesized group; empty when there is none.
    pub name: String,
}

/// Tag of a classified message line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageTag {
    Err,
    Note,
    /// Line without a `tag: text` shape, appended to the previous message.
    Continuation,
    /// Recognized shape, unknown tag; dropped by the parser.
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub tag: MessageTag,
    /// HTML-escaped at creation; never escaped again downstream.
    pub text: String,
}

fn id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").unwrap())
}

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(([^)]+)\)").unwrap())
}

fn message_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\w+): (.+)").unwrap())
}

pub fn is_item_separator(line: &str) -> bool {
    line.contains(ITEM_SEPARATOR)
}

/// First category whose display label occurs in `line` as a substring.
/// `CategoryKind::ALL` order is the match priority.
pub fn category_start(line: &str) -> Option<CategoryKind> {
    CategoryKind::ALL
        .iter()
        .copied()
        .find(|kind| line.contains(kind.label()))
}

/// Detect a typed item header and extract its fields.
///
/// A header without a parenthesized name is recoverable: the name stays
/// empty and a diagnostic is logged.
pub fn item_header(line: &str) -> Option<ItemHeader> {
    let (kind, _) = TYPE_PREFIXES
        .iter()
        .find(|(_, prefix)| line.starts_with(prefix))?;

    let id = id_re()
        .find(line)
        .map(|m| m.as_str().to_owned())
        .unwrap_or_default();

    let name = match name_re().captures(line) {
        Some(caps) => caps[1].to_owned(),
        None => {
            warn!("item has no name: {line}");
            String::new()
        }
    };

    Some(ItemHeader {
        kind: *kind,
        id,
        name,
    })
}

/// Classify a message line.
///
/// Lines starting with `=` are section delimiters and yield `None`. A line
/// matching `tag: text` becomes a tagged message; anything else becomes a
/// continuation carrying the whole trimmed line.
pub fn message(line: &str) -> Option<Message> {
    if line.starts_with('=') {
        return None;
    }

    match message_re().captures(line) {
        Some(caps) => {
            let tag = match &caps[1] {
                "ERR" => MessageTag::Err,
                "NOTE" => MessageTag::Note,
                other => MessageTag::Other(other.to_owned()),
            };
            Some(Message {
                tag,
                text: html::escape(caps[2].trim()),
            })
        }
        None => Some(Message {
            tag: MessageTag::Continuation,
            text: html::escape(line.trim()),
        }),
    }
}
