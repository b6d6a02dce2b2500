//! Single-pass state machine over the log lines.
//!
//! The parser keeps the category list it is building plus a one-item
//! buffer. The buffered item is committed to its category exactly once, at
//! the next separator, the next category line, or end of input. Together
//! with the last item already committed to the current category this forms
//! the two-slot state that continuation lines are routed through.

use tracing::debug;

use crate::classify::{self, MessageTag};
use crate::report::{Category, Item, MessageKind};

#[derive(Debug, Default)]
pub struct Parser {
    categories: Vec<Category>,
    current: Option<Item>,
    /// Whether the buffered item has seen any line. A block with no lines
    /// at all (separator immediately followed by another boundary) never
    /// appears in the output.
    touched: bool,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the log and return the categories in first-seen order.
    pub fn parse<S: AsRef<str>>(mut self, lines: impl IntoIterator<Item = S>) -> Vec<Category> {
        for line in lines {
            self.process_line(line.as_ref());
        }
        self.finalize_item();
        self.categories
    }

    fn process_line(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }

        // Item handling only starts once the first category has opened;
        // separators and headers before that are silent no-ops.
        if !self.categories.is_empty() {
            if classify::is_item_separator(line) {
                self.finalize_item();
                self.current = Some(Item::default());
            } else if self.current.is_some() {
                self.process_item_line(line);
            }
        }

        // Category detection runs last: a line consumed as a message can
        // still open the next category.
        if let Some(kind) = classify::category_start(line) {
            debug!(category = kind.key(), "found category");
            self.finalize_item();
            self.categories.push(Category::new(kind));
        }
    }

    fn process_item_line(&mut self, line: &str) {
        let Some(item) = self.current.as_mut() else {
            return;
        };
        self.touched = true;

        // Type fields are populated at most once; afterwards every line of
        // the block is treated as message content.
        if item.kind.is_none() {
            if let Some(header) = classify::item_header(line) {
                debug!(kind = header.kind.as_str(), id = %header.id, "found item");
                item.kind = Some(header.kind);
                item.id = header.id;
                item.name = header.name;
                return;
            }
        }

        let Some(message) = classify::message(line) else {
            return;
        };

        match message.tag {
            MessageTag::Err => {
                item.errors.push(message.text);
                item.last_added = Some(MessageKind::Error);
            }
            MessageTag::Note => {
                item.notes.push(message.text);
                item.last_added = Some(MessageKind::Note);
            }
            MessageTag::Continuation => {
                if item.last_added.is_some() {
                    append_continuation(item, &message.text);
                } else if let Some(previous) = self
                    .categories
                    .last_mut()
                    .and_then(|category| category.items.last_mut())
                {
                    // The buffered item has not received anything yet, so
                    // the trailing text belongs to the previously
                    // finalized item.
                    append_continuation(previous, &message.text);
                }
            }
            MessageTag::Other(_) => {}
        }
    }

    /// Commit the buffered item to the current category. Exactly one commit
    /// happens per item block.
    fn finalize_item(&mut self) {
        if let Some(item) = self.current.take() {
            if self.touched {
                if let Some(category) = self.categories.last_mut() {
                    category.items.push(item);
                }
            }
        }
        self.touched = false;
    }
}

/// Space-join `text` onto the message list that last received content.
/// An unset marker falls through to the notes list; a missing target entry
/// drops the text.
fn append_continuation(item: &mut Item, text: &str) {
    let target = match item.last_added {
        Some(MessageKind::Error) => item.errors.last_mut(),
        Some(MessageKind::Note) | None => item.notes.last_mut(),
    };
    if let Some(last) = target {
        last.push(' ');
        last.push_str(text);
    }
}
