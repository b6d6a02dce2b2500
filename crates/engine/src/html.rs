//! Minimal HTML entity escaping.
//!
//! Message text is escaped exactly once, when the message is created; the
//! renderer only escapes the strings it interpolates itself (names, labels,
//! the timestamp). Nothing downstream may escape again.

/// Replace the four HTML-significant characters with named entities.
///
/// `&` runs first so entities produced by the later replacements are not
/// themselves re-escaped.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_four_entities() {
        assert_eq!(
            escape(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn leaves_plain_text_untouched() {
        assert_eq!(escape("Broken geometry"), "Broken geometry");
    }

    #[test]
    fn escaping_is_not_idempotent() {
        let once = escape("a < b");
        let twice = escape(&once);
        assert_eq!(once, "a &lt; b");
        assert_ne!(once, twice);
        assert_eq!(twice, "a &amp;lt; b");
    }
}
