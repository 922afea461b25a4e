//! Wiki markup tokens.

pub(crate) const QUOTE: &str = "{quote}";
pub(crate) const CODE: &str = "code";
pub(crate) const MACRO_OPEN: &str = "{";
pub(crate) const MACRO_CLOSE: &str = "}";
pub(crate) const LANGUAGE_SEPARATOR: &str = ":";
pub(crate) const INLINE_CODE_OPEN: &str = "{{";
pub(crate) const INLINE_CODE_CLOSE: &str = "}}";
pub(crate) const IMAGE: &str = "!";
pub(crate) const STRONG: &str = "*";
pub(crate) const STRIKETHROUGH: &str = "-";
pub(crate) const EMPHASIS: &str = "_";
pub(crate) const LINK_OPEN: &str = "[";
pub(crate) const LINK_SEPARATOR: &str = "|";
pub(crate) const LINK_CLOSE: &str = "]";
pub(crate) const BULLET: &str = "*";
pub(crate) const NUMBERED: &str = "#";
pub(crate) const HORIZONTAL_RULE: &str = "----";
pub(crate) const CELL: &str = "|";
pub(crate) const NEWLINE: &str = "\n";
pub(crate) const SPACE: &str = " ";

const HEADINGS: [&str; 6] = ["h1.", "h2.", "h3.", "h4.", "h5.", "h6."];

/// Heading prefix for `level`. Anything outside 1-5 uses the level 6 prefix.
#[must_use]
pub(crate) fn heading(level: u8) -> &'static str {
    match level {
        1..=5 => HEADINGS[usize::from(level) - 1],
        _ => HEADINGS[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading(1), "h1.");
        assert_eq!(heading(3), "h3.");
        assert_eq!(heading(6), "h6.");
    }

    #[test]
    fn test_heading_out_of_range() {
        assert_eq!(heading(7), "h6.");
        assert_eq!(heading(u8::MAX), "h6.");
        assert_eq!(heading(0), "h6.");
    }
}
