//! Mapping from configuration to parser options.

use mdwiki_config::MarkdownConfig;
use mdwiki_tree::{Options, ParseOptions};

/// Build parser options from the `[markdown]` config section.
#[must_use]
pub fn parse_options(config: &MarkdownConfig) -> ParseOptions {
    let mut extensions = Options::empty();
    if config.tables {
        extensions |= Options::ENABLE_TABLES;
    }
    if config.strikethrough {
        extensions |= Options::ENABLE_STRIKETHROUGH;
    }
    if config.heading_attributes {
        extensions |= Options::ENABLE_HEADING_ATTRIBUTES;
    }
    if config.smart_punctuation {
        extensions |= Options::ENABLE_SMART_PUNCTUATION;
    }

    ParseOptions::commonmark()
        .with_extensions(extensions)
        .with_hard_line_breaks(config.hard_line_breaks)
}
