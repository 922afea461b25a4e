//! Parser configuration.

use pulldown_cmark::Options;

/// Options controlling how markdown is parsed into a [`Document`](crate::Document).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// `pulldown-cmark` extensions to enable.
    pub extensions: Options,
    /// Turn every soft line break into a hard break node.
    pub hard_line_breaks: bool,
}

impl ParseOptions {
    /// Standard extensions: tables, strikethrough and heading attributes.
    #[must_use]
    pub fn common() -> Self {
        Self {
            extensions: common_extensions(),
            hard_line_breaks: false,
        }
    }

    /// Plain `CommonMark` with no extensions.
    #[must_use]
    pub fn commonmark() -> Self {
        Self {
            extensions: Options::empty(),
            hard_line_breaks: false,
        }
    }

    /// Enable additional extensions on top of the current set.
    #[must_use]
    pub fn with_extensions(mut self, extensions: Options) -> Self {
        self.extensions |= extensions;
        self
    }

    #[must_use]
    pub fn with_hard_line_breaks(mut self, enabled: bool) -> Self {
        self.hard_line_breaks = enabled;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::common()
    }
}

/// Extensions enabled by [`ParseOptions::common`].
#[must_use]
pub fn common_extensions() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_HEADING_ATTRIBUTES
}
