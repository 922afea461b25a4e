//! Confluence wiki markup renderer.

use mdwiki_config::Config;
use mdwiki_tree::{Document, NodeKind, NodeRef, Options, ParseOptions, WalkStatus};

use crate::config::parse_options;
use crate::error::RenderError;
use crate::escape::escape_wiki_into;
use crate::flags::{InformationMacro, RenderFlags};
use crate::tags;

/// Renders a markdown [`Document`] as Confluence wiki markup.
///
/// The renderer is a visitor: [`render_node`](Self::render_node) is called
/// once per walk step and appends the tokens for that node. Output is
/// written in two ways:
///
/// - tracked writes (markup tokens) record their length, so later line breaks
///   know that something was emitted;
/// - plain writes (escaped text, code block bodies, hard breaks) do not.
///
/// Line breaks emitted at block boundaries are suppressed until the first
/// tracked write, which keeps the output free of a leading blank line.
///
/// A renderer holds the state of exactly one traversal. Build a new one for
/// every document; independent renderers share nothing and can run on
/// separate threads.
#[derive(Debug)]
pub struct WikiRenderer {
    output: String,
    flags: RenderFlags,
    /// Length of the most recent tracked write, 0 before any.
    last_output_len: usize,
    /// Number of lists currently open.
    item_level: usize,
}

impl WikiRenderer {
    #[must_use]
    pub fn new(flags: RenderFlags) -> Self {
        Self {
            output: String::with_capacity(4096),
            flags,
            last_output_len: 0,
            item_level: 0,
        }
    }

    /// Create a renderer with flags taken from the `[render]` config section.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(RenderFlags::from(&config.render))
    }

    #[must_use]
    pub fn flags(&self) -> RenderFlags {
        self.flags
    }

    /// Output accumulated so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consume the renderer and return its output.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    /// Render a whole document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedNode`] if the tree contains a node
    /// kind without wiki output. Nothing is returned for a partial render.
    pub fn render(mut self, document: &Document) -> Result<String, RenderError> {
        document.walk(|node, entering| self.render_node(node, entering))?;
        tracing::debug!(
            nodes = document.len(),
            bytes = self.output.len(),
            "Rendered wiki markup"
        );
        Ok(self.output)
    }

    /// Parse markdown and render the resulting document.
    ///
    /// # Errors
    ///
    /// See [`render`](Self::render).
    pub fn render_markdown(
        self,
        markdown: &str,
        options: &ParseOptions,
    ) -> Result<String, RenderError> {
        let document = Document::parse(markdown, options);
        self.render(&document)
    }

    /// Render a single walk step.
    ///
    /// Container nodes are expected twice (`entering` then leaving), leaves
    /// once with `entering` set. Always asks the walk to continue.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedNode`] for [`NodeKind::Unsupported`].
    pub fn render_node(
        &mut self,
        node: NodeRef<'_>,
        entering: bool,
    ) -> Result<WalkStatus, RenderError> {
        tracing::trace!(kind = node.kind().name(), entering, "Rendering node");

        match node.kind() {
            NodeKind::Document
            | NodeKind::SoftBreak
            | NodeKind::HtmlBlock(_)
            | NodeKind::HtmlSpan(_)
            | NodeKind::TableHead
            | NodeKind::TableBody => {}
            NodeKind::Text(text) => self.text(text),
            NodeKind::HardBreak => self.write(tags::NEWLINE),
            NodeKind::Emphasis => self.out(tags::EMPHASIS),
            NodeKind::Strong => self.out(tags::STRONG),
            NodeKind::Strikethrough => self.out(tags::STRIKETHROUGH),
            NodeKind::Code(code) => self.inline_code(code),
            NodeKind::Heading { level } => self.heading(*level, entering),
            NodeKind::BlockQuote => self.block_quote(entering),
            NodeKind::CodeBlock { info, literal } => self.code_block(info.as_deref(), literal),
            NodeKind::Image { destination, .. } => self.image(destination.as_deref(), entering),
            NodeKind::Link { destination, .. } => self.link(destination.as_deref(), entering),
            NodeKind::List { .. } => self.list(entering),
            NodeKind::Item => {
                if entering {
                    self.item(node);
                }
            }
            NodeKind::HorizontalRule => self.horizontal_rule(),
            NodeKind::Table => {
                if !entering {
                    self.cr();
                }
            }
            NodeKind::TableRow => self.table_row(node, entering),
            NodeKind::TableCell { header } => {
                if *header || entering {
                    self.out(tags::CELL);
                }
            }
            NodeKind::Paragraph => {
                if !entering {
                    self.paragraph_end(node);
                }
            }
            NodeKind::Unsupported(name) => {
                let kind = *name;
                tracing::warn!(kind, "Unsupported node type, aborting render");
                return Err(RenderError::UnsupportedNode { kind });
            }
        }

        Ok(WalkStatus::GoToNext)
    }

    fn text(&mut self, text: &str) {
        let ignore_macros = self.flags.contains(RenderFlags::IGNORE_MACRO_ESCAPING);
        escape_wiki_into(&mut self.output, text, ignore_macros);
    }

    fn inline_code(&mut self, code: &str) {
        self.out(tags::INLINE_CODE_OPEN);
        self.text(code);
        self.out(tags::INLINE_CODE_CLOSE);
    }

    fn heading(&mut self, level: u8, entering: bool) {
        if entering {
            self.out(tags::heading(level));
            self.write(tags::SPACE);
        } else {
            self.cr();
        }
    }

    fn block_quote(&mut self, entering: bool) {
        self.out(tags::QUOTE);
        self.cr();
        if !entering {
            self.cr();
        }
    }

    fn code_block(&mut self, info: Option<&str>, literal: &str) {
        let language = info.and_then(|info| info.split_whitespace().next());
        let information = if self.flags.contains(RenderFlags::INFORMATION_MACROS) {
            language.and_then(InformationMacro::from_language)
        } else {
            None
        };

        self.out(tags::MACRO_OPEN);
        match (information, language) {
            (Some(information), _) => self.out(information.name()),
            (None, Some(language)) => {
                self.out(tags::CODE);
                self.out(tags::LANGUAGE_SEPARATOR);
                self.out(language);
            }
            (None, None) => self.out(tags::CODE),
        }
        self.out(tags::MACRO_CLOSE);
        self.cr();

        self.write(literal);

        self.out(tags::MACRO_OPEN);
        self.out(information.map_or(tags::CODE, InformationMacro::name));
        self.out(tags::MACRO_CLOSE);
        self.cr();
        self.cr();
    }

    fn image(&mut self, destination: Option<&str>, entering: bool) {
        let Some(destination) = destination else {
            return;
        };
        self.out(tags::IMAGE);
        if entering {
            self.out(destination);
        }
    }

    fn link(&mut self, destination: Option<&str>, entering: bool) {
        if entering {
            self.out(tags::LINK_OPEN);
            return;
        }
        if let Some(destination) = destination {
            self.out(tags::LINK_SEPARATOR);
            self.out(destination);
        }
        self.out(tags::LINK_CLOSE);
    }

    fn list(&mut self, entering: bool) {
        if entering {
            self.item_level += 1;
            return;
        }
        self.item_level = self.item_level.saturating_sub(1);
        if self.item_level == 0 {
            self.cr();
        }
    }

    fn item(&mut self, node: NodeRef<'_>) {
        let ordered = matches!(
            node.parent().map(NodeRef::kind),
            Some(NodeKind::List { ordered: true })
        );
        let bullet = if ordered { tags::NUMBERED } else { tags::BULLET };
        for _ in 0..self.item_level {
            self.out(bullet);
        }
        self.write(tags::SPACE);
    }

    fn horizontal_rule(&mut self) {
        self.cr();
        self.out(tags::HORIZONTAL_RULE);
        self.cr();
    }

    fn table_row(&mut self, node: NodeRef<'_>, entering: bool) {
        match node.parent().map(NodeRef::kind) {
            Some(NodeKind::TableHead) => {
                self.out(tags::CELL);
                if !entering {
                    self.cr();
                }
            }
            Some(NodeKind::TableBody) if !entering => {
                self.out(tags::CELL);
                self.cr();
            }
            _ => {}
        }
    }

    fn paragraph_end(&mut self, node: NodeRef<'_>) {
        if matches!(node.next().map(NodeRef::kind), Some(NodeKind::Paragraph)) {
            self.write(tags::NEWLINE);
            self.write(tags::NEWLINE);
            return;
        }
        // Item bodies stay tight
        if !matches!(node.parent().map(NodeRef::kind), Some(NodeKind::Item)) {
            self.cr();
        }
        self.cr();
    }

    /// Tracked write.
    fn out(&mut self, text: &str) {
        self.output.push_str(text);
        self.last_output_len = text.len();
    }

    /// Plain write, invisible to [`cr`](Self::cr).
    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Line break, suppressed while the last tracked write is empty.
    fn cr(&mut self) {
        if self.last_output_len > 0 {
            self.out(tags::NEWLINE);
        }
    }
}

impl Default for WikiRenderer {
    fn default() -> Self {
        Self::new(RenderFlags::NONE)
    }
}

/// Convert markdown to Confluence wiki markup.
///
/// Parses with the standard extensions plus `extensions` and renders with
/// [`RenderFlags::INFORMATION_MACROS`].
///
/// # Errors
///
/// Returns [`RenderError::UnsupportedNode`] when an enabled extension
/// produces constructs without wiki output (footnotes, task lists, math).
///
/// # Example
///
/// ```
/// use mdwiki_renderer::{Options, run};
///
/// let wiki = run("# Section\nhello, world.\n", Options::empty()).unwrap();
/// assert_eq!(wiki, "h1. Section\nhello, world.\n\n");
/// ```
pub fn run(markdown: &str, extensions: Options) -> Result<String, RenderError> {
    let options = ParseOptions::common().with_extensions(extensions);
    WikiRenderer::new(RenderFlags::INFORMATION_MACROS).render_markdown(markdown, &options)
}

/// Convert markdown to Confluence wiki markup using loaded configuration.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_config(markdown: &str, config: &Config) -> Result<String, RenderError> {
    WikiRenderer::from_config(config).render_markdown(markdown, &parse_options(&config.markdown))
}
