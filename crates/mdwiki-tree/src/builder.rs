//! Tree construction from `pulldown-cmark` events.
//!
//! `pulldown-cmark` produces a flat event stream. The builder folds it into a
//! [`Document`] and normalizes a few shapes so consumers can rely on them:
//!
//! - Inline content placed directly in a list item (tight lists) is wrapped in
//!   a paragraph, so every item body is a sequence of blocks.
//! - Header cells are wrapped in a row under the table head, and body rows are
//!   grouped under a table body.
//! - Code block and HTML block text is collected into the leaf's literal.
//! - Adjacent text events merge into one text node, and soft breaks become a
//!   `\n` inside that text (or hard break nodes, if requested).
//! - Image descriptions are captured as plain alt text on the image node.

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

use crate::document::Document;
use crate::node::{NodeId, NodeKind, NodeRef};
use crate::options::ParseOptions;
use crate::util::{heading_level_to_num, non_empty};

/// A node on the open-element stack.
#[derive(Clone, Copy)]
struct OpenNode {
    id: NodeId,
    /// Paragraph synthesized for tight list item content.
    implicit: bool,
}

/// Image whose description is being collected.
#[derive(Clone, Copy)]
struct ImageCapture {
    id: NodeId,
    /// Tags opened inside the description and not yet closed.
    depth: usize,
}

struct TreeBuilder {
    document: Document,
    stack: Vec<OpenNode>,
    /// Code block or HTML block collecting its literal.
    pending: Option<NodeKind>,
    image: Option<ImageCapture>,
    hard_line_breaks: bool,
}

impl TreeBuilder {
    fn new(options: &ParseOptions) -> Self {
        let document = Document::new();
        let root = document.root_id();
        Self {
            document,
            stack: vec![OpenNode {
                id: root,
                implicit: false,
            }],
            pending: None,
            image: None,
            hard_line_breaks: options.hard_line_breaks,
        }
    }

    fn build<'a, I>(mut self, events: I) -> Document
    where
        I: IntoIterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }
        self.document
    }

    fn process_event(&mut self, event: Event<'_>) {
        if let Some(capture) = self.image {
            self.capture_image(capture, event);
            return;
        }

        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => match self.pending.as_mut() {
                Some(pending) => push_literal(pending, &text),
                None => self.text(&text),
            },
            Event::Html(html) => match self.pending.as_mut() {
                Some(pending) => push_literal(pending, &html),
                None => self.leaf(NodeKind::HtmlBlock(html.into_string())),
            },
            Event::InlineHtml(html) => self.leaf(NodeKind::HtmlSpan(html.into_string())),
            Event::Code(code) => self.leaf(NodeKind::Code(code.into_string())),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.leaf(NodeKind::HardBreak),
            Event::Rule => self.leaf(NodeKind::HorizontalRule),
            Event::TaskListMarker(_) => self.leaf(NodeKind::Unsupported("task list marker")),
            Event::FootnoteReference(_) => self.leaf(NodeKind::Unsupported("footnote reference")),
            Event::InlineMath(_) | Event::DisplayMath(_) => {
                self.leaf(NodeKind::Unsupported("math"));
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.open(NodeKind::Paragraph),
            Tag::Heading { level, .. } => self.open(NodeKind::Heading {
                level: heading_level_to_num(level),
            }),
            Tag::BlockQuote(_) => self.open(NodeKind::BlockQuote),
            Tag::CodeBlock(kind) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) => non_empty(&info),
                    CodeBlockKind::Indented => None,
                };
                self.pending = Some(NodeKind::CodeBlock {
                    info,
                    literal: String::new(),
                });
            }
            Tag::HtmlBlock => self.pending = Some(NodeKind::HtmlBlock(String::new())),
            Tag::List(start) => self.open(NodeKind::List {
                ordered: start.is_some(),
            }),
            Tag::Item => self.open(NodeKind::Item),
            Tag::Table(_) => self.open(NodeKind::Table),
            Tag::TableHead => {
                self.open(NodeKind::TableHead);
                self.open(NodeKind::TableRow);
            }
            Tag::TableRow => {
                if matches!(self.top_kind(), NodeKind::Table) {
                    self.open(NodeKind::TableBody);
                }
                self.open(NodeKind::TableRow);
            }
            Tag::TableCell => {
                let header = self.in_table_head();
                self.open(NodeKind::TableCell { header });
            }
            Tag::Emphasis => self.open(NodeKind::Emphasis),
            Tag::Strong => self.open(NodeKind::Strong),
            Tag::Strikethrough => self.open(NodeKind::Strikethrough),
            Tag::Link {
                dest_url, title, ..
            } => self.open(NodeKind::Link {
                destination: non_empty(&dest_url),
                title: title.into_string(),
            }),
            Tag::Image {
                dest_url, title, ..
            } => {
                self.open(NodeKind::Image {
                    destination: non_empty(&dest_url),
                    title: title.into_string(),
                    alt: String::new(),
                });
                self.image = Some(ImageCapture {
                    id: self.top(),
                    depth: 0,
                });
            }
            Tag::FootnoteDefinition(_) => self.open(NodeKind::Unsupported("footnote definition")),
            Tag::DefinitionList | Tag::DefinitionListTitle | Tag::DefinitionListDefinition => {
                self.open(NodeKind::Unsupported("definition list"));
            }
            Tag::Superscript => self.open(NodeKind::Unsupported("superscript")),
            Tag::Subscript => self.open(NodeKind::Unsupported("subscript")),
            Tag::MetadataBlock(_) => self.open(NodeKind::Unsupported("metadata block")),
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::CodeBlock | TagEnd::HtmlBlock => {
                if let Some(kind) = self.pending.take() {
                    self.leaf(kind);
                }
            }
            TagEnd::TableHead => {
                // Row opened together with the head
                self.close();
                self.close();
            }
            TagEnd::Table => {
                if matches!(self.top_kind(), NodeKind::TableBody) {
                    self.close();
                }
                self.close();
            }
            _ => self.close(),
        }
    }

    fn capture_image(&mut self, capture: ImageCapture, event: Event<'_>) {
        match event {
            Event::Start(_) => {
                self.image = Some(ImageCapture {
                    depth: capture.depth + 1,
                    ..capture
                });
            }
            Event::End(_) if capture.depth > 0 => {
                self.image = Some(ImageCapture {
                    depth: capture.depth - 1,
                    ..capture
                });
            }
            Event::End(_) => {
                self.image = None;
                self.close();
            }
            Event::Text(text) | Event::Code(text) | Event::InlineMath(text) => {
                self.push_alt(capture.id, &text);
            }
            Event::SoftBreak | Event::HardBreak => self.push_alt(capture.id, " "),
            _ => {}
        }
    }

    fn push_alt(&mut self, image: NodeId, text: &str) {
        if let NodeKind::Image { alt, .. } = self.document.kind_mut(image) {
            alt.push_str(text);
        }
    }

    fn text(&mut self, text: &str) {
        self.prepare(false);
        let top = self.top();
        let last = self.document.get(top).last_child().map(NodeRef::id);
        if let Some(last) = last
            && let NodeKind::Text(literal) = self.document.kind_mut(last)
        {
            literal.push_str(text);
            return;
        }
        self.document.append(top, NodeKind::Text(text.to_owned()));
    }

    fn soft_break(&mut self) {
        if self.hard_line_breaks {
            self.leaf(NodeKind::HardBreak);
        } else {
            self.text("\n");
        }
    }

    fn top(&self) -> NodeId {
        self.stack
            .last()
            .map_or_else(|| self.document.root_id(), |open| open.id)
    }

    fn top_kind(&self) -> &NodeKind {
        self.document.get(self.top()).kind()
    }

    fn in_table_head(&self) -> bool {
        let row = self.document.get(self.top());
        matches!(row.parent().map(NodeRef::kind), Some(NodeKind::TableHead))
    }

    /// Open a container as the last child of the current node.
    fn open(&mut self, kind: NodeKind) {
        self.prepare(kind.is_block());
        let id = self.document.append(self.top(), kind);
        self.stack.push(OpenNode {
            id,
            implicit: false,
        });
    }

    /// Append a leaf to the current node.
    fn leaf(&mut self, kind: NodeKind) {
        self.prepare(kind.is_block());
        self.document.append(self.top(), kind);
    }

    fn close(&mut self) {
        self.close_implicit();
        // The root stays open
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Make sure the current node can take a child of the given category.
    ///
    /// Blocks end an implicit paragraph; inline content directly inside a list
    /// item starts one.
    fn prepare(&mut self, block: bool) {
        if block {
            self.close_implicit();
        } else if matches!(self.top_kind(), NodeKind::Item) {
            let id = self.document.append(self.top(), NodeKind::Paragraph);
            self.stack.push(OpenNode { id, implicit: true });
        }
    }

    fn close_implicit(&mut self) {
        if self.stack.last().is_some_and(|open| open.implicit) {
            self.stack.pop();
        }
    }
}

fn push_literal(kind: &mut NodeKind, text: &str) {
    if let NodeKind::CodeBlock { literal, .. } | NodeKind::HtmlBlock(literal) = kind {
        literal.push_str(text);
    }
}

impl Document {
    /// Parse markdown into a document tree.
    #[must_use]
    pub fn parse(markdown: &str, options: &ParseOptions) -> Self {
        let parser = Parser::new_ext(markdown, options.extensions);
        let document = Self::from_events(parser, options);
        tracing::debug!(
            bytes = markdown.len(),
            nodes = document.len(),
            "Built document tree"
        );
        document
    }

    /// Build a document tree from an existing event stream.
    ///
    /// Only [`ParseOptions::hard_line_breaks`] is consulted; the extensions
    /// are a concern of whoever produced the events.
    pub fn from_events<'a, I>(events: I, options: &ParseOptions) -> Self
    where
        I: IntoIterator<Item = Event<'a>>,
    {
        TreeBuilder::new(options).build(events)
    }
}
