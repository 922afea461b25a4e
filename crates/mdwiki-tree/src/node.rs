//! Node kinds and read-only node handles.

use crate::document::Document;

/// Index of a node inside its [`Document`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Type of a document node together with its node-specific payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of the tree.
    Document,
    Paragraph,
    /// Heading with level 1-6 (levels above 6 are accepted and left to the consumer).
    Heading {
        level: u8,
    },
    BlockQuote,
    /// Fenced or indented code block.
    CodeBlock {
        /// Full fence info string, `None` for indented blocks and bare fences.
        info: Option<String>,
        /// Verbatim block content including the trailing newline.
        literal: String,
    },
    /// Raw HTML block.
    HtmlBlock(String),
    /// Raw inline HTML.
    HtmlSpan(String),
    List {
        ordered: bool,
    },
    Item,
    HorizontalRule,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableCell {
        /// Whether the cell belongs to the header row.
        header: bool,
    },
    Emphasis,
    Strong,
    Strikethrough,
    Link {
        /// Link target, `None` when the source gave an empty destination.
        destination: Option<String>,
        title: String,
    },
    Image {
        /// Image source, `None` when the source gave an empty destination.
        destination: Option<String>,
        title: String,
        /// Plain text collected from the image description.
        alt: String,
    },
    Text(String),
    /// Inline code span.
    Code(String),
    SoftBreak,
    HardBreak,
    /// A construct the parser produced that this tree does not model.
    ///
    /// Carries a human-readable name such as `"footnote definition"`.
    Unsupported(&'static str),
}

impl NodeKind {
    /// Whether the walk visits this node on both entry and exit.
    ///
    /// Leaves are visited once, with `entering` set.
    #[must_use]
    pub fn is_container(&self) -> bool {
        !matches!(
            self,
            Self::CodeBlock { .. }
                | Self::HtmlBlock(_)
                | Self::HtmlSpan(_)
                | Self::HorizontalRule
                | Self::Text(_)
                | Self::Code(_)
                | Self::SoftBreak
                | Self::HardBreak
        )
    }

    /// Whether this kind starts a new block when it appears inside a list item.
    pub(crate) fn is_block(&self) -> bool {
        matches!(
            self,
            Self::Paragraph
                | Self::Heading { .. }
                | Self::BlockQuote
                | Self::CodeBlock { .. }
                | Self::HtmlBlock(_)
                | Self::List { .. }
                | Self::Item
                | Self::HorizontalRule
                | Self::Table
        )
    }

    /// Literal payload carried by text-like nodes.
    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::Text(literal)
            | Self::Code(literal)
            | Self::HtmlBlock(literal)
            | Self::HtmlSpan(literal)
            | Self::CodeBlock { literal, .. } => Some(literal.as_str()),
            _ => None,
        }
    }

    /// Short name of the kind, used in logs and error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Paragraph => "paragraph",
            Self::Heading { .. } => "heading",
            Self::BlockQuote => "block quote",
            Self::CodeBlock { .. } => "code block",
            Self::HtmlBlock(_) => "html block",
            Self::HtmlSpan(_) => "html span",
            Self::List { .. } => "list",
            Self::Item => "list item",
            Self::HorizontalRule => "horizontal rule",
            Self::Table => "table",
            Self::TableHead => "table head",
            Self::TableBody => "table body",
            Self::TableRow => "table row",
            Self::TableCell { .. } => "table cell",
            Self::Emphasis => "emphasis",
            Self::Strong => "strong",
            Self::Strikethrough => "strikethrough",
            Self::Link { .. } => "link",
            Self::Image { .. } => "image",
            Self::Text(_) => "text",
            Self::Code(_) => "code",
            Self::SoftBreak => "soft break",
            Self::HardBreak => "hard break",
            Self::Unsupported(name) => *name,
        }
    }
}

/// Borrowed handle to a node and the document that owns it.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    pub(crate) document: &'a Document,
    pub(crate) id: NodeId,
}

impl<'a> NodeRef<'a> {
    /// Identifier of this node.
    #[must_use]
    pub fn id(self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn kind(self) -> &'a NodeKind {
        &self.document.data(self.id).kind
    }

    /// Literal payload of text-like nodes.
    #[must_use]
    pub fn literal(self) -> Option<&'a str> {
        self.kind().literal()
    }

    #[must_use]
    pub fn parent(self) -> Option<Self> {
        self.link(self.document.data(self.id).parent)
    }

    /// Previous sibling.
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.link(self.document.data(self.id).prev)
    }

    /// Next sibling.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.link(self.document.data(self.id).next)
    }

    #[must_use]
    pub fn first_child(self) -> Option<Self> {
        self.link(self.document.data(self.id).first_child)
    }

    #[must_use]
    pub fn last_child(self) -> Option<Self> {
        self.link(self.document.data(self.id).last_child)
    }

    /// Iterate over direct children in document order.
    pub fn children(self) -> impl Iterator<Item = NodeRef<'a>> {
        std::iter::successors(self.first_child(), |node| node.next())
    }

    fn link(self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self {
            document: self.document,
            id,
        })
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", self.kind())
            .finish()
    }
}
