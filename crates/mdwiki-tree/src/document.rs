//! Arena-backed document tree.

use crate::node::{NodeId, NodeKind, NodeRef};
use crate::walk::WalkStatus;

/// Storage for one node and its structural links.
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) last_child: Option<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            prev: None,
            next: None,
            first_child: None,
            last_child: None,
        }
    }
}

/// A parsed markdown document.
///
/// Nodes live in a flat arena and reference each other by [`NodeId`].
/// The tree is append-only: consumers read it through [`NodeRef`] and never
/// mutate it.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    /// Create a document containing only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new(NodeKind::Document, None)],
        }
    }

    /// Identifier of the root node.
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// Handle to the root node.
    #[must_use]
    pub fn root(&self) -> NodeRef<'_> {
        self.get(self.root_id())
    }

    /// Handle to an arbitrary node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this document.
    #[must_use]
    pub fn get(&self, id: NodeId) -> NodeRef<'_> {
        assert!(id.0 < self.nodes.len(), "node {} out of range", id.0);
        NodeRef { document: self, id }
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document holds nothing but its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Append a new last child to `parent` and return its identifier.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not produced by this document.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut data = NodeData::new(kind, Some(parent));
        let prev = self.nodes[parent.0].last_child;
        data.prev = prev;
        self.nodes.push(data);

        match prev {
            Some(prev) => self.nodes[prev.0].next = Some(id),
            None => self.nodes[parent.0].first_child = Some(id),
        }
        self.nodes[parent.0].last_child = Some(id);
        id
    }

    pub(crate) fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    pub(crate) fn kind_mut(&mut self, id: NodeId) -> &mut NodeKind {
        &mut self.nodes[id.0].kind
    }

    /// Walk the whole document depth-first, see [`walk_from`](Self::walk_from).
    pub fn walk<E, F>(&self, visitor: F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'_>, bool) -> Result<WalkStatus, E>,
    {
        self.walk_from(self.root_id(), visitor)
    }

    /// Walk the subtree rooted at `start` depth-first.
    ///
    /// Container nodes are visited twice: with `entering = true` before their
    /// children and with `entering = false` after them. Leaf nodes are visited
    /// once with `entering = true`.
    ///
    /// The visitor steers the walk through [`WalkStatus`]. Returning an error
    /// stops the walk immediately and hands the error back to the caller.
    pub fn walk_from<E, F>(&self, start: NodeId, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'_>, bool) -> Result<WalkStatus, E>,
    {
        let mut current = start;
        let mut entering = true;

        loop {
            let node = self.get(current);
            let status = visitor(node, entering)?;
            let container = node.kind().is_container();

            if status == WalkStatus::Terminate {
                return Ok(());
            }

            if entering && container {
                let first_child = self.nodes[current.0].first_child;
                match first_child {
                    Some(child) if status != WalkStatus::SkipChildren => current = child,
                    // Empty or skipped container: visit its exit next
                    _ => entering = false,
                }
                continue;
            }

            if current == start {
                return Ok(());
            }

            let data = &self.nodes[current.0];
            if let Some(next) = data.next {
                current = next;
                entering = true;
            } else if let Some(parent) = data.parent {
                current = parent;
                entering = false;
            } else {
                return Ok(());
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::convert::Infallible;

    /// Builds `Document > Paragraph > [Text("a"), Strong > Text("b")]`, `HorizontalRule`.
    fn sample() -> Document {
        let mut doc = Document::new();
        let root = doc.root_id();
        let para = doc.append(root, NodeKind::Paragraph);
        doc.append(para, NodeKind::Text("a".to_owned()));
        let strong = doc.append(para, NodeKind::Strong);
        doc.append(strong, NodeKind::Text("b".to_owned()));
        doc.append(root, NodeKind::HorizontalRule);
        doc
    }

    fn trace(doc: &Document, skip: &str, stop: &str) -> Vec<String> {
        let mut events = Vec::new();
        doc.walk(|node, entering| {
            let name = node.kind().name();
            events.push(format!("{}{name}", if entering { "+" } else { "-" }));
            Ok::<_, Infallible>(if entering && name == skip {
                WalkStatus::SkipChildren
            } else if name == stop {
                WalkStatus::Terminate
            } else {
                WalkStatus::GoToNext
            })
        })
        .unwrap();
        events
    }

    #[test]
    fn test_append_links_siblings() {
        let doc = sample();
        let para = doc.root().first_child().unwrap();
        let text = para.first_child().unwrap();
        let strong = text.next().unwrap();

        assert_eq!(strong.prev().unwrap().id(), text.id());
        assert_eq!(strong.parent().unwrap().id(), para.id());
        assert_eq!(para.last_child().unwrap().id(), strong.id());
        assert!(strong.next().is_none());
        assert_eq!(
            para.next().unwrap().kind(),
            &NodeKind::HorizontalRule
        );
        assert_eq!(doc.len(), 6);
    }

    #[test]
    fn test_children_iterator() {
        let doc = sample();
        let kinds: Vec<_> = doc.root().children().map(|n| n.kind().name()).collect();
        assert_eq!(kinds, vec!["paragraph", "horizontal rule"]);
    }

    #[test]
    fn test_walk_enters_and_leaves_containers() {
        let doc = sample();
        assert_eq!(
            trace(&doc, "", ""),
            vec![
                "+document",
                "+paragraph",
                "+text",
                "+strong",
                "+text",
                "-strong",
                "-paragraph",
                "+horizontal rule",
                "-document",
            ]
        );
    }

    #[test]
    fn test_walk_skip_children_still_leaves_node() {
        let doc = sample();
        assert_eq!(
            trace(&doc, "strong", ""),
            vec![
                "+document",
                "+paragraph",
                "+text",
                "+strong",
                "-strong",
                "-paragraph",
                "+horizontal rule",
                "-document",
            ]
        );
    }

    #[test]
    fn test_walk_terminate() {
        let doc = sample();
        assert_eq!(
            trace(&doc, "", "strong"),
            vec!["+document", "+paragraph", "+text", "+strong"]
        );
    }

    #[test]
    fn test_walk_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(trace(&doc, "", ""), vec!["+document", "-document"]);
    }

    #[test]
    fn test_walk_from_subtree() {
        let doc = sample();
        let para = doc.root().first_child().unwrap().id();
        let mut names = Vec::new();
        doc.walk_from(para, |node, entering| {
            if entering {
                names.push(node.kind().name());
            }
            Ok::<_, Infallible>(WalkStatus::GoToNext)
        })
        .unwrap();
        assert_eq!(names, vec!["paragraph", "text", "strong", "text"]);
    }

    #[test]
    fn test_walk_propagates_visitor_error() {
        let doc = sample();
        let mut visited = 0;
        let result = doc.walk(|node, _| {
            visited += 1;
            if matches!(node.kind(), NodeKind::Strong) {
                Err("boom")
            } else {
                Ok(WalkStatus::GoToNext)
            }
        });
        assert_eq!(result, Err("boom"));
        assert_eq!(visited, 4);
    }
}
