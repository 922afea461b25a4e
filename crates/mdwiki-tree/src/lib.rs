//! Markdown document tree for wiki rendering.
//!
//! Parses markdown with `pulldown-cmark` into an arena-backed [`Document`]
//! where every node knows its parent and siblings, and drives consumers
//! through [`Document::walk`], which calls a visitor once when entering and
//! once when leaving each container node.
//!
//! # Example
//!
//! ```
//! use mdwiki_tree::{Document, NodeKind, ParseOptions, WalkStatus};
//!
//! let document = Document::parse("# Title\n\nBody", &ParseOptions::common());
//! let mut headings = 0;
//! document
//!     .walk(|node, entering| {
//!         if entering && matches!(node.kind(), NodeKind::Heading { .. }) {
//!             headings += 1;
//!         }
//!         Ok::<_, std::convert::Infallible>(WalkStatus::GoToNext)
//!     })
//!     .unwrap();
//! assert_eq!(headings, 1);
//! ```

mod builder;
mod document;
mod node;
mod options;
mod util;
mod walk;

pub use document::Document;
pub use node::{NodeId, NodeKind, NodeRef};
pub use options::{ParseOptions, common_extensions};
pub use pulldown_cmark::Options;
pub use walk::WalkStatus;
