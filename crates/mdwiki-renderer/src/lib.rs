//! Markdown to Confluence wiki markup.
//!
//! [`WikiRenderer`] walks a [`Document`] built by `mdwiki-tree` and appends
//! wiki markup for every node: headings become `h1.`, emphasis `_x_`, tables
//! `||head||` rows, fenced code `{code:lang}` blocks and so on. Text is
//! backslash-escaped so that wiki-significant characters survive literally.
//!
//! # Example
//!
//! ```
//! use mdwiki_renderer::{ParseOptions, RenderFlags, WikiRenderer};
//!
//! let wiki = WikiRenderer::new(RenderFlags::INFORMATION_MACROS)
//!     .render_markdown("```tip\nRead the docs.\n```", &ParseOptions::common())
//!     .unwrap();
//! assert_eq!(wiki, "{tip}\nRead the docs.\n{tip}\n\n");
//! ```
//!
//! # Flags
//!
//! - [`RenderFlags::INFORMATION_MACROS`]: fenced blocks tagged `info`, `tip`,
//!   `note` or `warning` become the matching macro.
//! - [`RenderFlags::IGNORE_MACRO_ESCAPING`]: `{` is left unescaped so macros
//!   written in the source pass through.

mod config;
mod error;
mod escape;
mod flags;
mod renderer;
mod tags;

pub use config::parse_options;
pub use error::RenderError;
pub use escape::{escape_wiki, escape_wiki_into};
pub use flags::{InformationMacro, RenderFlags};
pub use mdwiki_tree::{Document, Options, ParseOptions};
pub use renderer::{WikiRenderer, run, run_with_config};
