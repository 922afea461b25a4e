//! Error types for wiki rendering.

/// Error that aborts a render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// The tree contains a node kind the renderer has no output for.
    ///
    /// Means the parser produced something this renderer was not built for,
    /// usually because an unsupported extension was enabled.
    #[error("unsupported node type: {kind}")]
    UnsupportedNode {
        /// Name of the offending node kind.
        kind: &'static str,
    },
}
