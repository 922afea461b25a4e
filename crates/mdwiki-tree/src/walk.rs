//! Traversal control for [`Document::walk`](crate::Document::walk).

/// What the walk should do after a visitor returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WalkStatus {
    /// Continue with the next node in document order.
    #[default]
    GoToNext,
    /// Do not descend into the children of the node just entered.
    ///
    /// The node's exit visit still happens. Has no effect on leaves or on
    /// exit visits.
    SkipChildren,
    /// Stop the walk without visiting anything else.
    Terminate,
}
