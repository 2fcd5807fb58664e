//! Lossless syntax nodes for the Mox notation.
//!
//! The tree keeps whitespace and comments as first-class nodes so it can be
//! rendered back to the exact source text, or edited and rendered again.

mod node;
mod syntax_kind;
mod syntax_set;
mod walk;

/// Node types and the verbatim renderer.
pub use node::{Block, COMMENT_END, COMMENT_START, ESCAPE, Node, Render, render};
/// Token and node kinds used throughout the pipeline.
pub use syntax_kind::{Delimiter, SyntaxKind};
/// Compact set for grouping `SyntaxKind` values.
pub use syntax_set::SyntaxSet;
/// Tree traversal helpers.
pub use walk::{Preorder, WalkEvent, debug_tree, leaves};
