//! Error types for parlance-renderer.

use thiserror::Error;

/// Problems reported by [`check_template`](crate::render::check_template).
///
/// Rendering itself never fails — malformed alternation syntax degrades to
/// literal text. This type exists for authoring-time validation only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A `(` or `)` with no matching counterpart. `position` is the byte
    /// offset of the offending parenthesis.
    #[error("unbalanced parenthesis at byte {position}")]
    Unbalanced { position: usize },

    /// An alternation group containing an empty option, e.g. `(a|)`.
    #[error("empty option in alternation group {group}")]
    EmptyOption { group: String },
}
