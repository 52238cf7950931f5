//! Error types for fallible tree operations.
//!
//! Only [`remove`][crate::linked::Tree::remove] fails loudly - asking to
//! remove an absent item is a precondition violation, not a no-op. Queries
//! that merely come up empty (`find`, `replace`, `predecessor`, `successor`)
//! signal absence with `Option` instead.

use thiserror::Error;

/// Errors returned by [`Tree`][crate::linked::Tree] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// No item equal to the requested one is in the tree.
    #[error("item not in tree")]
    NotFound,
}
