// src/tables/error.rs
use thiserror::Error;

/// Build-time failures. Each one points at an authoring mistake in the word
/// list; compilation stops at the first and produces no tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Two categories share a tag.
    #[error("duplicate category tag {tag:?} (categories #{first} and #{second})")]
    DuplicateTag {
        tag: char,
        first: usize,
        second: usize,
    },

    /// A category lists no fragments.
    #[error("category {tag:?} has no fragments")]
    EmptyCategory { tag: char },

    /// Tag is not a single 7-bit ASCII character.
    #[error("invalid category tag {tag:?}: must be a single ASCII character")]
    InvalidTag { tag: String },

    /// A fragment is empty or contains the pool terminator byte.
    #[error("category {tag:?} fragment #{index}: {reason}")]
    InvalidFragment {
        tag: char,
        index: usize,
        reason: &'static str,
    },

    /// The pool or the fragment count does not fit the table integer width.
    #[error("{resource} overflow: {needed} exceeds the maximum of {max}")]
    PoolOverflow {
        resource: &'static str,
        needed: usize,
        max: usize,
    },
}
