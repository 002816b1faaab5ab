use thiserror::Error;

/// Errors surfaced at the construction boundary of a [`crate::SuffixTree`].
///
/// Invariant violations discovered during construction (a missing suffix
/// link where one must exist, an unreachable node kind) are not represented
/// here — they indicate a bug in this crate's builder and abort via
/// `.expect(...)` at the specific invariant point rather than propagate as
/// a `Result`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuffixTreeError {
    /// The argument passed to `build` was neither a single sequence nor a
    /// list of sequences.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Too many sequences were supplied for the generalized build; the
    /// terminator generator only produces `max` distinct values.
    #[error("too many input sequences: supplied {supplied}, maximum is {max}")]
    TooManyInputs { supplied: usize, max: usize },
}

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, SuffixTreeError>;

impl SuffixTreeError {
    pub(crate) fn too_many_inputs(supplied: usize, max: usize) -> Self {
        Self::TooManyInputs { supplied, max }
    }

    pub(crate) fn invalid_input(msg: impl std::fmt::Display) -> Self {
        Self::InvalidInput(msg.to_string())
    }
}
