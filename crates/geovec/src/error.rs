use std::io;

/// Errors returned by fallible `geovec` operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An aggregate was requested on an empty sequence of vectors.
    #[error("cannot compute {operation} of an empty sequence")]
    Empty { operation: &'static str },

    /// A component index was outside of `0..len`.
    #[error("component index {index} is out of range for a vector with {len} components")]
    ComponentIndex { index: usize, len: usize },

    /// The reader or writer passed to the binary codec failed.
    #[error("I/O error in vector codec: {0}")]
    Io(#[from] io::Error),
}

/// Result type defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
