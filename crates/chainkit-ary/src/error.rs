//! Error types for `Ary` operations.

/// Errors raised when an `Ary` precondition is violated.
#[derive(Debug, thiserror::Error)]
pub enum AryError {
    /// A value was used where a key is required but is neither a string nor
    /// an integer.
    #[error("key type mismatch: expected string or integer, got {found}")]
    KeyType { found: &'static str },

    /// A positional or count request exceeds the collection size.
    #[error("index of Ary is out of range: requested {requested}, size {size}")]
    OutOfRange { requested: usize, size: usize },

    /// Two collections that must pair up have different sizes.
    #[error("length mismatch: {left} keys for {right} values")]
    LengthMismatch { left: usize, right: usize },

    /// A fill or pad would build more elements than the configured limit.
    #[error("{requested} elements exceed the limit of {limit}")]
    TooLarge { requested: usize, limit: usize },

    /// JSON text could not be parsed or produced.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Nesting goes deeper than the configured JSON depth.
    #[error("json nesting depth {depth} exceeds limit {limit}")]
    DepthExceeded { depth: usize, limit: usize },
}
