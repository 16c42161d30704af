//! Error types for `Str` operations.

/// Errors raised while building or transforming a `Str`.
#[derive(Debug, thiserror::Error)]
pub enum StrError {
    /// Input bytes are not valid in the expected encoding.
    #[error("string is not valid {encoding}")]
    Encoding { encoding: String },

    /// The encoding label is not recognized.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid base64 input: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A result would exceed the configured `max_length`.
    #[error("result of {requested} characters exceeds the limit of {limit}")]
    TooLarge { requested: usize, limit: usize },

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl StrError {
    pub(crate) fn utf8() -> Self {
        Self::Encoding {
            encoding: "UTF-8".to_string(),
        }
    }
}
