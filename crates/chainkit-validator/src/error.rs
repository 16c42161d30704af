//! Error types for validator lookup.

#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    /// No built-in rule or registered validator has this name.
    #[error("validator not found: {name}")]
    NotFound { name: String },

    /// A built-in rule was named with missing or malformed arguments.
    #[error("invalid rule `{rule}`: {reason}")]
    InvalidRule { rule: String, reason: String },
}
