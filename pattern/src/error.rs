//! Pattern error types.

use thiserror::Error;

/// Errors that can occur while compiling paths or building templates.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A derived or declared regular expression failed to compile.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },

    /// A list value was bound into a segment without `+` or `*`.
    #[error("Variable :{name} is not an array")]
    ListInScalarSegment { name: String },

    /// A scalar value was bound into a `+` or `*` segment.
    #[error("Value '{value}' of :{name} is not an array")]
    ScalarInRepeatingSegment { name: String, value: String },

    #[error("Unbound variable '{name}'")]
    UnboundVariable { name: String },
}

impl PatternError {
    pub fn invalid_regex(pattern: impl Into<String>, source: regex_lite::Error) -> Self {
        Self::InvalidRegex {
            pattern: pattern.into(),
            source,
        }
    }

    pub fn list_in_scalar_segment(name: impl Into<String>) -> Self {
        Self::ListInScalarSegment { name: name.into() }
    }

    pub fn scalar_in_repeating_segment(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ScalarInRepeatingSegment {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn unbound_variable(name: impl Into<String>) -> Self {
        Self::UnboundVariable { name: name.into() }
    }
}

/// Result type for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;
