//! Rule error types.

use rewrite_parser::ParseError;
use rewrite_pattern::PatternError;
use thiserror::Error;

use crate::FunctionError;

/// Result type for building rules.
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors that can occur while turning rule text into a `RewriteRule`.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The rule text failed to parse; `rendered` points at the error.
    #[error("{rendered}")]
    Parse {
        #[source]
        source: ParseError,
        rendered: String,
    },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl RuleError {
    pub fn parse(input: &str, source: ParseError) -> Self {
        Self::Parse {
            rendered: source.render(input),
            source,
        }
    }
}

/// Result type for rule evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that abort the evaluation of a rule.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("URL '{url}' does not match the rule source")]
    NoMatch { url: String },

    #[error("Variable :{name} not found")]
    UnresolvedVariable { name: String },

    #[error("Function {name} not found")]
    UnknownFunction { name: String },

    #[error("Function {name} failed: {source}")]
    FunctionFailed {
        name: String,
        #[source]
        source: FunctionError,
    },

    #[error(transparent)]
    Build(#[from] PatternError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl EvalError {
    pub fn no_match(url: impl Into<String>) -> Self {
        Self::NoMatch { url: url.into() }
    }

    pub fn unresolved_variable(name: impl Into<String>) -> Self {
        Self::UnresolvedVariable { name: name.into() }
    }

    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction { name: name.into() }
    }

    pub fn function_failed(name: impl Into<String>, source: FunctionError) -> Self {
        Self::FunctionFailed {
            name: name.into(),
            source,
        }
    }
}
