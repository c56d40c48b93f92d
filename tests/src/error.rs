//! Error types for the scenario framework.

use thiserror::Error;

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur when running scenarios.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The scenario has no rule.
    #[error("rule not specified for scenario '{scenario}'")]
    MissingRule { scenario: String },

    /// The rule failed to parse or compile.
    #[error("rule for scenario '{scenario}' is invalid:\n{source}")]
    InvalidRule {
        scenario: String,
        source: rewrite_rule::RuleError,
    },

    /// Assertion failed.
    #[error("assertion failed for step '{step}': {message}")]
    AssertionFailed { step: String, message: String },

    /// The async runtime could not be started.
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl ScenarioError {
    pub fn missing_rule(scenario: impl Into<String>) -> Self {
        Self::MissingRule {
            scenario: scenario.into(),
        }
    }

    pub fn invalid_rule(scenario: impl Into<String>, source: rewrite_rule::RuleError) -> Self {
        Self::InvalidRule {
            scenario: scenario.into(),
            source,
        }
    }

    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }
}
