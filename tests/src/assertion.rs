//! Assertion types and builders for verifying step results.

use rewrite_rule::{EvalError, EvalResult};
use url::Url;

use crate::error::{ScenarioError, ScenarioResult};

/// A complete assertion for one evaluated URL.
#[derive(Debug, Default)]
pub struct Assertion {
    // Success assertions
    pub url: Option<String>,
    pub path: Option<String>,
    pub query: Option<String>,

    // Failure assertions
    pub rejected: bool,
    pub error: Option<String>,
    pub error_pattern: Option<String>,
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    fn expects_failure(&self) -> bool {
        self.rejected || self.error.is_some() || self.error_pattern.is_some()
    }

    /// Verify the assertion against an evaluation result.
    pub fn verify(&self, step: &str, result: &EvalResult<Url>) -> ScenarioResult<()> {
        if self.expects_failure() {
            return self.verify_failure(step, result);
        }

        let url = result
            .as_ref()
            .map_err(|e| ScenarioError::assertion_failed(step, format!("evaluation failed: {}", e)))?;

        if let Some(ref expected) = self.url {
            if url.as_str() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected '{}', got '{}'", expected, url),
                ));
            }
        }

        if let Some(ref expected) = self.path {
            if url.path() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected path '{}', got '{}'", expected, url.path()),
                ));
            }
        }

        if let Some(ref expected) = self.query {
            if url.query() != Some(expected.as_str()) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected query '{}', got {:?}", expected, url.query()),
                ));
            }
        }

        Ok(())
    }

    fn verify_failure(&self, step: &str, result: &EvalResult<Url>) -> ScenarioResult<()> {
        let error = match result {
            Err(error) => error,
            Ok(url) => {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected failure, but rewrote to '{}'", url),
                ))
            }
        };

        if self.rejected && !matches!(error, EvalError::NoMatch { .. }) {
            return Err(ScenarioError::assertion_failed(
                step,
                format!("expected rejection, got: {}", error),
            ));
        }

        let message = error.to_string();

        if let Some(ref expected_error) = self.error {
            if !message.contains(expected_error) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error containing '{}', got: {}", expected_error, message),
                ));
            }
        }

        if let Some(ref pattern) = self.error_pattern {
            let re = regex_lite::Regex::new(pattern).map_err(|e| {
                ScenarioError::assertion_failed(step, format!("invalid regex pattern: {}", e))
            })?;
            if !re.is_match(&message) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error matching '{}', got: {}", pattern, message),
                ));
            }
        }

        Ok(())
    }
}

/// Builder for creating assertions fluently.
#[derive(Debug, Default)]
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect the full rewritten URL.
    pub fn url(mut self, expected: impl Into<String>) -> Self {
        self.assertion.url = Some(expected.into());
        self
    }

    /// Expect the rewritten path.
    pub fn path(mut self, expected: impl Into<String>) -> Self {
        self.assertion.path = Some(expected.into());
        self
    }

    /// Expect the rewritten query string (without `?`).
    pub fn query(mut self, expected: impl Into<String>) -> Self {
        self.assertion.query = Some(expected.into());
        self
    }

    /// Expect the URL not to match the rule.
    pub fn rejected(mut self) -> Self {
        self.assertion.rejected = true;
        self
    }

    /// Expect an error whose message contains `expected`.
    pub fn error(mut self, expected: impl Into<String>) -> Self {
        self.assertion.error = Some(expected.into());
        self
    }

    /// Expect an error whose message matches `pattern`.
    pub fn error_matching(mut self, pattern: impl Into<String>) -> Self {
        self.assertion.error_pattern = Some(pattern.into());
        self
    }

    pub fn build(self) -> Assertion {
        self.assertion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(s: &str) -> EvalResult<Url> {
        Ok(Url::parse(s).unwrap())
    }

    #[test]
    fn test_url_and_path() {
        let assertion = AssertionBuilder::new()
            .url("https://a.test/x?y=1")
            .path("/x")
            .query("y=1")
            .build();
        assert!(assertion.verify("s", &ok("https://a.test/x?y=1")).is_ok());
        assert!(assertion.verify("s", &ok("https://a.test/z")).is_err());
    }

    #[test]
    fn test_rejected() {
        let assertion = AssertionBuilder::new().rejected().build();
        assert!(assertion.verify("s", &Err(EvalError::no_match("u"))).is_ok());
        assert!(assertion
            .verify("s", &Err(EvalError::unknown_function("f")))
            .is_err());
        assert!(assertion.verify("s", &ok("https://a.test/")).is_err());
    }

    #[test]
    fn test_error_message() {
        let failure = Err(EvalError::unresolved_variable("y"));
        assert!(AssertionBuilder::new().error("not found").build().verify("s", &failure).is_ok());
        assert!(AssertionBuilder::new()
            .error_matching(r"^Variable :\w+ not found$")
            .build()
            .verify("s", &failure)
            .is_ok());
        assert!(AssertionBuilder::new().error("other").build().verify("s", &failure).is_err());
    }
}
