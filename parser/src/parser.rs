//! The parser value and the top-level drivers.

use std::fmt;
use std::sync::Arc;

use crate::error::{ParseError, ParseOutcome};

/// Result of applying a parser: the end position plus the outcome.
///
/// On failure the position is informational only; callers that backtrack
/// restart from their own start position.
pub type Step<T> = (usize, ParseOutcome<T>);

type RunFn<T> = dyn Fn(&str, usize) -> Step<T> + Send + Sync;

/// A pure mapping from `(input, start position)` to a [`Step`].
///
/// Parsers hold no mutable state: cloning is cheap (shared function) and the
/// same parser may be applied concurrently to different inputs.
pub struct Parser<T> {
    run: Arc<RunFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").field("run", &"<function>").finish()
    }
}

impl<T: 'static> Parser<T> {
    /// Wrap a parse function.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&str, usize) -> Step<T> + Send + Sync + 'static,
    {
        Self { run: Arc::new(run) }
    }

    /// Apply the parser to `input` starting at byte offset `position`.
    pub fn parse(&self, input: &str, position: usize) -> Step<T> {
        (self.run)(input, position)
    }

    /// Method form of [`crate::map`].
    pub fn map<U, F>(self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        crate::map(self, f)
    }

    /// Method form of [`crate::chain`].
    pub fn chain<U, F>(self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> Parser<U> + Send + Sync + 'static,
    {
        crate::chain(self, f)
    }
}

/// Apply `parser` to the whole of `input`.
///
/// Fails with the parser's own error when it fails, and with an
/// "unexpected end of parser" error when it succeeds without consuming
/// everything.
pub fn parse_full<T: 'static>(parser: &Parser<T>, input: &str) -> ParseOutcome<T> {
    let (end, outcome) = parser.parse(input, 0);
    let value = outcome?;
    if end == input.len() {
        Ok(value)
    } else {
        Err(ParseError::unexpected_end_of_parser(end))
    }
}

/// Apply `parser` to a prefix of `input`, returning the value and the
/// unconsumed suffix.
pub fn parse_with_remainder<'i, T: 'static>(
    parser: &Parser<T>,
    input: &'i str,
) -> ParseOutcome<(T, &'i str)> {
    let (end, outcome) = parser.parse(input, 0);
    let value = outcome?;
    Ok((value, input.get(end..).unwrap_or_default()))
}
