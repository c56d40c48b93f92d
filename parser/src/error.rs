//! Parser error types.

use std::fmt;

/// A parse error with the input position it was raised at.
///
/// `position` is a byte offset into the parsed input. Errors are immutable
/// once built; combinators such as `choice` and `optional` inspect and drop
/// them freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub position: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    /// The input ran out while a parser still expected a character.
    pub fn unexpected_eof(position: usize) -> Self {
        Self::new("Unexpected end of input", position)
    }

    /// A driver required full consumption but input was left over.
    pub fn unexpected_end_of_parser(consumed: usize) -> Self {
        Self::new(
            format!("Unexpected end of parser after {} characters", consumed),
            consumed,
        )
    }

    pub fn unexpected_char(found: char, position: usize, expected: Option<&str>) -> Self {
        let message = match expected {
            Some(expected) => format!(
                "Unexpected character '{}', expected '{}' at position {}",
                found, expected, position
            ),
            None => format!("Unexpected character '{}' at position {}", found, position),
        };
        Self::new(message, position)
    }

    /// Every alternative of a `choice` failed.
    pub fn no_choice(position: usize) -> Self {
        Self::new("No choice matched", position)
    }

    /// `many1` matched zero times.
    pub fn expected_at_least_one(position: usize) -> Self {
        Self::new(
            format!(
                "Unexpected input, expected at least one match at position {}",
                position
            ),
            position,
        )
    }

    pub fn number_out_of_range(position: usize) -> Self {
        Self::new(format!("Number out of range at position {}", position), position)
    }

    /// Render a two-line diagnostic: the first line of `input`, then a caret
    /// under the error position followed by the message.
    pub fn render(&self, input: &str) -> String {
        let line = input.split('\n').next().unwrap_or_default();
        let column = input
            .get(..self.position)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(self.position);
        format!(
            "{}\n{}^--- ParseError: {}",
            line,
            " ".repeat(column),
            self.message
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Outcome of a single parser application.
pub type ParseOutcome<T> = Result<T, ParseError>;
