//! Character-level parsers.
//!
//! `satisfy` is the only primitive that touches the input; every character
//! class here is `satisfy` with a predicate and an expected label.

use crate::error::ParseError;
use crate::parser::Parser;

/// Consume one character if `predicate(current, previous)` holds.
///
/// `previous` is the character just before the current position, or `None`
/// at the start of the input. On failure the position is left unchanged.
pub fn satisfy<F>(predicate: F, expected: Option<&str>) -> Parser<char>
where
    F: Fn(char, Option<char>) -> bool + Send + Sync + 'static,
{
    let expected = expected.map(str::to_string);
    Parser::new(move |input, position| {
        let Some(current) = input.get(position..).and_then(|rest| rest.chars().next()) else {
            return (position, Err(ParseError::unexpected_eof(position)));
        };
        let previous = input[..position].chars().next_back();
        if predicate(current, previous) {
            (position + current.len_utf8(), Ok(current))
        } else {
            (
                position,
                Err(ParseError::unexpected_char(
                    current,
                    position,
                    expected.as_deref(),
                )),
            )
        }
    })
}

pub fn any_char() -> Parser<char> {
    satisfy(|_, _| true, None)
}

pub fn space() -> Parser<char> {
    satisfy(|c, _| c == ' ', Some("space"))
}

pub fn newline() -> Parser<char> {
    satisfy(|c, _| c == '\n', Some("new line"))
}

pub fn tab() -> Parser<char> {
    satisfy(|c, _| c == '\t', Some("tab"))
}

pub fn whitespace() -> Parser<char> {
    satisfy(|c, _| matches!(c, ' ' | '\t' | '\n'), Some("whitespace"))
}

/// Match exactly `expected`.
pub fn char(expected: char) -> Parser<char> {
    let label = expected.to_string();
    satisfy(move |c, _| c == expected, Some(&label))
}

pub fn digit() -> Parser<char> {
    satisfy(|c, _| c.is_ascii_digit(), Some("any digit"))
}

pub fn letter() -> Parser<char> {
    satisfy(|c, _| c.is_ascii_alphabetic(), Some("any letter"))
}

pub fn upper() -> Parser<char> {
    satisfy(|c, _| c.is_ascii_uppercase(), Some("any uppercase letter"))
}

pub fn lower() -> Parser<char> {
    satisfy(|c, _| c.is_ascii_lowercase(), Some("any lowercase letter"))
}

pub fn alpha_num() -> Parser<char> {
    satisfy(
        |c, _| c.is_ascii_alphanumeric(),
        Some("any alphanumeric character"),
    )
}

pub fn one_of(chars: &str) -> Parser<char> {
    let label = format!("one of {}", chars);
    let chars = chars.to_string();
    satisfy(move |c, _| chars.contains(c), Some(&label))
}

pub fn none_of(chars: &str) -> Parser<char> {
    let label = format!("none of {}", chars);
    let chars = chars.to_string();
    satisfy(move |c, _| !chars.contains(c), Some(&label))
}

/// Match `literal` character by character.
///
/// Fails at the first mismatching offset, reporting that offset. The
/// reported position on failure is informational; no input is committed.
pub fn string(literal: &str) -> Parser<String> {
    let literal = literal.to_string();
    Parser::new(move |input, start| {
        let mut position = start;
        for expected in literal.chars() {
            let Some(found) = input.get(position..).and_then(|rest| rest.chars().next()) else {
                return (position, Err(ParseError::unexpected_eof(position)));
            };
            if found != expected {
                return (
                    position,
                    Err(ParseError::unexpected_char(found, position, Some(&literal))),
                );
            }
            position += found.len_utf8();
        }
        (position, Ok(literal.clone()))
    })
}
