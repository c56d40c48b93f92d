//! Text-level helpers built on the character parsers.

use crate::chars::{alpha_num, char, digit, letter, satisfy, whitespace};
use crate::combinator::{between, many, many1, map, sequence};
use crate::error::ParseError;
use crate::parser::Parser;

/// One or more decimal digits as a non-negative integer.
pub fn number() -> Parser<i64> {
    let digits = many1(digit());
    Parser::new(move |input, start| match digits.parse(input, start) {
        (end, Ok(digits)) => match digits.into_iter().collect::<String>().parse::<i64>() {
            Ok(value) => (end, Ok(value)),
            Err(_) => (start, Err(ParseError::number_out_of_range(start))),
        },
        (end, Err(error)) => (end, Err(error)),
    })
}

/// A letter followed by any number of alphanumeric characters.
pub fn word() -> Parser<String> {
    map(sequence((letter(), many(alpha_num()))), |(first, rest)| {
        std::iter::once(first).chain(rest).collect()
    })
}

/// Text between two `"`.
///
/// A `"` preceded by a backslash does not terminate the literal; the
/// backslash is kept in the output.
pub fn string_literal() -> Parser<String> {
    let body = map(
        many(satisfy(|c, prev| c != '"' || prev == Some('\\'), None)),
        |chars| chars.into_iter().collect::<String>(),
    );
    between(char('"'), body, char('"'))
}

/// Zero or more whitespace characters. Never fails.
pub fn spaces() -> Parser<String> {
    map(many(whitespace()), |chars| chars.into_iter().collect())
}
