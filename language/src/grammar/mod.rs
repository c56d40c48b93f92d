//! Grammar rules for the rewrite language.
//!
//! Every rule is a function returning a fresh `Parser`; rules that refer to
//! themselves go through `lazy`.

mod expr;
mod path;
mod rule;

pub use expr::{assignment, boolean, expression, full_expression, function_call};
pub use path::{full_path, path, path_segment, query_param};
pub use rule::{parse_rule, parse_url_rewrite};

use rewrite_parser::{between, char, many, many1, map, satisfy, Parser};

pub(crate) fn is_variable_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// One or more of `[A-Za-z0-9_-]`.
pub fn variable() -> Parser<String> {
    map(
        many1(satisfy(|c, _| is_variable_char(c), Some("variable character"))),
        |chars| chars.into_iter().collect(),
    )
}

/// A parenthesized regex pattern. Ends at the first `)` not preceded by a
/// backslash; the enclosed text is kept verbatim.
pub fn pattern() -> Parser<String> {
    let body = map(
        many(satisfy(|c, prev| c != ')' || prev == Some('\\'), None)),
        |chars| chars.into_iter().collect::<String>(),
    );
    between(char('('), body, char(')'))
}
