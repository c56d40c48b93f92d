//! Complete rewrite rules.

use once_cell::sync::Lazy;
use rewrite_parser::{
    char, choice, many, map, parse_full, peek, sequence, spaces, ParseOutcome, Parser,
};

use super::expr::full_expression;
use super::path::full_path;
use crate::ast::{Expression, UrlRewriteRule};

static GRAMMAR: Lazy<Parser<UrlRewriteRule>> = Lazy::new(parse_url_rewrite);

/// `| expr` followed by `, expr` repeats.
fn pipeline_stage() -> Parser<Vec<Expression>> {
    let rest = map(
        sequence((spaces(), char(','), spaces(), full_expression())),
        |(_, _, _, expression)| expression,
    );
    map(
        sequence((spaces(), char('|'), spaces(), full_expression(), many(rest))),
        |(_, _, _, first, rest)| std::iter::once(first).chain(rest).collect(),
    )
}

/// A `|` directly followed by another `|`: a stage with no expressions.
fn empty_stage() -> Parser<Vec<Expression>> {
    map(
        sequence((spaces(), char('|'), spaces(), peek(char('|')))),
        |_| Vec::new(),
    )
}

/// `source [| expressions ...] | destination`, with surrounding whitespace.
pub fn parse_url_rewrite() -> Parser<UrlRewriteRule> {
    map(
        sequence((
            spaces(),
            full_path(),
            many(choice([pipeline_stage(), empty_stage()])),
            spaces(),
            char('|'),
            spaces(),
            full_path(),
            spaces(),
        )),
        |(_, source, stages, _, _, _, destination, _)| UrlRewriteRule {
            source,
            destination,
            pipeline: stages.into_iter().flatten().collect(),
        },
    )
}

/// Parse a whole rule. Leftover input is an error.
pub fn parse_rule(source: &str) -> ParseOutcome<UrlRewriteRule> {
    parse_full(&GRAMMAR, source)
}
