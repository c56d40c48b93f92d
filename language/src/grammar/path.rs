//! Path patterns and query constraints.

use rewrite_parser::{char, choice, many, many1, map, optional, satisfy, sequence, spaces, string, Parser};

use super::{pattern, variable};
use crate::ast::{Path, PathSegment, Quantifier, Query, QueryTarget, StringSegment, Variable, VariableSegment};

/// What may follow a path variable's name.
enum Modifier {
    Quantifier(Quantifier),
    Pattern(String),
}

fn is_unescaped_colon(c: char, prev: Option<char>) -> bool {
    c == ':' && prev != Some('\\')
}

fn path_text() -> Parser<PathSegment> {
    map(
        many(satisfy(
            |c, prev| c != ' ' && c != '/' && !is_unescaped_colon(c, prev),
            Some("path character"),
        )),
        |chars| PathSegment::text(chars.into_iter().collect::<String>()),
    )
}

fn quantifier(symbol: char, quantifier: Quantifier) -> Parser<Modifier> {
    map(char(symbol), move |_| Modifier::Quantifier(quantifier))
}

fn modifier() -> Parser<Modifier> {
    choice([
        quantifier('+', Quantifier::OneOrMore),
        quantifier('?', Quantifier::Optional),
        quantifier('*', Quantifier::ZeroOrMore),
        map(pattern(), Modifier::Pattern),
    ])
}

fn path_variable() -> Parser<PathSegment> {
    map(
        sequence((
            satisfy(is_unescaped_colon, Some(":")),
            variable(),
            optional(modifier()),
        )),
        |(_, name, modifier)| {
            let segment = VariableSegment::new(name);
            PathSegment::Variable(match modifier {
                Some(Modifier::Quantifier(quantifier)) => segment.with_quantifier(quantifier),
                Some(Modifier::Pattern(pattern)) => segment.with_pattern(pattern),
                None => segment,
            })
        },
    )
}

/// Collapse the runs following one `/` into a single segment.
fn join_runs(mut runs: Vec<PathSegment>) -> PathSegment {
    match runs.len() {
        0 => PathSegment::String(StringSegment::new("")),
        1 => runs.remove(0),
        _ => {
            for run in runs.iter_mut().skip(1) {
                run.set_prefixed(false);
            }
            PathSegment::Complex(runs)
        }
    }
}

/// `/` followed by literal text and variables.
pub fn path_segment() -> Parser<PathSegment> {
    map(
        sequence((char('/'), many(choice([path_variable(), path_text()])))),
        |(_, runs)| join_runs(runs),
    )
}

pub fn path() -> Parser<Vec<PathSegment>> {
    many1(path_segment())
}

/// `??name=literal`, `??name=:variable` or `??name=:variable(pattern)`.
pub fn query_param() -> Parser<Query> {
    let bound = map(
        sequence((char(':'), variable(), optional(pattern()))),
        |(_, name, pattern)| (QueryTarget::Variable(Variable::new(name)), pattern),
    );
    let literal = map(variable(), |value| (QueryTarget::Literal(value), None));
    map(
        sequence((string("??"), variable(), char('='), choice([bound, literal]))),
        |(_, name, _, (target, pattern))| Query {
            name,
            target,
            pattern,
        },
    )
}

/// A path followed by space-separated query constraints.
pub fn full_path() -> Parser<Path> {
    let query = map(sequence((spaces(), query_param())), |(_, query)| query);
    map(sequence((path(), many(query))), |(segments, queries)| {
        Path::new(segments, queries)
    })
}
