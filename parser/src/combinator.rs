//! Derived combinators.
//!
//! Everything here composes existing parsers; none of these read the input
//! directly. Backtracking is always to the caller's start position.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::error::ParseError;
use crate::parser::Parser;

/// Repeat `parser` until it fails or succeeds without consuming input.
///
/// Never fails. The returned position is the end of the last repetition that
/// made progress.
pub fn many<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |input, start| {
        let mut position = start;
        let mut items = Vec::new();
        loop {
            match parser.parse(input, position) {
                (end, Ok(item)) if end != position => {
                    items.push(item);
                    position = end;
                }
                _ => return (position, Ok(items)),
            }
        }
    })
}

/// Like [`many`] but requires at least one match.
///
/// Zero matches yields a generic "at least one match" error at the start,
/// discarding the inner parser's own error detail.
pub fn many1<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    let rest = many(parser.clone());
    Parser::new(move |input, start| match parser.parse(input, start) {
        (end, Err(_)) if end == start => (start, Err(ParseError::expected_at_least_one(start))),
        (end, Err(error)) => (end, Err(error)),
        (end, Ok(first)) => {
            let (end, outcome) = rest.parse(input, end);
            let mut items = vec![first];
            items.extend(outcome.unwrap_or_default());
            (end, Ok(items))
        }
    })
}

/// Run `parser` and discard its value.
pub fn skip<T: 'static>(parser: Parser<T>) -> Parser<()> {
    Parser::new(move |input, start| {
        let (end, outcome) = parser.parse(input, start);
        (end, outcome.map(|_| ()))
    })
}

/// Repeat `parser` and discard the values. Never fails.
pub fn skip_many<T: 'static>(parser: Parser<T>) -> Parser<()> {
    skip(many(parser))
}

/// Build the next parser from the result of the previous one (monadic bind).
pub fn chain<T, U, F>(parser: Parser<T>, f: F) -> Parser<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Parser<U> + Send + Sync + 'static,
{
    Parser::new(move |input, start| match parser.parse(input, start) {
        (end, Ok(value)) => f(value).parse(input, end),
        (end, Err(error)) => (end, Err(error)),
    })
}

/// Transform a success value.
///
/// A failure keeps its error but reports the *start* position, so a mapped
/// parser behaves as one atomic unit when backtracking.
pub fn map<T, U, F>(parser: Parser<T>, f: F) -> Parser<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    Parser::new(move |input, start| match parser.parse(input, start) {
        (end, Ok(value)) => (end, Ok(f(value))),
        (_, Err(error)) => (start, Err(error)),
    })
}

/// Try each alternative from the original position; first success wins.
///
/// When all fail the result is a detail-free "no choice matched" error.
pub fn choice<T, I>(parsers: I) -> Parser<T>
where
    T: 'static,
    I: IntoIterator<Item = Parser<T>>,
{
    let parsers: Vec<Parser<T>> = parsers.into_iter().collect();
    Parser::new(move |input, start| {
        for parser in &parsers {
            if let (end, Ok(value)) = parser.parse(input, start) {
                return (end, Ok(value));
            }
        }
        (start, Err(ParseError::no_choice(start)))
    })
}

/// Try `parser`; on failure succeed with `None` at the original position.
pub fn optional<T: 'static>(parser: Parser<T>) -> Parser<Option<T>> {
    Parser::new(move |input, start| match parser.parse(input, start) {
        (end, Ok(value)) => (end, Ok(Some(value))),
        (_, Err(_)) => (start, Ok(None)),
    })
}

/// Run `parser` without consuming input.
pub fn peek<T: 'static>(parser: Parser<T>) -> Parser<T> {
    Parser::new(move |input, start| (start, parser.parse(input, start).1))
}

/// `open`, then `parser`, then `close`; keeps only `parser`'s value.
pub fn between<O, T, C>(open: Parser<O>, parser: Parser<T>, close: Parser<C>) -> Parser<T>
where
    O: 'static,
    T: 'static,
    C: 'static,
{
    map(sequence((open, parser, close)), |(_, value, _)| value)
}

/// Zero or more `parser` matches separated by `separator`.
///
/// A trailing separator that is not followed by an item is not consumed.
pub fn separated_by<T, S>(parser: Parser<T>, separator: Parser<S>) -> Parser<Vec<T>>
where
    T: 'static,
    S: 'static,
{
    Parser::new(move |input, start| {
        let mut items = Vec::new();
        let mut position = start;
        let mut committed = start;
        loop {
            match parser.parse(input, position) {
                (end, Ok(item)) => {
                    items.push(item);
                    committed = end;
                }
                (_, Err(_)) => return (committed, Ok(items)),
            }
            match separator.parse(input, committed) {
                (end, Ok(_)) if end != committed => position = end,
                _ => return (committed, Ok(items)),
            }
        }
    })
}

/// Defer building a parser until it is first applied.
///
/// Mutually recursive grammar rules reference each other through `lazy` so
/// that constructing the grammar terminates. The built parser is cached.
pub fn lazy<T, F>(build: F) -> Parser<T>
where
    T: 'static,
    F: Fn() -> Parser<T> + Send + Sync + 'static,
{
    let cell: Arc<OnceCell<Parser<T>>> = Arc::new(OnceCell::new());
    Parser::new(move |input, start| cell.get_or_init(&build).parse(input, start))
}

/// A tuple of parsers that can run in order.
pub trait Sequence {
    type Output;

    fn into_parser(self) -> Parser<Self::Output>;
}

/// Run parsers in order, threading the position.
///
/// On the first failure the failing parser's position and error are
/// returned and earlier results are discarded.
pub fn sequence<S: Sequence>(parsers: S) -> Parser<S::Output> {
    parsers.into_parser()
}

macro_rules! impl_sequence {
    ($($parser:ident : $ty:ident),+) => {
        impl<$($ty: 'static),+> Sequence for ($(Parser<$ty>,)+) {
            type Output = ($($ty,)+);

            fn into_parser(self) -> Parser<Self::Output> {
                let ($($parser,)+) = self;
                Parser::new(move |input, start| {
                    let position = start;
                    $(
                        let (position, $parser) = match $parser.parse(input, position) {
                            (end, Ok(value)) => (end, value),
                            (end, Err(error)) => return (end, Err(error)),
                        };
                    )+
                    (position, Ok(($($parser,)+)))
                })
            }
        }
    };
}

impl_sequence!(a: A, b: B);
impl_sequence!(a: A, b: B, c: C);
impl_sequence!(a: A, b: B, c: C, d: D);
impl_sequence!(a: A, b: B, c: C, d: D, e: E);
impl_sequence!(a: A, b: B, c: C, d: D, e: E, f: F);
impl_sequence!(a: A, b: B, c: C, d: D, e: E, f: F, g: G);
impl_sequence!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H);
