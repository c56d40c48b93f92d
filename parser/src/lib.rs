//! Rewrite Parser
//!
//! A small parser-combinator engine for building recursive-descent text
//! parsers:
//! - `satisfy`, the single character primitive, and the character classes built on it
//! - Derived combinators (repetition, sequencing, choice, mapping, binding)
//! - Text helpers (`number`, `word`, `string_literal`, `spaces`)
//! - Drivers that require full consumption or hand back the remainder
//! - Error handling with position information and caret diagnostics

mod chars;
mod combinator;
mod error;
mod parser;
mod text;

pub use chars::*;
pub use combinator::*;
pub use error::*;
pub use parser::{parse_full, parse_with_remainder, Parser, Step};
pub use text::*;
