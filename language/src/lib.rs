//! Rewrite Language
//!
//! The URL rewrite rule language, built on `rewrite-parser`:
//! - AST types for expressions, path segments, queries, paths and rules
//! - Grammar rules for paths, query parameters, expressions and full rules
//! - `parse_rule`, the full-consumption entry point
//! - `Display` impls that serialize back to rule source

mod ast;
mod grammar;

pub use ast::*;
pub use grammar::{
    assignment, boolean, expression, full_expression, full_path, function_call, parse_rule,
    parse_url_rewrite, path, path_segment, pattern, query_param, variable,
};
pub use rewrite_parser::ParseError;
