//! Rewrite Core Types
//!
//! Foundational types shared by the path compiler and the evaluator:
//! - The `Value` enum held by binding environments (text, list of text,
//!   number, boolean)
//! - The `values!` macro for building value maps

mod value;

pub use value::*;
