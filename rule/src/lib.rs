//! Rewrite Rule
//!
//! Evaluate rewrite rules against URLs.
//!
//! Responsibilities:
//! - Parse and compile rules
//! - Run expression pipelines against extracted bindings
//! - Call injected (possibly async) functions
//! - Build the rewritten URL

mod error;
mod evaluator;
mod function;
mod rule;

pub use error::{EvalError, EvalResult, RuleError, RuleResult};
pub use evaluator::Evaluator;
pub use function::{concat, Function, FunctionError, FunctionFuture, FunctionTable};
pub use rewrite_pattern::{Binding, Bindings, CompileOptions};
pub use rule::RewriteRule;
