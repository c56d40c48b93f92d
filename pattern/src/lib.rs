//! Rewrite Pattern
//!
//! Compile rule paths, match URLs, extract and render variables.
//!
//! Responsibilities:
//! - Derive an anchored regular expression from a source path
//! - Check query constraints against a URL
//! - Extract variable bindings from a matching URL
//! - Build destination paths and queries from bindings

mod binding;
mod compile;
mod error;
mod options;
mod template;

pub use binding::{Binding, Bindings};
pub use compile::CompiledPath;
pub use error::{PatternError, PatternResult};
pub use options::CompileOptions;
pub use template::{build, Target};
