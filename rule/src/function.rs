//! Functions callable from rule pipelines.

use std::collections::HashMap;
use std::fmt;
use std::future::{self, Future};
use std::pin::Pin;
use std::sync::Arc;

use rewrite_language::Literal;
use thiserror::Error;

/// Failure reported by a pipeline function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FunctionError {
    pub message: String,
}

impl FunctionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The pending result of a function call.
pub type FunctionFuture = Pin<Box<dyn Future<Output = Result<Literal, FunctionError>> + Send>>;

/// A function taking evaluated arguments and producing one literal.
pub type Function = Arc<dyn Fn(Vec<Literal>) -> FunctionFuture + Send + Sync>;

/// Name-to-function mapping handed to the evaluator.
#[derive(Clone, Default)]
pub struct FunctionTable {
    functions: HashMap<String, Function>,
}

impl FunctionTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding the built-in functions (`concat`).
    pub fn defaults() -> Self {
        let mut table = Self::new();
        table.insert_sync("concat", concat);
        table
    }

    /// Register an async function, replacing any function with the same name.
    pub fn insert<F, Fut>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(Vec<Literal>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Literal, FunctionError>> + Send + 'static,
    {
        let function: Function =
            Arc::new(move |args: Vec<Literal>| -> FunctionFuture { Box::pin(function(args)) });
        self.functions.insert(name.into(), function);
    }

    /// Register a plain function.
    pub fn insert_sync<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(Vec<Literal>) -> Result<Literal, FunctionError> + Send + Sync + 'static,
    {
        let function: Function = Arc::new(move |args: Vec<Literal>| -> FunctionFuture {
            Box::pin(future::ready(function(args)))
        });
        self.functions.insert(name.into(), function);
    }

    pub fn get(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for FunctionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionTable")
            .field("functions", &self.names())
            .finish()
    }
}

/// Concatenate the textual rendering of two or more arguments.
pub fn concat(args: Vec<Literal>) -> Result<Literal, FunctionError> {
    if args.len() < 2 {
        return Err(FunctionError::new("concat requires at least two arguments"));
    }
    Ok(Literal::String(args.iter().map(Literal::to_text).collect()))
}
