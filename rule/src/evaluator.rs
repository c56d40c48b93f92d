//! Pipeline evaluation.

use std::future::Future;
use std::pin::Pin;

use log::trace;
use rewrite_core::Value;
use rewrite_language::{Expression, Literal};
use rewrite_pattern::Bindings;

use crate::{EvalError, EvalResult, FunctionTable};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Evaluates pipeline expressions against a binding environment.
pub struct Evaluator<'f> {
    functions: &'f FunctionTable,
}

impl<'f> Evaluator<'f> {
    pub fn new(functions: &'f FunctionTable) -> Self {
        Self { functions }
    }

    /// Evaluate every expression in order. Assignments are visible to the
    /// expressions after them.
    pub async fn run(&self, pipeline: &[Expression], bindings: &mut Bindings) -> EvalResult<()> {
        for expression in pipeline {
            self.eval(expression, bindings).await?;
        }
        Ok(())
    }

    /// Evaluate one expression to a literal.
    pub fn eval<'a>(
        &'a self,
        expression: &'a Expression,
        bindings: &'a mut Bindings,
    ) -> BoxFuture<'a, EvalResult<Literal>> {
        Box::pin(async move {
            match expression {
                Expression::Literal(literal) => Ok(literal.clone()),

                Expression::Variable(variable) => bindings
                    .resolve(&variable.name)
                    .cloned()
                    .map(Literal::from)
                    .ok_or_else(|| EvalError::unresolved_variable(&variable.name)),

                Expression::Assignment(assignment) => {
                    let value = self.eval(&assignment.value, bindings).await?;
                    trace!("assign {} <- {}", assignment.target, value);
                    bindings.insert(assignment.target.name.clone(), Value::from(value.clone()));
                    Ok(value)
                }

                Expression::FunctionCall(call) => {
                    let function = self
                        .functions
                        .get(&call.name)
                        .cloned()
                        .ok_or_else(|| EvalError::unknown_function(&call.name))?;

                    let mut args = Vec::with_capacity(call.args.len());
                    for arg in &call.args {
                        args.push(self.eval(arg, bindings).await?);
                    }

                    trace!("call {}({} args)", call.name, args.len());
                    function(args)
                        .await
                        .map_err(|e| EvalError::function_failed(&call.name, e))
                }
            }
        })
    }
}
