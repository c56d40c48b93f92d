//! Pipeline expressions.

use rewrite_parser::{
    char, choice, lazy, map, number, separated_by, sequence, spaces, string, string_literal, Parser,
};

use super::variable;
use crate::ast::{Assignment, Expression, FunctionCall, Literal, Variable};

pub fn boolean() -> Parser<Expression> {
    choice([
        map(string("true"), |_| Expression::boolean(true)),
        map(string("false"), |_| Expression::boolean(false)),
    ])
}

fn variable_reference() -> Parser<Expression> {
    map(sequence((char(':'), variable())), |(_, name)| {
        Expression::Variable(Variable::new(name))
    })
}

/// A literal, a variable reference or a function call.
pub fn expression() -> Parser<Expression> {
    choice([
        map(string_literal(), |s| Expression::Literal(Literal::String(s))),
        map(number(), |n| Expression::Literal(Literal::Number(n))),
        boolean(),
        variable_reference(),
        lazy(|| map(function_call(), Expression::FunctionCall)),
    ])
}

/// `name(arg, ...)`. Spaces are allowed around arguments.
pub fn function_call() -> Parser<FunctionCall> {
    let separator = sequence((spaces(), char(','), spaces()));
    map(
        sequence((
            variable(),
            char('('),
            spaces(),
            separated_by(expression(), separator),
            spaces(),
            char(')'),
        )),
        |(name, _, _, args, _, _)| FunctionCall { name, args },
    )
}

/// `:target <- expression`
pub fn assignment() -> Parser<Assignment> {
    map(
        sequence((char(':'), variable(), spaces(), string("<-"), spaces(), expression())),
        |(_, name, _, _, _, value)| Assignment {
            target: Variable::new(name),
            value: Box::new(value),
        },
    )
}

/// An assignment or a bare expression.
pub fn full_expression() -> Parser<Expression> {
    choice([map(assignment(), Expression::Assignment), expression()])
}
