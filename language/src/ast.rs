//! Abstract Syntax Tree types for the rewrite language.

use std::fmt;
use std::str::FromStr;

use rewrite_core::Value;
use rewrite_parser::ParseError;

/// Pattern used by a variable segment that declares none.
pub const DEFAULT_SEGMENT_PATTERN: &str = "[^/]+";

/// Pattern used by a query that declares none.
pub const DEFAULT_QUERY_PATTERN: &str = "[^&]+";

/// Separator every prefixed segment starts with.
pub const SEGMENT_PREFIX: &str = "/";

/// A named variable reference (`:name` in source).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ==================== EXPRESSIONS ====================

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Number(i64),
    String(String),
    Boolean(bool),
    /// Only produced at evaluation time, from list bindings. Rule source has
    /// no array syntax, so its `Display` form is for diagnostics and does not
    /// parse back.
    Array(Vec<String>),
}

impl Literal {
    /// Textual rendering used by functions such as `concat`.
    pub fn to_text(&self) -> String {
        self.to_value().to_string()
    }

    pub fn to_value(&self) -> Value {
        Value::from(self.clone())
    }
}

impl From<Value> for Literal {
    fn from(value: Value) -> Self {
        match value {
            Value::Text(s) => Literal::String(s),
            Value::List(items) => Literal::Array(items),
            Value::Number(n) => Literal::Number(n),
            Value::Bool(b) => Literal::Boolean(b),
        }
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Number(n) => Value::Number(n),
            Literal::String(s) => Value::Text(s),
            Literal::Boolean(b) => Value::Bool(b),
            Literal::Array(items) => Value::List(items),
        }
    }
}

/// An expression in a rewrite pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Literal(Literal),
    Variable(Variable),
    Assignment(Assignment),
    FunctionCall(FunctionCall),
}

/// `:target <- value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub target: Variable,
    pub value: Box<Expression>,
}

/// `name(arg, ...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expression>,
}

impl Expression {
    pub fn number(n: i64) -> Self {
        Expression::Literal(Literal::Number(n))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Expression::Literal(Literal::String(s.into()))
    }

    pub fn boolean(b: bool) -> Self {
        Expression::Literal(Literal::Boolean(b))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(Variable::new(name))
    }

    pub fn assign(target: impl Into<String>, value: Expression) -> Self {
        Expression::Assignment(Assignment {
            target: Variable::new(target),
            value: Box::new(value),
        })
    }

    pub fn call(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::FunctionCall(FunctionCall {
            name: name.into(),
            args,
        })
    }
}

// ==================== PATHS ====================

/// Repetition marker attached to a path variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `?`
    Optional,
    /// `+`
    OneOrMore,
    /// `*`
    ZeroOrMore,
}

impl Quantifier {
    pub fn as_char(self) -> char {
        match self {
            Quantifier::Optional => '?',
            Quantifier::OneOrMore => '+',
            Quantifier::ZeroOrMore => '*',
        }
    }

    /// Whether a variable with this quantifier binds a list.
    pub fn is_repeating(self) -> bool {
        matches!(self, Quantifier::OneOrMore | Quantifier::ZeroOrMore)
    }
}

/// Literal path text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSegment {
    pub text: String,
    pub prefixed: bool,
}

impl StringSegment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            prefixed: true,
        }
    }
}

/// A path variable (`:name`, `:name+`, `:name(pattern)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSegment {
    pub variable: Variable,
    pub quantifier: Option<Quantifier>,
    pub pattern: Option<String>,
    pub prefixed: bool,
}

impl VariableSegment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            variable: Variable::new(name),
            quantifier: None,
            pattern: None,
            prefixed: true,
        }
    }

    pub fn with_quantifier(mut self, quantifier: Quantifier) -> Self {
        self.quantifier = Some(quantifier);
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.variable.name
    }

    /// The declared pattern, or the default "one or more non-slash characters".
    pub fn pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or(DEFAULT_SEGMENT_PATTERN)
    }

    pub fn prefix(&self) -> &'static str {
        prefix_str(self.prefixed)
    }

    pub fn is_repeating(&self) -> bool {
        self.quantifier.is_some_and(Quantifier::is_repeating)
    }
}

/// One `/`-delimited unit of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    String(StringSegment),
    Variable(VariableSegment),
    /// Several runs sharing one leading slash; only the first is prefixed.
    Complex(Vec<PathSegment>),
}

impl PathSegment {
    pub fn text(text: impl Into<String>) -> Self {
        PathSegment::String(StringSegment::new(text))
    }

    pub fn variable(segment: VariableSegment) -> Self {
        PathSegment::Variable(segment)
    }

    pub fn prefixed(&self) -> bool {
        match self {
            PathSegment::String(s) => s.prefixed,
            PathSegment::Variable(v) => v.prefixed,
            PathSegment::Complex(runs) => runs.first().is_some_and(PathSegment::prefixed),
        }
    }

    pub fn set_prefixed(&mut self, prefixed: bool) {
        match self {
            PathSegment::String(s) => s.prefixed = prefixed,
            PathSegment::Variable(v) => v.prefixed = prefixed,
            PathSegment::Complex(runs) => {
                if let Some(first) = runs.first_mut() {
                    first.set_prefixed(prefixed);
                }
            }
        }
    }

    /// Same segment without its leading slash.
    pub fn unprefixed(mut self) -> Self {
        self.set_prefixed(false);
        self
    }

    /// Variable segments in order, including those nested in complex segments.
    pub fn variables(&self) -> Vec<&VariableSegment> {
        match self {
            PathSegment::String(_) => Vec::new(),
            PathSegment::Variable(v) => vec![v],
            PathSegment::Complex(runs) => runs.iter().flat_map(PathSegment::variables).collect(),
        }
    }
}

fn prefix_str(prefixed: bool) -> &'static str {
    if prefixed {
        SEGMENT_PREFIX
    } else {
        ""
    }
}

/// What a query parameter is compared against or bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTarget {
    /// Must equal the parameter exactly.
    Literal(String),
    /// Binds the parameter's value.
    Variable(Variable),
}

/// `??name=value` or `??name=:variable(pattern)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub name: String,
    pub target: QueryTarget,
    pub pattern: Option<String>,
}

impl Query {
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: QueryTarget::Literal(value.into()),
            pattern: None,
        }
    }

    pub fn variable(name: impl Into<String>, variable: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: QueryTarget::Variable(Variable::new(variable)),
            pattern: None,
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// The declared pattern, or the default "one or more non-ampersand characters".
    pub fn pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or(DEFAULT_QUERY_PATTERN)
    }
}

/// A path pattern with its query constraints.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    pub segments: Vec<PathSegment>,
    pub queries: Vec<Query>,
}

impl Path {
    pub fn new(segments: Vec<PathSegment>, queries: Vec<Query>) -> Self {
        Self { segments, queries }
    }

    /// Every variable segment in the path, in order.
    pub fn variables(&self) -> Vec<&VariableSegment> {
        self.segments.iter().flat_map(PathSegment::variables).collect()
    }
}

// ==================== RULE ====================

/// A parsed rewrite rule: match `source`, run `pipeline`, build `destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRewriteRule {
    pub source: Path,
    pub destination: Path,
    pub pipeline: Vec<Expression>,
}

impl FromStr for UrlRewriteRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_rule(s)
    }
}

// ==================== DISPLAY ====================

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.name)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "\"{}\"", s),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\"", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(literal) => write!(f, "{}", literal),
            Expression::Variable(variable) => write!(f, "{}", variable),
            Expression::Assignment(assignment) => {
                write!(f, "{} <- {}", assignment.target, assignment.value)
            }
            Expression::FunctionCall(call) => {
                write!(f, "{}(", call.name)?;
                for (i, arg) in call.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::String(s) => write!(f, "{}{}", prefix_str(s.prefixed), s.text),
            PathSegment::Variable(v) => {
                write!(f, "{}{}", v.prefix(), v.variable)?;
                if let Some(pattern) = &v.pattern {
                    write!(f, "({})", pattern)?;
                }
                if let Some(quantifier) = v.quantifier {
                    write!(f, "{}", quantifier.as_char())?;
                }
                Ok(())
            }
            PathSegment::Complex(runs) => runs.iter().try_for_each(|run| write!(f, "{}", run)),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "??{}=", self.name)?;
        match &self.target {
            QueryTarget::Literal(value) => write!(f, "{}", value),
            QueryTarget::Variable(variable) => {
                write!(f, "{}", variable)?;
                if let Some(pattern) = &self.pattern {
                    write!(f, "({})", pattern)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}", segment)?;
        }
        for query in &self.queries {
            write!(f, " {}", query)?;
        }
        Ok(())
    }
}

impl fmt::Display for UrlRewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | ", self.source)?;
        if !self.pipeline.is_empty() {
            for (i, expression) in self.pipeline.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", expression)?;
            }
            write!(f, " | ")?;
        }
        write!(f, "{}", self.destination)
    }
}
