//! Source path compilation and matching.

use log::debug;
use regex_lite::{Captures, Regex};
use rewrite_core::Value;
use rewrite_language::{Path, PathSegment, Query, QueryTarget, VariableSegment};
use url::Url;

use crate::{Bindings, CompileOptions, PatternError, PatternResult};

/// A capture group in the derived regex.
#[derive(Debug, Clone)]
struct Group {
    name: String,
    variable: String,
    repeating: bool,
}

/// A query constraint, with its declared pattern compiled.
#[derive(Debug, Clone)]
enum QueryCheck {
    Literal {
        name: String,
        value: String,
    },
    Variable {
        name: String,
        variable: String,
        pattern: Regex,
    },
}

impl QueryCheck {
    fn compile(query: &Query) -> PatternResult<Self> {
        Ok(match &query.target {
            QueryTarget::Literal(value) => QueryCheck::Literal {
                name: query.name.clone(),
                value: value.clone(),
            },
            QueryTarget::Variable(variable) => QueryCheck::Variable {
                name: query.name.clone(),
                variable: variable.name.clone(),
                pattern: Regex::new(query.pattern())
                    .map_err(|e| PatternError::invalid_regex(query.pattern(), e))?,
            },
        })
    }

    fn name(&self) -> &str {
        match self {
            QueryCheck::Literal { name, .. } | QueryCheck::Variable { name, .. } => name,
        }
    }

    fn holds(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (_, None) => false,
            (QueryCheck::Literal { value: expected, .. }, Some(actual)) => expected == actual,
            (QueryCheck::Variable { pattern, .. }, Some(actual)) => {
                !actual.is_empty() && pattern.is_match(actual)
            }
        }
    }
}

/// A source path compiled for matching and extraction.
#[derive(Debug, Clone)]
pub struct CompiledPath {
    regex: Regex,
    groups: Vec<Group>,
    queries: Vec<QueryCheck>,
}

impl CompiledPath {
    pub fn new(path: &Path, options: &CompileOptions) -> PatternResult<Self> {
        let mut builder = RegexBuilder {
            options,
            source: String::from("^"),
            groups: Vec::new(),
        };
        for segment in &path.segments {
            builder.segment(segment);
        }
        builder.source.push('$');

        let regex = Regex::new(&builder.source)
            .map_err(|e| PatternError::invalid_regex(builder.source.clone(), e))?;
        let queries = path
            .queries
            .iter()
            .map(QueryCheck::compile)
            .collect::<PatternResult<Vec<_>>>()?;
        debug!("compiled path '{}' to /{}/", path, builder.source);

        Ok(Self {
            regex,
            groups: builder.groups,
            queries,
        })
    }

    /// The derived regular expression.
    pub fn regex_source(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the URL's path matches and every query constraint holds.
    pub fn is_match(&self, url: &Url) -> bool {
        self.regex.is_match(url.path())
            && self
                .queries
                .iter()
                .all(|query| query.holds(query_value(url, query.name()).as_deref()))
    }

    /// Bindings for every declared variable, or `None` if the path does not match.
    ///
    /// Query constraints are not checked here; variable queries whose
    /// parameter is missing bind empty text.
    pub fn extract(&self, url: &Url) -> Option<Bindings> {
        let captures = self.regex.captures(url.path())?;
        let mut bindings = Bindings::new();
        for group in &self.groups {
            bindings.insert(group.variable.clone(), group.value(&captures));
        }
        for query in &self.queries {
            if let QueryCheck::Variable { name, variable, .. } = query {
                let value = query_value(url, name).unwrap_or_default();
                bindings.insert(variable.clone(), Value::Text(value));
            }
        }
        Some(bindings)
    }
}

impl Group {
    fn value(&self, captures: &Captures<'_>) -> Value {
        match captures.name(&self.name) {
            Some(m) if self.repeating || m.as_str().contains('/') => Value::List(
                m.as_str()
                    .split('/')
                    .filter(|piece| !piece.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            Some(m) => Value::Text(m.as_str().to_string()),
            None if self.repeating => Value::List(Vec::new()),
            None => Value::Text(String::new()),
        }
    }
}

fn query_value(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

struct RegexBuilder<'o> {
    options: &'o CompileOptions,
    source: String,
    groups: Vec<Group>,
}

impl RegexBuilder<'_> {
    fn segment(&mut self, segment: &PathSegment) {
        match segment {
            PathSegment::String(s) => {
                let prefix = if s.prefixed { "/" } else { "" };
                self.source.push_str(prefix);
                self.source.push_str(&self.options.literal(&s.text));
            }
            PathSegment::Variable(v) => self.variable(v),
            PathSegment::Complex(runs) => runs.iter().for_each(|run| self.segment(run)),
        }
    }

    fn variable(&mut self, segment: &VariableSegment) {
        let name = group_name(segment.name(), self.groups.len());
        let prefix = segment.prefix();
        let pattern = segment.pattern();
        let emitted = match segment.quantifier {
            None => format!("{prefix}(?P<{name}>{pattern})"),
            Some(q) if !q.is_repeating() => format!("(?:{prefix}(?P<{name}>{pattern})){}", q.as_char()),
            Some(q) => format!("(?P<{name}>(?:{prefix}(?:{pattern})){})", q.as_char()),
        };
        self.source.push_str(&emitted);
        self.groups.push(Group {
            name,
            variable: segment.name().to_string(),
            repeating: segment.is_repeating(),
        });
    }
}

/// The variable name when it is a valid group name, otherwise positional.
fn group_name(variable: &str, index: usize) -> String {
    let mut chars = variable.chars();
    let valid_start = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        variable.to_string()
    } else {
        format!("__{index}")
    }
}
