//! Destination template building.

use std::fmt;

use rewrite_core::Value;
use rewrite_language::{Path, PathSegment, Quantifier, QueryTarget, VariableSegment};
use url::form_urlencoded;

use crate::{Bindings, PatternError, PatternResult};

/// A rendered destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: String,
    /// Form-urlencoded, without the leading `?`. `None` when the
    /// destination declares no queries.
    pub query: Option<String>,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        Ok(())
    }
}

/// Render `path` with `bindings` into a path, plus a query string when the
/// path declares queries.
pub fn build(path: &Path, bindings: &Bindings) -> PatternResult<Target> {
    let mut out = String::new();
    for segment in &path.segments {
        render_segment(segment, bindings, &mut out)?;
    }

    let mut target = Target {
        path: out,
        query: None,
    };
    if !path.queries.is_empty() {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for q in &path.queries {
            match &q.target {
                QueryTarget::Literal(value) => {
                    query.append_pair(&q.name, value);
                }
                QueryTarget::Variable(variable) => match lookup(bindings, &variable.name)? {
                    Value::List(items) => {
                        for item in items {
                            query.append_pair(&q.name, item);
                        }
                    }
                    value => {
                        query.append_pair(&q.name, &value.to_string());
                    }
                },
            }
        }
        target.query = Some(query.finish());
    }

    Ok(target)
}

fn lookup<'b>(bindings: &'b Bindings, name: &str) -> PatternResult<&'b Value> {
    bindings
        .resolve(name)
        .ok_or_else(|| PatternError::unbound_variable(name))
}

fn render_segment(segment: &PathSegment, bindings: &Bindings, out: &mut String) -> PatternResult<()> {
    match segment {
        PathSegment::String(s) => {
            if s.prefixed {
                out.push('/');
            }
            out.push_str(&s.text);
        }
        PathSegment::Variable(v) => render_variable(v, bindings, out)?,
        PathSegment::Complex(runs) => {
            for run in runs {
                render_segment(run, bindings, out)?;
            }
        }
    }
    Ok(())
}

fn render_variable(segment: &VariableSegment, bindings: &Bindings, out: &mut String) -> PatternResult<()> {
    let value = lookup(bindings, segment.name())?;
    match value {
        Value::List(items) if segment.is_repeating() => {
            for item in items {
                out.push_str(segment.prefix());
                out.push_str(item);
            }
        }
        Value::List(_) => return Err(PatternError::list_in_scalar_segment(segment.name())),
        scalar if segment.is_repeating() => {
            return Err(PatternError::scalar_in_repeating_segment(
                segment.name(),
                scalar.to_string(),
            ))
        }
        Value::Text(text) if text.is_empty() && segment.quantifier == Some(Quantifier::Optional) => {}
        scalar => {
            out.push_str(segment.prefix());
            out.push_str(&scalar.to_string());
        }
    }
    Ok(())
}
