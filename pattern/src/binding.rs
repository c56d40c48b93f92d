//! Variable bindings extracted from URLs and written by pipelines.

use rewrite_core::{Value, Values};
use rewrite_language::Variable;
use std::collections::HashMap;

/// A binding value (a concrete value, or a reference to another variable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// A concrete value.
    Value(Value),
    /// Stands for whatever the named variable is bound to.
    Variable(Variable),
}

impl From<Value> for Binding {
    fn from(v: Value) -> Self {
        Binding::Value(v)
    }
}

impl From<Variable> for Binding {
    fn from(v: Variable) -> Self {
        Binding::Variable(v)
    }
}

impl From<&str> for Binding {
    fn from(s: &str) -> Self {
        Binding::Value(Value::from(s))
    }
}

impl From<String> for Binding {
    fn from(s: String) -> Self {
        Binding::Value(Value::from(s))
    }
}

impl From<Vec<String>> for Binding {
    fn from(items: Vec<String>) -> Self {
        Binding::Value(Value::List(items))
    }
}

/// A set of variable bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    map: HashMap<String, Binding>,
}

impl Bindings {
    /// Create new empty bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create bindings with a single entry.
    pub fn with(name: impl Into<String>, binding: impl Into<Binding>) -> Self {
        let mut bindings = Self::new();
        bindings.insert(name, binding);
        bindings
    }

    /// Insert a binding, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, binding: impl Into<Binding>) {
        self.map.insert(name.into(), binding.into());
    }

    /// Get a binding by name.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.map.get(name)
    }

    /// Follow variable references until a value is reached.
    ///
    /// Gives up after as many hops as there are bindings, so reference
    /// cycles resolve to `None`.
    pub fn resolve(&self, name: &str) -> Option<&Value> {
        let mut current = name;
        for _ in 0..=self.map.len() {
            match self.get(current)? {
                Binding::Value(value) => return Some(value),
                Binding::Variable(next) => current = &next.name,
            }
        }
        None
    }

    /// Get all variable names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(|s| s.as_str())
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Every binding that resolves to a value.
    pub fn to_values(&self) -> Values {
        self.names()
            .filter_map(|name| Some((name.to_string(), self.resolve(name)?.clone())))
            .collect()
    }
}

impl From<Values> for Bindings {
    fn from(values: Values) -> Self {
        Self {
            map: values
                .into_iter()
                .map(|(name, value)| (name, Binding::Value(value)))
                .collect(),
        }
    }
}
