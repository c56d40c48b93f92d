//! Compiled rewrite rules.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rewrite_language::{parse_rule, UrlRewriteRule};
use rewrite_pattern::{build, CompileOptions, CompiledPath};
use url::Url;

use crate::{EvalError, EvalResult, Evaluator, FunctionTable, RuleError, RuleResult};

/// A parsed rule with its source path compiled.
///
/// Immutable once built; evaluation only reads it, so one rule can serve
/// many concurrent evaluations.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    rule: UrlRewriteRule,
    source: CompiledPath,
}

impl RewriteRule {
    /// Parse and compile with default options.
    pub fn parse(source: &str) -> RuleResult<Self> {
        Self::parse_with(source, CompileOptions::default())
    }

    pub fn parse_with(source: &str, options: CompileOptions) -> RuleResult<Self> {
        let rule = parse_rule(source).map_err(|e| RuleError::parse(source, e))?;
        Self::new(rule, options)
    }

    /// Compile an already parsed rule.
    pub fn new(rule: UrlRewriteRule, options: CompileOptions) -> RuleResult<Self> {
        let source = CompiledPath::new(&rule.source, &options)?;
        Ok(Self { rule, source })
    }

    pub fn rule(&self) -> &UrlRewriteRule {
        &self.rule
    }

    pub fn compiled_source(&self) -> &CompiledPath {
        &self.source
    }

    pub fn matches(&self, url: &Url) -> bool {
        self.source.is_match(url)
    }

    /// Rewrite `url`: extract its variables, run the pipeline, and build the
    /// destination. Only the path and query are replaced; the origin is kept
    /// whatever the rendered path looks like.
    pub async fn evaluate(&self, url: &Url, functions: &FunctionTable) -> EvalResult<Url> {
        let mut bindings = match self.source.extract(url) {
            Some(bindings) if self.matches(url) => bindings,
            _ => {
                debug!("rejected {} for rule '{}'", url, self.rule);
                return Err(EvalError::no_match(url.as_str()));
            }
        };

        Evaluator::new(functions)
            .run(&self.rule.pipeline, &mut bindings)
            .await?;

        let target = build(&self.rule.destination, &bindings)?;
        let mut rewritten = url.clone();
        rewritten.set_path(&target.path);
        rewritten.set_query(target.query.as_deref());
        rewritten.set_fragment(None);
        debug!("rewrote {} to {}", url, rewritten);
        Ok(rewritten)
    }

    /// Parse `url` and rewrite it.
    pub async fn evaluate_str(&self, url: &str, functions: &FunctionTable) -> EvalResult<Url> {
        let url = Url::parse(url)?;
        self.evaluate(&url, functions).await
    }
}

impl FromStr for RewriteRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rule)
    }
}
