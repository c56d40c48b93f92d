//! Scenario runner.

use rewrite_rule::RewriteRule;

use crate::error::{ScenarioError, ScenarioResult};
use crate::scenario::Scenario;

/// Runs a scenario's steps against its compiled rule.
pub struct Runner<'s> {
    scenario: &'s Scenario,
    rule: RewriteRule,
}

impl<'s> Runner<'s> {
    /// Parse and compile the scenario's rule.
    pub fn new(scenario: &'s Scenario) -> ScenarioResult<Self> {
        let source = scenario
            .rule_source()
            .ok_or_else(|| ScenarioError::missing_rule(scenario.name()))?;
        let rule = RewriteRule::parse_with(source, scenario.compile_options())
            .map_err(|e| ScenarioError::invalid_rule(scenario.name(), e))?;
        Ok(Self { scenario, rule })
    }

    /// Evaluate every step in order, stopping at the first failed assertion.
    pub async fn run(&self) -> ScenarioResult<()> {
        for step in self.scenario.steps() {
            let result = self
                .rule
                .evaluate_str(&step.input, self.scenario.functions())
                .await;
            step.assertion.verify(&step.input, &result)?;
        }
        Ok(())
    }
}
