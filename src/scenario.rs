//! Scenario runner for repeated projections of one portfolio
//!
//! Holds a base parameter set and reruns it with selected fields replaced,
//! e.g. to compare several annual increase rates side by side.

use crate::PortfolioParameters;
use crate::projection::{project, ProjectionResult};

/// Fields to replace on the base parameters; `None` keeps the base value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioOverrides {
    pub total_amount: Option<f64>,
    pub annual_increase_percent: Option<f64>,
    pub years: Option<i32>,
}

impl ScenarioOverrides {
    /// Apply the overrides to a copy of `base`
    pub fn apply(&self, base: &PortfolioParameters) -> PortfolioParameters {
        PortfolioParameters {
            total_amount: self.total_amount.unwrap_or(base.total_amount),
            annual_increase_percent: self
                .annual_increase_percent
                .unwrap_or(base.annual_increase_percent),
            years: self.years.unwrap_or(base.years),
            investments: base.investments.clone(),
        }
    }
}

/// Runs projections against a fixed base portfolio
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(params);
///
/// for result in runner.increase_sweep(&[0.0, 2.5, 5.0]) {
///     println!("{}", result.total_projected_return);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: PortfolioParameters,
}

impl ScenarioRunner {
    pub fn new(base: PortfolioParameters) -> Self {
        Self { base }
    }

    /// Run the base parameters unchanged
    pub fn run(&self) -> ProjectionResult {
        project(&self.base)
    }

    /// Run a single scenario
    pub fn run_with(&self, overrides: &ScenarioOverrides) -> ProjectionResult {
        project(&overrides.apply(&self.base))
    }

    /// Run several scenarios, results in the same order as `scenarios`
    pub fn run_scenarios(&self, scenarios: &[ScenarioOverrides]) -> Vec<ProjectionResult> {
        log::debug!(
            "Running {} scenarios over {} investments",
            scenarios.len(),
            self.base.investments.len()
        );
        scenarios.iter().map(|s| self.run_with(s)).collect()
    }

    /// One projection per annual increase rate
    pub fn increase_sweep(&self, rates: &[f64]) -> Vec<ProjectionResult> {
        let scenarios: Vec<_> = rates
            .iter()
            .map(|&rate| ScenarioOverrides {
                annual_increase_percent: Some(rate),
                ..Default::default()
            })
            .collect();
        self.run_scenarios(&scenarios)
    }

    /// Get reference to the base parameters
    pub fn base(&self) -> &PortfolioParameters {
        &self.base
    }
}
