//! Core projection engine for yearly investment returns
//!
//! Numeric contract: the engine validates nothing and never fails. Negative
//! or oversized percentages flow straight through IEEE-754 arithmetic, so
//! extreme inputs surface as `inf` or `NaN` in the output rather than as
//! errors. Zero or negative `years` yields empty series.

use crate::portfolio::{InvestmentInput, PortfolioParameters};
use super::state::InvestmentState;
use super::results::{InvestmentResult, ProjectionResult};

/// Configuration shared by every investment in a projection run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Total capital split across investments by allocation percent
    pub total_amount: f64,

    /// Rate applied to each investment's base at the end of every year
    pub annual_increase_percent: f64,

    /// Number of years to project
    pub years: i32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            total_amount: 0.0,
            annual_increase_percent: 0.0,
            years: 10,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run projection for a single investment
    pub fn project_investment(&self, investment: &InvestmentInput) -> InvestmentResult {
        let mut result = InvestmentResult::new(investment.name.clone());
        let mut state = InvestmentState::from_investment(investment, self.config.total_amount);
        let return_factor = investment.return_factor();

        for _year in 1..=self.config.years {
            state.advance_year();

            let year_return = state.year_return(return_factor);
            result.add_year(year_return);
            state.cumulative_return += year_return;

            // Increase lands after this year's return is recorded
            state.apply_increase(self.config.annual_increase_percent);
        }

        result.cumulative_return = state.cumulative_return;
        result
    }

    /// Run projection for every investment, preserving input order
    pub fn project_all(&self, investments: &[InvestmentInput]) -> ProjectionResult {
        let mut result = ProjectionResult::new();

        for investment in investments {
            result.add_investment(self.project_investment(investment));
        }

        result
    }
}

/// Project a full parameter set
pub fn project(params: &PortfolioParameters) -> ProjectionResult {
    ProjectionEngine::new(params.config()).project_all(&params.investments)
}
