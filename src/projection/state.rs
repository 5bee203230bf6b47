//! Running state for one investment during a projection

use crate::portfolio::InvestmentInput;

/// State of a single investment at a point in the year loop
///
/// Owned by one projection call; nothing here is shared across investments
/// or across calls.
#[derive(Debug, Clone)]
pub struct InvestmentState {
    /// Current projection year (1-indexed, 0 before the first advance)
    pub year: i32,

    /// Base amount that the compounded return factor multiplies this year
    pub invested_amount: f64,

    /// Running sum of yearly returns so far
    pub cumulative_return: f64,
}

impl InvestmentState {
    /// Initialize state from an investment's share of the total capital
    pub fn from_investment(investment: &InvestmentInput, total_amount: f64) -> Self {
        Self {
            year: 0,
            invested_amount: investment.invested_amount(total_amount),
            cumulative_return: 0.0,
        }
    }

    /// Advance to the next year
    pub fn advance_year(&mut self) {
        self.year += 1;
    }

    /// Return for the current year: base times the factor raised to the absolute year
    pub fn year_return(&self, return_factor: f64) -> f64 {
        self.invested_amount * return_factor.powf(self.year as f64)
    }

    /// Grow the base by the annual increase; only affects later years
    pub fn apply_increase(&mut self, annual_increase_percent: f64) {
        self.invested_amount += self.invested_amount * annual_increase_percent / 100.0;
    }
}
