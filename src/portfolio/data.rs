//! Portfolio data structures matching the calculator input form

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{parse_number, InputError};
use crate::projection::ProjectionConfig;

/// One investment row: a share of the total capital with its own expected return
///
/// Names are display-only. They are not required to be unique or non-empty;
/// position in `PortfolioParameters::investments` is the only identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    #[serde(default)]
    pub name: String,

    /// Percent of `total_amount` assigned to this investment (not range-checked)
    #[serde(alias = "allocationPercent", alias = "percentage")]
    pub allocation_percent: f64,

    /// Expected annual return in percent, may be negative
    #[serde(alias = "annualReturnPercent", alias = "returns")]
    pub annual_return_percent: f64,
}

impl InvestmentInput {
    pub fn new(name: impl Into<String>, allocation_percent: f64, annual_return_percent: f64) -> Self {
        Self {
            name: name.into(),
            allocation_percent,
            annual_return_percent,
        }
    }

    /// Starting invested amount for a given total capital
    pub fn invested_amount(&self, total_amount: f64) -> f64 {
        total_amount * self.allocation_percent / 100.0
    }

    /// Growth factor applied per unit of exponent: `1 + rate/100`
    pub fn return_factor(&self) -> f64 {
        1.0 + self.annual_return_percent / 100.0
    }
}

/// Parses `NAME:ALLOCATION:RETURN`, e.g. `Index Fund:60:7.5`
///
/// The name is everything before the last two separators, so it may itself
/// contain `:` or be empty.
impl FromStr for InvestmentInput {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        let (returns, allocation, name) = match (parts.next(), parts.next(), parts.next()) {
            (Some(r), Some(a), Some(n)) => (r, a, n),
            _ => {
                return Err(InputError::InvalidInvestmentSpec {
                    spec: s.to_string(),
                })
            }
        };

        Ok(Self {
            name: name.trim().to_string(),
            allocation_percent: parse_number("allocation percent", allocation)?,
            annual_return_percent: parse_number("annual return percent", returns)?,
        })
    }
}

/// Full parameter set for one projection
///
/// Treated as a value: edits produce a new parameter set instead of mutating
/// rows in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioParameters {
    /// Total capital available for allocation
    #[serde(alias = "totalAmount")]
    pub total_amount: f64,

    /// Global rate that grows every investment's base after each year
    #[serde(default, alias = "annualIncreasePercent")]
    pub annual_increase_percent: f64,

    /// Number of projection years; zero or negative yields empty series
    pub years: i32,

    /// Ordered investments; output order follows this order
    #[serde(default)]
    pub investments: Vec<InvestmentInput>,
}

impl PortfolioParameters {
    pub fn new(
        total_amount: f64,
        annual_increase_percent: f64,
        years: i32,
        investments: Vec<InvestmentInput>,
    ) -> Self {
        Self {
            total_amount,
            annual_increase_percent,
            years,
            investments,
        }
    }

    /// Copy of these parameters with one more investment appended
    pub fn with_investment(mut self, investment: InvestmentInput) -> Self {
        self.investments.push(investment);
        self
    }

    /// Copy of these parameters without the investment at `index`
    ///
    /// An out-of-range index leaves the investments unchanged.
    pub fn without_investment(mut self, index: usize) -> Self {
        if index < self.investments.len() {
            self.investments.remove(index);
        }
        self
    }

    /// Sum of allocation percents across all investments
    pub fn allocation_total(&self) -> f64 {
        self.investments.iter().map(|i| i.allocation_percent).sum()
    }

    /// Sum of starting invested amounts across all investments
    pub fn total_invested(&self) -> f64 {
        self.investments
            .iter()
            .map(|i| i.invested_amount(self.total_amount))
            .sum()
    }

    /// Engine configuration shared by every investment in this portfolio
    pub fn config(&self) -> ProjectionConfig {
        ProjectionConfig {
            total_amount: self.total_amount,
            annual_increase_percent: self.annual_increase_percent,
            years: self.years,
        }
    }
}
