//! Result structures for projections

use serde::{Deserialize, Serialize};

/// Projected return of one investment in one year (not cumulative)
pub type YearlyReturn = f64;

/// Projection output for a single investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentResult {
    /// Copied from the input row
    pub name: String,

    /// One value per year, index 0 = year 1
    #[serde(with = "super::json_float::series")]
    pub yearly_series: Vec<YearlyReturn>,

    /// Sum of `yearly_series`
    #[serde(with = "super::json_float")]
    pub cumulative_return: f64,
}

impl InvestmentResult {
    pub fn new(name: String) -> Self {
        Self {
            name,
            yearly_series: Vec::new(),
            cumulative_return: 0.0,
        }
    }

    /// Append the return for the next year
    pub fn add_year(&mut self, value: YearlyReturn) {
        self.yearly_series.push(value);
    }

    /// Return generated in the last projected year, 0 when nothing was projected
    pub fn final_year_return(&self) -> f64 {
        self.yearly_series.last().copied().unwrap_or(0.0)
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Same order and length as the input investments
    pub per_investment: Vec<InvestmentResult>,

    /// Sum of every investment's cumulative return, added in input order
    #[serde(with = "super::json_float")]
    pub total_projected_return: f64,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self {
            per_investment: Vec::new(),
            total_projected_return: 0.0,
        }
    }

    /// Add an investment result and fold it into the total
    pub fn add_investment(&mut self, investment: InvestmentResult) {
        self.total_projected_return += investment.cumulative_return;
        self.per_investment.push(investment);
    }

    /// Number of projected years (length of the longest series)
    pub fn years(&self) -> usize {
        self.per_investment
            .iter()
            .map(|r| r.yearly_series.len())
            .max()
            .unwrap_or(0)
    }

    /// Per-year sum across all investments, index 0 = year 1
    pub fn yearly_totals(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.years()];
        for investment in &self.per_investment {
            for (total, value) in totals.iter_mut().zip(&investment.yearly_series) {
                *total += value;
            }
        }
        totals
    }

    /// Get summary statistics
    ///
    /// `total_invested` is the sum of starting amounts, so it needs the
    /// original capital and allocations. Investments whose cumulative return
    /// is NaN never count as the top investment.
    pub fn summary(&self, total_invested: f64) -> ProjectionSummary {
        let final_year_return = self.yearly_totals().last().copied().unwrap_or(0.0);

        let mut top: Option<&InvestmentResult> = None;
        for investment in self.per_investment.iter().filter(|r| !r.cumulative_return.is_nan()) {
            match top {
                Some(best) if best.cumulative_return >= investment.cumulative_return => {}
                _ => top = Some(investment),
            }
        }

        ProjectionSummary {
            years: self.years() as u32,
            investment_count: self.per_investment.len(),
            total_invested,
            total_projected_return: self.total_projected_return,
            final_year_return,
            top_investment: top.map(|r| r.name.clone()),
        }
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub investment_count: usize,
    #[serde(with = "super::json_float")]
    pub total_invested: f64,
    #[serde(with = "super::json_float")]
    pub total_projected_return: f64,
    #[serde(with = "super::json_float")]
    pub final_year_return: f64,
    /// First investment with the largest cumulative return, NaN entries skipped
    pub top_investment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(series: &[(&str, Vec<f64>)]) -> ProjectionResult {
        let mut result = ProjectionResult::new();
        for (name, values) in series {
            let mut inv = InvestmentResult::new(name.to_string());
            for v in values {
                inv.add_year(*v);
                inv.cumulative_return += v;
            }
            result.add_investment(inv);
        }
        result
    }

    #[test]
    fn test_yearly_totals() {
        let result = result_with(&[("A", vec![1.0, 2.0, 3.0]), ("B", vec![10.0, 20.0, 30.0])]);
        assert_eq!(result.yearly_totals(), vec![11.0, 22.0, 33.0]);
        assert_eq!(result.total_projected_return, 66.0);
    }

    #[test]
    fn test_summary_picks_first_top_investment() {
        let result = result_with(&[
            ("A", vec![1.0]),
            ("B", vec![5.0]),
            ("C", vec![5.0]),
        ]);
        let summary = result.summary(100.0);

        assert_eq!(summary.years, 1);
        assert_eq!(summary.investment_count, 3);
        assert_eq!(summary.total_invested, 100.0);
        assert_eq!(summary.final_year_return, 11.0);
        assert_eq!(summary.top_investment.as_deref(), Some("B"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = ProjectionResult::new().summary(0.0);
        assert_eq!(summary.years, 0);
        assert_eq!(summary.final_year_return, 0.0);
        assert!(summary.top_investment.is_none());
    }

    #[test]
    fn test_summary_skips_nan_for_top_investment() {
        let result = result_with(&[
            ("A", vec![f64::NAN]),
            ("B", vec![3.0]),
            ("C", vec![f64::NAN]),
        ]);
        assert_eq!(result.summary(0.0).top_investment.as_deref(), Some("B"));

        let all_nan = result_with(&[("A", vec![f64::NAN])]);
        assert!(all_nan.summary(0.0).top_investment.is_none());
    }

    #[test]
    fn test_overflow_survives_json() {
        let result = result_with(&[("A", vec![1e308, f64::INFINITY])]);
        assert!(result.total_projected_return.is_infinite());

        let json = serde_json::to_string(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["per_investment"][0]["yearly_series"][0].as_f64(), Some(1e308));
        assert_eq!(value["per_investment"][0]["yearly_series"][1], "Infinity");
        assert_eq!(value["per_investment"][0]["cumulative_return"], "Infinity");
        assert_eq!(value["total_projected_return"], "Infinity");

        let back: ProjectionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.per_investment[0].yearly_series[1], f64::INFINITY);
        assert_eq!(back.total_projected_return, f64::INFINITY);
    }

    #[test]
    fn test_final_year_return() {
        let mut inv = InvestmentResult::new("A".into());
        assert_eq!(inv.final_year_return(), 0.0);
        inv.add_year(4.0);
        inv.add_year(9.0);
        assert_eq!(inv.final_year_return(), 9.0);
    }
}
