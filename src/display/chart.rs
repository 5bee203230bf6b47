//! Chart datasets built from a projection result
//!
//! Output is shaped like Chart.js `data` objects so a front end can pass it
//! through untouched. Colors come from a `ColorPolicy` so the same result
//! always renders the same way.

use serde::{Deserialize, Serialize};

use crate::projection::ProjectionResult;

/// Slice colors for the allocation pie
pub const PIE_COLORS: [&str; 6] = ["#667eea", "#764ba2", "#ff6b6b", "#4bc0c0", "#f39c12", "#2ecc71"];

/// Alpha used for yearly bar series
pub const BAR_ALPHA: f64 = 0.6;

/// Assigns a CSS color to the series at a given position
pub trait ColorPolicy {
    fn color(&self, index: usize) -> String;
}

/// Cycles through a fixed list of CSS colors
#[derive(Debug, Clone)]
pub struct FixedPalette {
    colors: Vec<String>,
}

impl FixedPalette {
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    /// The pie chart palette
    pub fn pie() -> Self {
        Self::new(PIE_COLORS)
    }
}

impl ColorPolicy for FixedPalette {
    fn color(&self, index: usize) -> String {
        if self.colors.is_empty() {
            return String::new();
        }
        self.colors[index % self.colors.len()].clone()
    }
}

/// Pseudo-random but reproducible `rgba(r, g, b, 0.6)` colors
///
/// Each channel lands in [50, 250), keeping bars away from black and white.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeededPalette {
    pub seed: u64,
}

impl SeededPalette {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn channel(&self, index: usize, channel: u64) -> u8 {
        let mixed = splitmix64(self.seed ^ (index as u64).wrapping_mul(3).wrapping_add(channel));
        (50 + mixed % 200) as u8
    }
}

impl ColorPolicy for SeededPalette {
    fn color(&self, index: usize) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.channel(index, 0),
            self.channel(index, 1),
            self.channel(index, 2),
            BAR_ALPHA
        )
    }
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Either one color for the whole dataset or one per data point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackgroundColor {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(with = "crate::projection::json_float::series")]
    pub data: Vec<f64>,
    pub background_color: BackgroundColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Pie of cumulative return per investment
pub fn allocation_chart(result: &ProjectionResult) -> ChartData {
    let palette = FixedPalette::pie();
    let count = result.per_investment.len();

    ChartData {
        labels: result.per_investment.iter().map(|r| r.name.clone()).collect(),
        datasets: vec![Dataset {
            label: None,
            data: result.per_investment.iter().map(|r| r.cumulative_return).collect(),
            background_color: BackgroundColor::PerPoint((0..count).map(|i| palette.color(i)).collect()),
        }],
    }
}

/// Grouped bars of yearly returns, one dataset per investment
///
/// Labels run `Year 1..=years`; a non-positive `years` gives no labels.
pub fn yearly_chart(result: &ProjectionResult, years: i32, colors: &dyn ColorPolicy) -> ChartData {
    ChartData {
        labels: (1..=years).map(|year| format!("Year {}", year)).collect(),
        datasets: result
            .per_investment
            .iter()
            .enumerate()
            .map(|(i, r)| Dataset {
                label: Some(r.name.clone()),
                data: r.yearly_series.clone(),
                background_color: BackgroundColor::Single(colors.color(i)),
            })
            .collect(),
    }
}

/// Both charts, as served alongside a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charts {
    pub allocation: ChartData,
    pub yearly: ChartData,
}

impl Charts {
    pub fn build(result: &ProjectionResult, years: i32, colors: &dyn ColorPolicy) -> Self {
        Self {
            allocation: allocation_chart(result),
            yearly: yearly_chart(result, years, colors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::{InvestmentInput, PortfolioParameters};
    use crate::projection::project;

    fn sample_result() -> ProjectionResult {
        project(&PortfolioParameters::new(
            1000.0,
            0.0,
            2,
            vec![
                InvestmentInput::new("A", 50.0, 0.0),
                InvestmentInput::new("B", 50.0, 0.0),
            ],
        ))
    }

    #[test]
    fn test_fixed_palette_cycles() {
        let palette = FixedPalette::pie();
        assert_eq!(palette.color(0), "#667eea");
        assert_eq!(palette.color(6), "#667eea");
        assert_eq!(palette.color(7), "#764ba2");
        assert_eq!(FixedPalette::new(Vec::<String>::new()).color(3), "");
    }

    #[test]
    fn test_seeded_palette_is_deterministic_and_in_range() {
        let palette = SeededPalette::new(42);
        for index in 0..50 {
            let color = palette.color(index);
            assert_eq!(color, SeededPalette::new(42).color(index));
            assert!(color.starts_with("rgba(") && color.ends_with(", 0.6)"));
            for channel in [0, 1, 2] {
                let value = palette.channel(index, channel);
                assert!((50..250).contains(&value));
            }
        }
    }

    #[test]
    fn test_allocation_chart() {
        let chart = allocation_chart(&sample_result());
        assert_eq!(chart.labels, vec!["A", "B"]);
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].data, vec![1000.0, 1000.0]);
        assert_eq!(
            chart.datasets[0].background_color,
            BackgroundColor::PerPoint(vec!["#667eea".into(), "#764ba2".into()])
        );
    }

    #[test]
    fn test_yearly_chart_labels_and_series() {
        let chart = yearly_chart(&sample_result(), 2, &FixedPalette::new(["red"]));
        assert_eq!(chart.labels, vec!["Year 1", "Year 2"]);
        assert_eq!(chart.datasets[1].label.as_deref(), Some("B"));
        assert_eq!(chart.datasets[1].data, vec![500.0, 500.0]);
        assert_eq!(chart.datasets[1].background_color, BackgroundColor::Single("red".into()));
    }

    #[test]
    fn test_chart_json_uses_chartjs_field_names() {
        let chart = yearly_chart(&sample_result(), 1, &FixedPalette::new(["red"]));
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["datasets"][0]["backgroundColor"], "red");
        assert_eq!(json["datasets"][0]["label"], "A");

        let pie = serde_json::to_value(allocation_chart(&sample_result())).unwrap();
        assert!(pie["datasets"][0].get("label").is_none());
    }
}
