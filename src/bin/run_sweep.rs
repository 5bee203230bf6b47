//! Run a portfolio across a grid of annual increase rates and year counts
//!
//! Outputs one CSV row per combination with the projected totals

use anyhow::{Context, Result};
use clap::Parser;
use fincalc::portfolio::load_parameters;
use fincalc::{ScenarioOverrides, ScenarioRunner};
use rayon::prelude::*;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_sweep", about = "Project a portfolio over a grid of increase rates and horizons")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// JSON file with the base parameter set
    input: PathBuf,

    /// Annual increase rates to try (%)
    #[arg(long, value_delimiter = ',', default_value = "0,1,2,3,4,5")]
    increases: Vec<f64>,

    /// Longest horizon; every year count from 1 up to this is projected
    #[arg(long, default_value_t = 30)]
    max_years: i32,

    /// Output CSV path
    #[arg(short, long, default_value = "sweep_output.csv")]
    output: PathBuf,
}

/// Totals for one grid point
#[derive(Debug, Clone, serde::Serialize)]
struct SweepRow {
    annual_increase_percent: f64,
    years: i32,
    total_projected_return: f64,
    final_year_return: f64,
}

fn grid(increases: &[f64], max_years: i32) -> Vec<ScenarioOverrides> {
    increases
        .iter()
        .flat_map(|&rate| {
            (1..=max_years).map(move |years| ScenarioOverrides {
                annual_increase_percent: Some(rate),
                years: Some(years),
                ..Default::default()
            })
        })
        .collect()
}

fn sweep(runner: &ScenarioRunner, scenarios: &[ScenarioOverrides]) -> Vec<SweepRow> {
    // Each projection owns its accumulators, so scenarios run independently
    scenarios
        .par_iter()
        .map(|scenario| {
            let result = runner.run_with(scenario);
            let total_invested = scenario.apply(runner.base()).total_invested();
            let summary = result.summary(total_invested);
            SweepRow {
                annual_increase_percent: scenario.annual_increase_percent.unwrap_or_default(),
                years: scenario.years.unwrap_or_default(),
                total_projected_return: summary.total_projected_return,
                final_year_return: summary.final_year_return,
            }
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let base = load_parameters(&args.input)
        .with_context(|| format!("Failed to load parameters from {}", args.input.display()))?;
    let runner = ScenarioRunner::new(base);

    let scenarios = grid(&args.increases, args.max_years);
    println!("Running {} scenarios...", scenarios.len());
    let rows = sweep(&runner, &scenarios);
    println!("Projections complete in {:?}", start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let mut writer = csv::Writer::from_writer(file);
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc::{InvestmentInput, PortfolioParameters};

    #[test]
    fn test_grid_covers_every_combination() {
        let scenarios = grid(&[0.0, 2.5], 3);
        assert_eq!(scenarios.len(), 6);
        assert_eq!(scenarios[0].years, Some(1));
        assert_eq!(scenarios[5].annual_increase_percent, Some(2.5));
        assert_eq!(scenarios[5].years, Some(3));
    }

    #[test]
    fn test_sweep_matches_sequential_runs() {
        let runner = ScenarioRunner::new(PortfolioParameters::new(
            10_000.0,
            0.0,
            1,
            vec![InvestmentInput::new("A", 100.0, 5.0)],
        ));
        let scenarios = grid(&[0.0, 3.0], 4);
        let rows = sweep(&runner, &scenarios);

        assert_eq!(rows.len(), scenarios.len());
        for (row, scenario) in rows.iter().zip(&scenarios) {
            let expected = runner.run_with(scenario).total_projected_return;
            assert_eq!(row.total_projected_return, expected);
        }
    }
}
