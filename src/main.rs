//! FinCalc CLI
//!
//! Command-line interface for projecting portfolio returns
//!
//! ```bash
//! fincalc --total 10000 --years 2 --investment "Index Fund:50:10"
//! fincalc --input portfolio.json --increase 3 --format json --charts
//! fincalc --total 25000 --years 10 --investments-csv rows.csv --format csv --output out.csv
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fincalc::display::{self, Charts, SeededPalette};
use fincalc::portfolio::{load_investments, load_parameters};
use fincalc::{project, InputError, InvestmentInput, PortfolioParameters, ProjectionResult};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Project yearly returns for a portfolio of allocated investments
#[derive(Parser, Debug)]
#[command(name = "fincalc")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// JSON file with a full parameter set; flags below override its fields
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Total capital available for allocation
    #[arg(short, long)]
    total: Option<f64>,

    /// Annual increase applied to every investment's base (%)
    #[arg(long)]
    increase: Option<f64>,

    /// Number of projection years
    #[arg(short, long)]
    years: Option<i32>,

    /// Investment as NAME:ALLOCATION:RETURN (repeatable)
    #[arg(long = "investment", value_name = "NAME:ALLOCATION:RETURN")]
    investments: Vec<InvestmentInput>,

    /// CSV file of investments with name,percentage,returns columns
    #[arg(long)]
    investments_csv: Option<PathBuf>,

    /// Display currency code (USD, EUR, INR)
    #[arg(short, long, default_value = "USD")]
    currency: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Include chart datasets in JSON output
    #[arg(long)]
    charts: bool,

    /// Seed for yearly chart colors
    #[arg(long, default_value_t = 0)]
    color_seed: u64,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable table
    Table,
    /// ProjectionResult as JSON
    Json,
    /// Yearly returns as CSV
    Csv,
}

#[derive(Serialize)]
struct ChartedOutput<'a> {
    result: &'a ProjectionResult,
    charts: Charts,
}

/// Merge the JSON file, flags and CSV rows into one parameter set
fn build_parameters(cli: &Cli) -> Result<PortfolioParameters> {
    let mut params = match &cli.input {
        Some(path) => load_parameters(path)
            .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
        None => {
            let total = cli.total.ok_or(InputError::MissingParameter("total amount"))?;
            let years = cli.years.ok_or(InputError::MissingParameter("years"))?;
            PortfolioParameters::new(total, 0.0, years, Vec::new())
        }
    };

    if let Some(total) = cli.total {
        params.total_amount = total;
    }
    if let Some(increase) = cli.increase {
        params.annual_increase_percent = increase;
    }
    if let Some(years) = cli.years {
        params.years = years;
    }

    for investment in &cli.investments {
        params = params.with_investment(investment.clone());
    }

    if let Some(path) = &cli.investments_csv {
        let rows = load_investments(path)
            .with_context(|| format!("Failed to load investments from {}", path.display()))?;
        for investment in rows {
            params = params.with_investment(investment);
        }
    }

    Ok(params)
}

fn write_output(cli: &Cli, params: &PortfolioParameters, result: &ProjectionResult, out: &mut dyn Write) -> Result<()> {
    match cli.format {
        OutputFormat::Table => {
            write!(out, "{}", display::render_table(result, &cli.currency))?;
        }
        OutputFormat::Json => {
            if cli.charts {
                let colors = SeededPalette::new(cli.color_seed);
                let charted = ChartedOutput {
                    result,
                    charts: Charts::build(result, params.years, &colors),
                };
                serde_json::to_writer_pretty(&mut *out, &charted)?;
            } else {
                serde_json::to_writer_pretty(&mut *out, result)?;
            }
            writeln!(out)?;
        }
        OutputFormat::Csv => display::write_csv(result, &mut *out)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = build_parameters(&cli)?;

    if params.investments.is_empty() {
        log::warn!("No investments given; projected return will be zero");
    } else if (params.allocation_total() - 100.0).abs() > 1e-9 {
        log::warn!(
            "Allocations sum to {:.2}% rather than 100%",
            params.allocation_total()
        );
    }

    let result = project(&params);
    log::info!(
        "Projected {} investments over {} years: total {:.2}",
        result.per_investment.len(),
        params.years,
        result.total_projected_return
    );

    match &cli.output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Unable to create {}", path.display()))?;
            write_output(&cli, &params, &result, &mut file)?;
            println!("Results written to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_output(&cli, &params, &result, &mut handle)?;
        }
    }

    Ok(())
}
