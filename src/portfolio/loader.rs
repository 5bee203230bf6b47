//! Load portfolio parameters from JSON and investment rows from CSV

use super::{InvestmentInput, PortfolioParameters};
use crate::error::{parse_number, InputResult};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Raw CSV row using the calculator form's column names
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(default)]
    name: String,
    percentage: String,
    returns: String,
}

impl CsvRow {
    fn to_investment(self) -> InputResult<InvestmentInput> {
        Ok(InvestmentInput {
            name: self.name.trim().to_string(),
            allocation_percent: parse_number("percentage", &self.percentage)?,
            annual_return_percent: parse_number("returns", &self.returns)?,
        })
    }
}

/// Load a complete parameter set from a JSON file
pub fn load_parameters<P: AsRef<Path>>(path: P) -> InputResult<PortfolioParameters> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let params = parameters_from_reader(BufReader::new(file))?;
    log::debug!(
        "Loaded parameters from {}: {} investments over {} years",
        path.display(),
        params.investments.len(),
        params.years
    );
    Ok(params)
}

/// Read a parameter set from any JSON reader
pub fn parameters_from_reader<R: Read>(reader: R) -> InputResult<PortfolioParameters> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load investment rows from a CSV file with `name,percentage,returns` columns
pub fn load_investments<P: AsRef<Path>>(path: P) -> InputResult<Vec<InvestmentInput>> {
    let path = path.as_ref();
    let investments = investments_from_reader(File::open(path)?)?;
    log::debug!("Loaded {} investments from {}", investments.len(), path.display());
    Ok(investments)
}

/// Load investment rows from any CSV reader, preserving row order
pub fn investments_from_reader<R: Read>(reader: R) -> InputResult<Vec<InvestmentInput>> {
    let mut csv_reader = ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let mut investments = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        investments.push(row.to_investment()?);
    }

    Ok(investments)
}
