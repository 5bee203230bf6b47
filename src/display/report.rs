//! Text and CSV reports of a projection result

use std::fmt::Write as _;
use std::io::Write;

use super::currency::{format_amount, headline};
use crate::projection::ProjectionResult;

const YEAR_WIDTH: usize = 6;
const VALUE_WIDTH: usize = 16;

/// Plain-text table: one row per year, one column per investment plus a total
pub fn render_table(result: &ProjectionResult, currency: &str) -> String {
    let mut out = String::new();
    let totals = result.yearly_totals();

    // Header
    let _ = write!(out, "{:>w$}", "Year", w = YEAR_WIDTH);
    for investment in &result.per_investment {
        let _ = write!(out, " {:>w$}", truncate(&investment.name, VALUE_WIDTH), w = VALUE_WIDTH);
    }
    let _ = writeln!(out, " {:>w$}", "Total", w = VALUE_WIDTH);
    let width = YEAR_WIDTH + (VALUE_WIDTH + 1) * (result.per_investment.len() + 1);
    let _ = writeln!(out, "{}", "-".repeat(width));

    for (idx, total) in totals.iter().enumerate() {
        let _ = write!(out, "{:>w$}", idx + 1, w = YEAR_WIDTH);
        for investment in &result.per_investment {
            let cell = investment
                .yearly_series
                .get(idx)
                .map(|v| format_amount(currency, *v))
                .unwrap_or_default();
            let _ = write!(out, " {:>w$}", cell, w = VALUE_WIDTH);
        }
        let _ = writeln!(out, " {:>w$}", format_amount(currency, *total), w = VALUE_WIDTH);
    }

    let _ = writeln!(out, "{}", "-".repeat(width));
    let _ = writeln!(out, "\nCumulative returns:");
    for investment in &result.per_investment {
        let _ = writeln!(
            out,
            "  {}: {}",
            investment.name,
            format_amount(currency, investment.cumulative_return)
        );
    }
    let _ = writeln!(out, "\n{}", headline(currency, result.total_projected_return));

    out
}

fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        name.chars().take(max).collect()
    }
}

/// Write yearly returns as CSV: `Year,<names...>,Total` then a `Cumulative` row
pub fn write_csv<W: Write>(result: &ProjectionResult, writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["Year".to_string()];
    header.extend(result.per_investment.iter().map(|r| r.name.clone()));
    header.push("Total".to_string());
    csv_writer.write_record(&header)?;

    for (idx, total) in result.yearly_totals().iter().enumerate() {
        let mut record = vec![(idx + 1).to_string()];
        for investment in &result.per_investment {
            record.push(
                investment
                    .yearly_series
                    .get(idx)
                    .map(|v| format!("{:.8}", v))
                    .unwrap_or_default(),
            );
        }
        record.push(format!("{:.8}", total));
        csv_writer.write_record(&record)?;
    }

    let mut cumulative = vec!["Cumulative".to_string()];
    cumulative.extend(
        result
            .per_investment
            .iter()
            .map(|r| format!("{:.8}", r.cumulative_return)),
    );
    cumulative.push(format!("{:.8}", result.total_projected_return));
    csv_writer.write_record(&cumulative)?;

    csv_writer.flush()?;
    Ok(())
}
