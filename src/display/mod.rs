//! Presentation helpers around projection results
//!
//! Nothing here feeds back into the engine; these only read a finished
//! `ProjectionResult`.

pub mod chart;
mod currency;
pub mod report;

pub use chart::{allocation_chart, yearly_chart, Charts, ChartData, ColorPolicy, FixedPalette, SeededPalette};
pub use currency::{currency_symbol, format_amount, headline, to_fixed_2, Currency, DEFAULT_SYMBOL};
pub use report::{render_table, write_csv};
