//! Portfolio input structures and loading

mod data;
pub mod loader;

pub use data::{InvestmentInput, PortfolioParameters};
pub use loader::{load_investments, load_parameters, investments_from_reader, parameters_from_reader};
