//! FinCalc - Multi-year projected returns for allocated investment portfolios
//!
//! This library provides:
//! - Portfolio parameters (total capital, allocations, expected returns)
//! - The projection engine producing yearly and cumulative returns
//! - Display helpers: currency symbols, chart datasets, text and CSV reports
//! - A scenario runner for comparing parameter variations

pub mod error;
pub mod portfolio;
pub mod projection;
pub mod display;
pub mod scenario;

// Re-export commonly used types
pub use error::{InputError, InputResult};
pub use portfolio::{InvestmentInput, PortfolioParameters};
pub use projection::{project, ProjectionEngine, ProjectionConfig, ProjectionResult, InvestmentResult};
pub use scenario::{ScenarioRunner, ScenarioOverrides};
