//! Projection engine for yearly portfolio returns

mod state;
mod engine;
mod results;
pub mod json_float;

pub use state::InvestmentState;
pub use engine::{project, ProjectionEngine, ProjectionConfig};
pub use results::{InvestmentResult, ProjectionResult, ProjectionSummary, YearlyReturn};
