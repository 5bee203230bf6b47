//! Input errors raised while reading portfolio parameters
//!
//! The projection engine itself never fails. Everything here belongs to the
//! caller side: parsing flags, JSON payloads and investment CSV files.

use thiserror::Error;

/// Result alias for input handling
pub type InputResult<T> = Result<T, InputError>;

/// Errors produced while turning raw input into `PortfolioParameters`
#[derive(Error, Debug)]
pub enum InputError {
    /// Investment spec string did not have the NAME:ALLOCATION:RETURN shape
    #[error("Invalid investment spec '{spec}': expected NAME:ALLOCATION:RETURN")]
    InvalidInvestmentSpec { spec: String },

    /// A numeric field could not be parsed
    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// A required parameter was not supplied by any input source
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Parse a numeric field, reporting the field name on failure
pub fn parse_number(field: &'static str, value: &str) -> InputResult<f64> {
    value.trim().parse::<f64>().map_err(|_| InputError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_trims() {
        assert_eq!(parse_number("total amount", " 10000 ").unwrap(), 10000.0);
        assert_eq!(parse_number("return", "-3.5").unwrap(), -3.5);
    }

    #[test]
    fn test_parse_number_rejects_text() {
        let err = parse_number("total amount", "ten").unwrap_err();
        assert!(matches!(err, InputError::InvalidNumber { field: "total amount", .. }));
        assert_eq!(err.to_string(), "Invalid number for total amount: 'ten'");
    }
}
