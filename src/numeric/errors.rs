// ============================================================================
// Numeric Errors
// Error types for exact monetary arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during monetary arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoneyError {
    /// Result exceeded i64::MAX
    Overflow,
    /// Result below i64::MIN
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Precision outside the supported range [0, 15]
    InvalidPrecision,
    /// Currency tag is empty or too long to store inline
    InvalidCurrency,
    /// Operands carry different currencies where a shared one is required
    CurrencyMismatch,
    /// Allocation weight total is zero or negative
    NonPositiveWeightSum,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Input string or value is invalid
    InvalidInput,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            MoneyError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            MoneyError::DivisionByZero => write!(f, "division by zero"),
            MoneyError::InvalidPrecision => {
                write!(f, "invalid precision: must be an integer between 0 and 15")
            },
            MoneyError::InvalidCurrency => {
                write!(f, "invalid currency: tag is empty or too long")
            },
            MoneyError::CurrencyMismatch => {
                write!(f, "currency mismatch between operands")
            },
            MoneyError::NonPositiveWeightSum => {
                write!(f, "allocation weights must sum to a strictly positive integer")
            },
            MoneyError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            MoneyError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for monetary operations
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
        assert_eq!(MoneyError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            MoneyError::CurrencyMismatch.to_string(),
            "currency mismatch between operands"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(MoneyError::Overflow, MoneyError::Overflow);
        assert_ne!(MoneyError::Overflow, MoneyError::Underflow);
        assert_ne!(MoneyError::InvalidPrecision, MoneyError::InvalidCurrency);
    }
}
