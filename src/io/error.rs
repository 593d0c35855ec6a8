//! Error types for argument validation and numeric evaluation

use std::fmt;

/// Coarse classification of a [`BinomTestError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Argument has the wrong shape (not an integer, not a number, `x > n`)
    InvalidArgument,
    /// Argument has the right shape but lies outside its domain
    OutOfRange,
    /// Numeric backend rejected its arguments
    Computation,
}

/// Main error type for all test operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinomTestError {
    /// Argument has the wrong type or shape
    InvalidArgument {
        /// Name of the offending argument
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Constraint that was violated
        reason: String,
    },

    /// Correctly shaped argument outside its valid domain
    OutOfRange {
        /// Name of the offending argument
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Constraint that was violated
        reason: String,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl BinomTestError {
    /// Classify this error without inspecting its fields
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::Computation { .. } => ErrorKind::Computation,
        }
    }

    /// Name of the argument that failed validation, if any
    pub const fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { parameter, .. } | Self::OutOfRange { parameter, .. } => {
                Some(*parameter)
            }
            Self::Computation { .. } => None,
        }
    }
}

impl fmt::Display for BinomTestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::OutOfRange {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Argument '{parameter}' = '{value}' out of range: {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for BinomTestError {}

/// Convenience type alias for test results
pub type Result<T> = std::result::Result<T, BinomTestError>;

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> BinomTestError {
    BinomTestError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out of range error
pub fn out_of_range(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> BinomTestError {
    BinomTestError::OutOfRange {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> BinomTestError {
    BinomTestError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
