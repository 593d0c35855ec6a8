//! Mathematical utilities for the test

/// Binomial distribution functions
pub mod probability;
