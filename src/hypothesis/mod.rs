//! Exact binomial hypothesis test

/// Alternative hypothesis directions
pub mod alternative;
/// Test construction and p-value computation
pub mod binomial;
/// Ordered argument validation
pub mod validation;
