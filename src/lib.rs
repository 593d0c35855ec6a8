//! Exact binomial test for a single observed count of successes
//!
//! Given `x` successes in `n` independent trials, computes how extreme the
//! observation is under the null success probability `p` against a `less`,
//! `greater` or `two-sided` alternative.

#![forbid(unsafe_code)]

/// Exact binomial test and its argument validation
pub mod hypothesis;
/// Command-line interface, configuration and error handling
pub mod io;
/// Binomial distribution primitives
pub mod math;

pub use hypothesis::alternative::Alternative;
pub use hypothesis::binomial::{BinomialTest, TestReport, binom_test};
pub use io::error::{BinomTestError, ErrorKind, Result};
