//! Command-line front end, configuration and error handling

/// Command-line interface for running a single test
pub mod cli;
/// Numeric constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
