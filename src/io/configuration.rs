//! Numeric constants and runtime configuration defaults

use crate::hypothesis::alternative::Alternative;

// Tunable: absorbs rounding in PMF evaluation when comparing masses against the
// observed one. Changing it changes reproduced p-values at tie boundaries.
/// Relative tolerance for deciding that a mass is no larger than the observed mass
pub const RELATIVE_ERROR_TOLERANCE: f64 = 1.0 + 1e-7;

/// Alternative hypothesis used when none is given
pub const DEFAULT_ALTERNATIVE: Alternative = Alternative::TwoSided;

// Output settings
/// Decimal places shown for p-values in the verbose summary
pub const SUMMARY_DECIMAL_PLACES: usize = 7;
