//! Argument checks shared by the typed and loosely typed entry points
//!
//! Checks are ordered: `x`, then `n`, then `x ≤ n`, then `p`, then the
//! alternative. The first failing check determines the reported error.

use crate::hypothesis::alternative::Alternative;
use crate::io::configuration::DEFAULT_ALTERNATIVE;
use crate::io::error::{Result, invalid_argument, out_of_range};
use num_traits::ToPrimitive;
use std::fmt::Display;

/// Validate that `value` is a non-negative integer representable as `u64`
///
/// Accepts any primitive numeric type; floating point values must be finite
/// and have no fractional part.
///
/// # Errors
///
/// Returns an invalid argument error naming `parameter` otherwise
pub fn non_negative_integer<T>(parameter: &'static str, value: T) -> Result<u64>
where
    T: ToPrimitive + Display,
{
    let integral = value
        .to_f64()
        .is_some_and(|v| v.is_finite() && v >= 0.0 && v.trunc().to_bits() == v.to_bits());

    integral
        .then(|| value.to_u64())
        .flatten()
        .ok_or_else(|| {
            invalid_argument(
                parameter,
                &value,
                &format!("{parameter} must be a non-negative integer"),
            )
        })
}

/// Validate that the success count does not exceed the trial count
///
/// # Errors
///
/// Returns an invalid argument error if `successes > trials`
pub fn successes_within_trials(successes: u64, trials: u64) -> Result<()> {
    if successes > trials {
        return Err(invalid_argument(
            "x",
            &format!("x:{successes}, n:{trials}"),
            &"x cannot exceed n",
        ));
    }
    Ok(())
}

/// Validate that `p` is a probability
///
/// # Errors
///
/// Returns an invalid argument error for NaN and an out of range error for any
/// other value outside `[0, 1]`
pub fn probability(p: f64) -> Result<f64> {
    if p.is_nan() {
        return Err(invalid_argument("p", &p, &"p must be a number"));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(out_of_range("p", &p, &"p must lie in [0, 1]"));
    }
    Ok(p)
}

/// Resolve an optional textual alternative, defaulting to two-sided
///
/// # Errors
///
/// Returns an out of range error for unrecognized text
pub fn alternative(text: Option<&str>) -> Result<Alternative> {
    text.map_or(Ok(DEFAULT_ALTERNATIVE), str::parse)
}
