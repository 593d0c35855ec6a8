//! Binomial distribution primitives with support-aware argument handling
//!
//! Counts are taken as signed integers so that callers can evaluate the CDF one
//! step below the support (`k = -1`) without special-casing it themselves.

use crate::io::error::{Result, computation_error};
use statrs::distribution::{Binomial, Discrete, DiscreteCDF};

/// Binomial(n, p) distribution evaluated over the whole integer line
///
/// Mass is zero outside `0..=n`; the CDF is `0` below the support and `1` at or
/// above `n`.
#[derive(Debug, Clone)]
pub struct BinomialDistribution {
    inner: Binomial,
    trials: u64,
}

impl BinomialDistribution {
    /// Create the distribution of successes in `trials` draws with success probability `probability`
    ///
    /// # Errors
    ///
    /// Returns a computation error if the numeric backend rejects the
    /// parameters (`probability` outside `[0, 1]` or NaN)
    pub fn new(trials: u64, probability: f64) -> Result<Self> {
        let inner = Binomial::new(probability, trials)
            .map_err(|e| computation_error("binomial distribution", &e))?;
        Ok(Self { inner, trials })
    }

    /// Number of trials `n`
    pub const fn trials(&self) -> u64 {
        self.trials
    }

    /// Success probability `p`
    pub fn probability(&self) -> f64 {
        self.inner.p()
    }

    /// Distribution mean `n * p`
    pub fn mean(&self) -> f64 {
        self.trials as f64 * self.inner.p()
    }

    /// P(X ≤ k)
    pub fn cdf(&self, k: i64) -> f64 {
        let Ok(k) = u64::try_from(k) else {
            return 0.0;
        };
        if k >= self.trials {
            return 1.0;
        }
        self.inner.cdf(k).clamp(0.0, 1.0)
    }

    /// P(X < k), the CDF one step below `k`
    pub fn cdf_below(&self, k: u64) -> f64 {
        match k.checked_sub(1) {
            Some(below) => self.cdf(i64::try_from(below).unwrap_or(i64::MAX)),
            None => 0.0,
        }
    }

    /// P(X = k)
    pub fn pmf(&self, k: i64) -> f64 {
        match u64::try_from(k) {
            Ok(k) if k <= self.trials => self.inner.pmf(k),
            _ => 0.0,
        }
    }
}

/// Probability that a Binomial(n, p) variable is at most `k`
///
/// Returns `0` for `k < 0` and `1` for `k ≥ n`.
///
/// # Errors
///
/// Returns a computation error if `p` is not a probability
pub fn binomial_cdf(k: i64, n: u64, p: f64) -> Result<f64> {
    Ok(BinomialDistribution::new(n, p)?.cdf(k))
}

/// Probability that a Binomial(n, p) variable equals `k`
///
/// Returns `0` for `k < 0` or `k > n`.
///
/// # Errors
///
/// Returns a computation error if `p` is not a probability
pub fn binomial_pmf(k: i64, n: u64, p: f64) -> Result<f64> {
    Ok(BinomialDistribution::new(n, p)?.pmf(k))
}
