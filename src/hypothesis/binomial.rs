//! Exact binomial test
//!
//! The two-sided p-value sums the probability of every outcome whose mass is no
//! larger than the mass of the observed count. Because Binomial(n, p) is
//! skewed unless `p = 0.5`, this is not twice the one-sided p-value: the
//! opposite tail is located by scanning the half of the support on the other
//! side of the mean.

use crate::hypothesis::alternative::Alternative;
use crate::hypothesis::validation;
use crate::io::configuration::{RELATIVE_ERROR_TOLERANCE, SUMMARY_DECIMAL_PLACES};
use crate::io::error::Result;
use crate::math::probability::BinomialDistribution;
use std::fmt;

/// Validated exact binomial test of `x` successes in `n` trials against success probability `p`
#[derive(Debug, Clone)]
pub struct BinomialTest {
    successes: u64,
    alternative: Alternative,
    distribution: BinomialDistribution,
}

/// Summary of a completed test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestReport {
    /// Observed number of successes `x`
    pub successes: u64,
    /// Number of trials `n`
    pub trials: u64,
    /// Success probability under the null hypothesis
    pub probability: f64,
    /// Alternative hypothesis tested
    pub alternative: Alternative,
    /// Observed proportion of successes, `0` when there were no trials
    pub estimate: f64,
    /// Probability of a result at least as extreme as the observed one
    pub p_value: f64,
}

impl BinomialTest {
    /// Create a test from typed arguments
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `successes` exceeds `trials`
    /// - `probability` is NaN (invalid argument) or outside `[0, 1]` (out of range)
    pub fn new(
        successes: u64,
        trials: u64,
        probability: f64,
        alternative: Alternative,
    ) -> Result<Self> {
        validation::successes_within_trials(successes, trials)?;
        let probability = validation::probability(probability)?;
        let distribution = BinomialDistribution::new(trials, probability)?;

        Ok(Self {
            successes,
            alternative,
            distribution,
        })
    }

    /// Create a test from loosely typed arguments
    ///
    /// Counts arrive as real numbers and must be non-negative integers. An
    /// absent alternative means two-sided.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in order: `x` not a non-negative
    /// integer, `n` not a non-negative integer, `x > n`, `p` not a probability,
    /// unrecognized alternative
    pub fn from_raw(x: f64, n: f64, p: f64, alternative: Option<&str>) -> Result<Self> {
        let successes = validation::non_negative_integer("x", x)?;
        let trials = validation::non_negative_integer("n", n)?;
        validation::successes_within_trials(successes, trials)?;
        let probability = validation::probability(p)?;
        let alternative = validation::alternative(alternative)?;

        Self::new(successes, trials, probability, alternative)
    }

    /// Observed number of successes
    pub const fn successes(&self) -> u64 {
        self.successes
    }

    /// Number of trials
    pub const fn trials(&self) -> u64 {
        self.distribution.trials()
    }

    /// Success probability under the null hypothesis
    pub fn probability(&self) -> f64 {
        self.distribution.probability()
    }

    /// Alternative hypothesis being tested
    pub const fn alternative(&self) -> Alternative {
        self.alternative
    }

    /// Observed proportion of successes
    pub const fn estimate(&self) -> f64 {
        if self.trials() == 0 {
            0.0
        } else {
            self.successes as f64 / self.trials() as f64
        }
    }

    /// p-value of the test
    pub fn p_value(&self) -> f64 {
        let p_value = match self.alternative {
            Alternative::Less => self.distribution.cdf(self.observed()),
            Alternative::Greater => 1.0 - self.distribution.cdf_below(self.successes),
            Alternative::TwoSided => self.two_sided_p_value(),
        };

        // Summing two tails can overshoot by a few ulps
        p_value.clamp(0.0, 1.0)
    }

    /// Run the test and collect its inputs and result
    pub fn report(&self) -> TestReport {
        TestReport {
            successes: self.successes,
            trials: self.trials(),
            probability: self.probability(),
            alternative: self.alternative,
            estimate: self.estimate(),
            p_value: self.p_value(),
        }
    }

    fn observed(&self) -> i64 {
        i64::try_from(self.successes).unwrap_or(i64::MAX)
    }

    // Exact comparison with the mean is part of the definition
    #[allow(clippy::float_cmp)]
    fn two_sided_p_value(&self) -> f64 {
        let dist = &self.distribution;
        let n = dist.trials();
        let mean = dist.mean();
        let observed = self.successes as f64;
        let threshold = dist.pmf(self.observed()) * RELATIVE_ERROR_TOLERANCE;

        // Observation at the mean: every outcome is at least as extreme
        if observed == mean {
            return 1.0;
        }

        if observed < mean {
            let first = mean.ceil() as u64;
            let tail = count_at_most(dist, first..=n, threshold);
            log::debug!(
                "two-sided scan above mean {mean}: {tail} of {first}..={n} within mass {threshold}"
            );
            // Upper tail is {n - tail + 1, ..., n}
            dist.cdf(self.observed()) + (1.0 - dist.cdf(n.saturating_sub(tail) as i64))
        } else {
            let last = mean.floor() as u64;
            let tail = count_at_most(dist, 0..=last, threshold);
            log::debug!(
                "two-sided scan below mean {mean}: {tail} of 0..={last} within mass {threshold}"
            );
            // Lower tail is {0, ..., tail - 1}
            dist.cdf_below(tail) + (1.0 - dist.cdf_below(self.successes))
        }
    }
}

/// Number of outcomes in `range` whose mass does not exceed `threshold`
fn count_at_most(
    dist: &BinomialDistribution,
    range: std::ops::RangeInclusive<u64>,
    threshold: f64,
) -> u64 {
    range
        .filter(|&i| dist.pmf(i as i64) <= threshold)
        .count() as u64
}

impl fmt::Display for TestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Exact binomial test")?;
        writeln!(
            f,
            "number of successes = {}, number of trials = {}, p-value = {:.*}",
            self.successes,
            self.trials,
            SUMMARY_DECIMAL_PLACES,
            self.p_value
        )?;
        writeln!(
            f,
            "alternative hypothesis: true probability of success is {} {}",
            match self.alternative {
                Alternative::TwoSided => "not equal to",
                Alternative::Less => "less than",
                Alternative::Greater => "greater than",
            },
            self.probability
        )?;
        write!(f, "probability of success estimate: {}", self.estimate)
    }
}

/// Compute the p-value of an exact binomial test
///
/// # Errors
///
/// Returns an error if `x > n` or `p` is not a probability
pub fn binom_test(x: u64, n: u64, p: f64, alternative: Alternative) -> Result<f64> {
    BinomialTest::new(x, n, p, alternative).map(|test| test.p_value())
}
