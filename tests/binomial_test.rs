//! Validates exact binomial test p-values against reference values and distribution properties

use binomtest::math::probability::{binomial_cdf, binomial_pmf};
use binomtest::{Alternative, BinomialTest, ErrorKind, binom_test};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn p_value(x: u64, n: u64, p: f64, alternative: Alternative) -> f64 {
    binom_test(x, n, p, alternative).unwrap()
}

// Reference values computed with exact rational binomial coefficients
#[test]
fn test_two_sided_reference_values() {
    let cases = [
        (682, 925, 0.75, 0.382_491_559_574_851_6),
        (3, 10, 0.5, 0.343_75),
        (9, 10, 0.5, 0.021_484_375),
        (7, 20, 0.1, 0.002_386_089_408_965_675),
        (1, 10, 0.3, 0.299_576_678_5),
        (2, 50, 0.2, 0.002_217_851_442_661_511_5),
    ];

    for (x, n, p, expected) in cases {
        let actual = p_value(x, n, p, Alternative::TwoSided);
        assert!(
            (actual - expected).abs() < 1e-6,
            "two-sided p-value for x={x}, n={n}, p={p}: expected {expected}, got {actual}"
        );
    }
}

#[test]
fn test_one_sided_reference_values() {
    // P(X <= 3) = P(X >= 7) = 176 / 1024 for a fair coin
    let less = p_value(3, 10, 0.5, Alternative::Less);
    let greater = p_value(7, 10, 0.5, Alternative::Greater);
    assert!((less - 176.0 / 1024.0).abs() < 1e-12, "got {less}");
    assert!((greater - 176.0 / 1024.0).abs() < 1e-12, "got {greater}");
}

#[test]
fn test_observation_at_mean_is_not_extreme() {
    assert!((p_value(5, 10, 0.5, Alternative::TwoSided) - 1.0).abs() < f64::EPSILON);

    // Dyadic probabilities keep n * p exact
    for (n, p) in [(8, 0.25), (16, 0.75), (40, 0.125), (0, 0.5), (12, 0.0), (12, 1.0)] {
        let x = (n as f64 * p) as u64;
        let actual = p_value(x, n, p, Alternative::TwoSided);
        assert!(
            (actual - 1.0).abs() < f64::EPSILON,
            "x={x}, n={n}, p={p}: got {actual}"
        );
    }
}

#[test]
fn test_extremes_of_the_support() {
    assert!((p_value(0, 10, 0.5, Alternative::Greater) - 1.0).abs() < f64::EPSILON);
    assert!((p_value(10, 10, 0.5, Alternative::Less) - 1.0).abs() < f64::EPSILON);

    for n in [1_u64, 5, 17, 60] {
        for p in [0.0, 0.1, 0.5, 0.93, 1.0] {
            let less = p_value(0, n, p, Alternative::Less);
            let expected_less = (1.0 - p).powi(n as i32);
            assert!(
                (less - expected_less).abs() < 1e-10,
                "less(0, {n}, {p}): expected {expected_less}, got {less}"
            );

            let greater = p_value(n, n, p, Alternative::Greater);
            let expected_greater = p.powi(n as i32);
            assert!(
                (greater - expected_greater).abs() < 1e-10,
                "greater({n}, {n}, {p}): expected {expected_greater}, got {greater}"
            );
        }
    }
}

// Sampled inputs: every p-value is a probability, one-sided p-values are monotone in x
#[test]
fn test_sampled_range_and_monotonicity() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let n = rng.random_range(0..=80_u64);
        let p = rng.random_range(0.0..=1.0);

        let mut previous_less = 0.0;
        let mut previous_greater = 1.0;
        for x in 0..=n {
            for alternative in Alternative::ALL {
                let value = p_value(x, n, p, alternative);
                assert!(
                    (0.0..=1.0).contains(&value),
                    "{alternative}({x}, {n}, {p}) = {value}"
                );
            }

            let less = p_value(x, n, p, Alternative::Less);
            let greater = p_value(x, n, p, Alternative::Greater);
            assert!(less >= previous_less - 1e-12, "less not monotone at x={x}, n={n}, p={p}");
            assert!(
                greater <= previous_greater + 1e-12,
                "greater not monotone at x={x}, n={n}, p={p}"
            );
            previous_less = less;
            previous_greater = greater;
        }
    }
}

#[test]
fn test_two_sided_symmetry() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let n = rng.random_range(1..=60_u64);
        let x = rng.random_range(0..=n);
        let p = rng.random_range(0.05..0.95);

        let forward = p_value(x, n, p, Alternative::TwoSided);
        let mirrored = p_value(n - x, n, 1.0 - p, Alternative::TwoSided);
        assert!(
            (forward - mirrored).abs() < 1e-9,
            "x={x}, n={n}, p={p}: {forward} vs mirrored {mirrored}"
        );
    }
}

#[test]
fn test_two_sided_sums_outcomes_no_more_likely_than_observed() {
    for (x, n, p) in [(2_u64, 15_u64, 0.4), (11, 15, 0.4), (682, 925, 0.75), (0, 6, 0.3)] {
        let observed = binomial_pmf(x as i64, n, p).unwrap() * (1.0 + 1e-7);
        let expected: f64 = (0..=n)
            .map(|i| binomial_pmf(i as i64, n, p).unwrap())
            .filter(|&mass| mass <= observed)
            .sum();
        let actual = p_value(x, n, p, Alternative::TwoSided);
        assert!(
            (actual - expected).abs() < 1e-9,
            "x={x}, n={n}, p={p}: expected {expected}, got {actual}"
        );
    }
}

#[test]
fn test_invalid_inputs_are_rejected_in_order() {
    let cases: [(f64, f64, f64, Option<&str>, ErrorKind, &str); 8] = [
        (-1.0, 10.0, 0.5, None, ErrorKind::InvalidArgument, "x"),
        (2.5, 10.0, 0.5, None, ErrorKind::InvalidArgument, "x"),
        (2.0, 10.5, 0.5, None, ErrorKind::InvalidArgument, "n"),
        (3.0, 2.0, 0.5, None, ErrorKind::InvalidArgument, "x"),
        (2.0, 10.0, 1.5, None, ErrorKind::OutOfRange, "p"),
        (2.0, 10.0, f64::NAN, None, ErrorKind::InvalidArgument, "p"),
        (2.0, 10.0, 0.5, Some("bogus"), ErrorKind::OutOfRange, "alternative"),
        // Earlier checks win over later ones
        (-1.0, 0.5, 7.0, Some("bogus"), ErrorKind::InvalidArgument, "x"),
    ];

    for (x, n, p, alternative, kind, parameter) in cases {
        let err = BinomialTest::from_raw(x, n, p, alternative).unwrap_err();
        assert_eq!(err.kind(), kind, "({x}, {n}, {p}, {alternative:?}): {err}");
        assert_eq!(err.parameter(), Some(parameter), "({x}, {n}, {p}, {alternative:?}): {err}");
    }

    assert_eq!(
        binom_test(3, 2, 0.5, Alternative::TwoSided).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        binom_test(2, 10, -0.5, Alternative::Less).unwrap_err().kind(),
        ErrorKind::OutOfRange
    );
}

#[test]
fn test_raw_and_typed_entry_points_agree() {
    let raw = BinomialTest::from_raw(682.0, 925.0, 0.75, None).unwrap();
    assert_eq!(raw.alternative(), Alternative::TwoSided);
    assert_eq!(raw.successes(), 682);
    assert_eq!(raw.trials(), 925);

    let typed = BinomialTest::new(682, 925, 0.75, Alternative::TwoSided).unwrap();
    assert!((raw.p_value() - typed.p_value()).abs() < f64::EPSILON);

    let report = typed.report();
    assert!((report.estimate - 682.0 / 925.0).abs() < 1e-12);
    assert!((report.p_value - typed.p_value()).abs() < f64::EPSILON);
    assert!(report.to_string().contains("not equal to 0.75"));
}

#[test]
fn test_cdf_and_pmf_outside_support() {
    assert!(binomial_cdf(-1, 10, 0.4).unwrap().abs() < f64::EPSILON);
    assert!((binomial_cdf(10, 10, 0.4).unwrap() - 1.0).abs() < f64::EPSILON);
    assert!((binomial_cdf(25, 10, 0.4).unwrap() - 1.0).abs() < f64::EPSILON);
    assert!(binomial_pmf(-1, 10, 0.4).unwrap().abs() < f64::EPSILON);
    assert!(binomial_pmf(11, 10, 0.4).unwrap().abs() < f64::EPSILON);
    assert!(binomial_cdf(3, 10, 1.4).is_err());
}
