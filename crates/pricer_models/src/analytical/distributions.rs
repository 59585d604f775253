//! Standard normal cumulative distribution function.
//!
//! `norm_cdf` is generic over `T: Float` and evaluates Φ with Hart's
//! double-precision rational approximation (algorithm 5666, in the form
//! published by G. West), so it needs nothing beyond `exp`.

use num_traits::Float;

/// Numerator coefficients of the central region, highest degree first.
const HART_NUM: [f64; 7] = [
    3.526_249_659_989_11e-2,
    0.700_383_064_443_688,
    6.373_962_203_531_65,
    33.912_866_078_383,
    112.079_291_497_871,
    221.213_596_169_931,
    220.206_867_912_376,
];

/// Denominator coefficients of the central region, highest degree first.
const HART_DEN: [f64; 8] = [
    8.838_834_764_831_84e-2,
    1.755_667_163_182_64,
    16.064_177_579_207,
    86.780_732_202_946_1,
    296.564_248_779_674,
    637.333_633_378_831,
    793.826_512_519_948,
    440.413_735_824_752,
];

/// Boundary between the rational and the continued-fraction region (10/√2).
const HART_SPLIT: f64 = 7.071_067_811_865_47;

/// Beyond this |x| the tail underflows and Φ is 0 or 1.
const TAIL_CUTOFF: f64 = 37.0;

/// √(2π)
const SQRT_2PI: f64 = 2.506_628_274_631;

#[inline]
fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

#[inline]
fn horner<T: Float>(coeffs: &[f64], x: T) -> T {
    coeffs
        .iter()
        .fold(T::zero(), |acc, &c| acc * x + lit::<T>(c))
}

/// Lower tail Φ(-a) for a ≥ 0.
///
/// Absolute error is below 1e-15 over the whole line; relative error in
/// the tail stays below 1e-8.
#[inline]
fn lower_tail<T: Float>(a: T) -> T {
    if a > lit::<T>(TAIL_CUTOFF) {
        return T::zero();
    }

    let gauss = (-a * a / lit::<T>(2.0)).exp();
    if a < lit::<T>(HART_SPLIT) {
        gauss * horner(&HART_NUM, a) / horner(&HART_DEN, a)
    } else {
        // continued fraction a + 1/(a + 2/(a + 3/(a + 4/(a + 0.65))))
        let fraction = [4.0, 3.0, 2.0, 1.0]
            .iter()
            .fold(a + lit::<T>(0.65), |acc, &k| a + lit::<T>(k) / acc);
        gauss / fraction / lit::<T>(SQRT_2PI)
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1). Accurate to double precision for
/// all finite x; Φ(x) + Φ(-x) = 1 up to one rounding, which keeps
/// put-call parity exact in the pricer.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0_f64), 0.5);
///
/// let cdf_1 = norm_cdf(1.0_f64);
/// assert!((cdf_1 - 0.841_344_746_068_542_9).abs() < 1e-15);
///
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let tail = lower_tail(x.abs());
    if x > T::zero() {
        T::one() - tail
    } else {
        tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        let test_values = [-3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0];
        for x in test_values {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(3.0_f64), 0.9986501019683699, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(0.5_f64), 0.6914624612740131, epsilon = 1e-14);
    }

    #[test]
    fn test_norm_cdf_far_tail() {
        // continued-fraction region
        assert_relative_eq!(norm_cdf(-8.0_f64), 6.220960574271819e-16, max_relative = 1e-7);
        assert_relative_eq!(norm_cdf(-10.0_f64), 7.619853024160593e-24, max_relative = 1e-7);
        assert_eq!(norm_cdf(-40.0_f64), 0.0);
        assert_eq!(norm_cdf(40.0_f64), 1.0);
    }

    #[test]
    fn test_norm_cdf_extreme_values() {
        let cdf_large_pos = norm_cdf(8.0_f64);
        assert!(cdf_large_pos > 0.999999);
        assert!(cdf_large_pos <= 1.0);

        let cdf_large_neg = norm_cdf(-8.0_f64);
        assert!(cdf_large_neg < 0.000001);
        assert!(cdf_large_neg >= 0.0);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(norm_cdf(pair[1]) > norm_cdf(pair[0]), "not monotonic at x = {}", pair[0]);
        }
    }

    #[test]
    fn test_norm_cdf_f32_compatibility() {
        let result = norm_cdf(0.0_f32);
        assert!((result - 0.5).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_norm_cdf_in_unit_interval(x in -40.0_f64..40.0) {
            let p = norm_cdf(x);
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}
