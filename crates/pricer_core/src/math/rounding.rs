//! Decimal rounding for reported quantities.
//!
//! Present values and the coarse ACT/365 time-to-expiry are quoted to two
//! decimal places. Rounding is decided on the exact binary value of the
//! input, ties to even, so `1.115` (stored as 1.11499...) quotes as `1.11`
//! and an exact tie such as `0.125` quotes as `0.12`.

use num_traits::Float;

/// Decimal places used for quoted present values and year fractions.
pub const QUOTE_DECIMALS: i32 = 2;

/// Rounds `value` to `places` decimal places.
///
/// The result is the float nearest to the correctly rounded decimal.
/// Halfway cases, judged on the exact value of `value`, go to the even
/// neighbour. Negative `places` round to tens, hundreds and so on.
/// Non-finite inputs are returned unchanged.
///
/// Exact for `places` up to 22 on `f64` (10 on `f32`), where the power of
/// ten is itself representable.
///
/// # Examples
/// ```
/// use pricer_core::math::rounding::round_to_decimals;
///
/// assert_eq!(round_to_decimals(3.7212_f64, 2), 3.72);
/// assert_eq!(round_to_decimals(215.0_f64 / 365.0, 2), 0.59);
/// assert_eq!(round_to_decimals(1.115_f64, 2), 1.11);
/// assert_eq!(round_to_decimals(2.5_f64, 0), 2.0);
/// assert_eq!(round_to_decimals(1250.0_f64, -2), 1200.0);
/// ```
pub fn round_to_decimals<T: Float>(value: T, places: i32) -> T {
    if !value.is_finite() {
        return value;
    }
    let ten = T::from(10.0).unwrap_or_else(T::one);
    let scale = ten.powi(places.abs());
    if !scale.is_finite() {
        return if places > 0 { value } else { T::zero() * value.signum() };
    }

    // exact scaled value is `scaled + residual`
    let (scaled, residual) = if places >= 0 {
        let scaled = value * scale;
        (scaled, value.mul_add(scale, -scaled))
    } else {
        let scaled = value / scale;
        (scaled, (-scaled).mul_add(scale, value) / scale)
    };
    if scaled.abs() >= T::one() / T::epsilon() {
        return value;
    }

    let two = T::one() + T::one();
    let lower = scaled.floor();
    let above_half = (scaled - (lower + T::one() / two)) + residual;
    let integral = if above_half > T::zero() {
        lower + T::one()
    } else if above_half < T::zero() || lower % two == T::zero() {
        lower
    } else {
        lower + T::one()
    };

    let rounded = if places >= 0 {
        integral / scale
    } else {
        integral * scale
    };
    if rounded == T::zero() && value.is_sign_negative() {
        -T::zero()
    } else {
        rounded
    }
}

/// Rounds to [`QUOTE_DECIMALS`] places.
#[inline]
pub fn round_quote<T: Float>(value: T) -> T {
    round_to_decimals(value, QUOTE_DECIMALS)
}
