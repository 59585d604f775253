//! Black-76 pricing model for European commodity options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! When pricing from dates, T is the ACT/365 year fraction between the
//! valuation date and the expiration date, rounded to two decimals. The
//! resulting present value is rounded to two decimals as well.

use num_traits::Float;
use pricer_core::math::rounding::round_quote;
use pricer_core::types::{Date, DayCountConvention};

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// Black-76 model for European option pricing.
///
/// Holds the market side of the formula (spot, rate, volatility); strike
/// and expiry are supplied per option.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::Black76;
///
/// let model = Black76::new(78.94_f64, 0.2, 0.3).unwrap();
/// let call = model.price_call(100.0, 0.59);
/// let put = model.price_put(100.0, 0.59);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (78.94 - 100.0 * (-0.2_f64 * 0.59).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Black76<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> Black76<T> {
    /// Creates a new Black-76 model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, any sign)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::Black76;
    ///
    /// assert!(Black76::new(78.94_f64, 0.2, 0.3).is_ok());
    /// assert!(Black76::new(-1.0_f64, 0.2, 0.3).is_err());
    /// assert!(Black76::new(78.94_f64, 0.2, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if !spot.is_finite() || spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !volatility.is_finite() || volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T).
    ///
    /// `expiry` must be positive. A zero strike yields `+∞`.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let two = T::one() + T::one();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + self.volatility * self.volatility / two) * expiry;

        (log_moneyness + drift) / (self.volatility * expiry.sqrt())
    }

    /// Computes d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Unrounded call price. `expiry` must be positive.
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Unrounded put price. `expiry` must be positive.
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Prices a call or put, rejecting a non-positive time to expiry.
    ///
    /// # Errors
    /// `AnalyticalError::NonPositiveTimeToExpiry` if `expiry <= 0` or is NaN.
    pub fn price(&self, option_type: OptionType, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        if expiry.is_nan() || expiry <= T::zero() {
            return Err(AnalyticalError::NonPositiveTimeToExpiry {
                time_to_expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        })
    }
}

/// Time to expiry in years: ACT/365 from `today` to `expiration_date`,
/// rounded to two decimals.
///
/// # Examples
/// ```
/// use pricer_core::types::Date;
/// use pricer_models::analytical::time_to_expiry;
///
/// let today = Date::from_ymd(2023, 4, 29).unwrap();
/// let expiry = Date::from_ymd(2023, 11, 30).unwrap();
/// assert_eq!(time_to_expiry(expiry, today), 0.59);
/// ```
pub fn time_to_expiry(expiration_date: Date, today: Date) -> f64 {
    round_quote(DayCountConvention::ActualActual365.year_fraction_dates(today, expiration_date))
}

/// Present value of a typed option, rounded to two decimals.
///
/// # Errors
/// Propagates the spot, volatility and time-to-expiry guards of [`Black76`].
pub fn present_value(
    expiration_date: Date,
    strike: f64,
    option_type: OptionType,
    rate: f64,
    volatility: f64,
    spot: f64,
    today: Date,
) -> Result<f64, AnalyticalError> {
    let model = Black76::new(spot, rate, volatility)?;
    let expiry = time_to_expiry(expiration_date, today);
    model
        .price(option_type, strike, expiry)
        .map(round_quote)
}

/// Prices an option whose type is given as text (`"CALL"`/`"PUT"`, any case).
///
/// # Errors
/// - `AnalyticalError::UnknownOptionType` for any other option type
/// - the guards of [`present_value`]
///
/// # Examples
/// ```
/// use pricer_core::types::Date;
/// use pricer_models::analytical::price_option;
///
/// let expiry = Date::from_ymd(2023, 11, 30).unwrap();
/// let today = Date::from_ymd(2023, 4, 29).unwrap();
///
/// let pv = price_option(expiry, 100.0, "CALL", 0.2, 0.3, 78.94, today).unwrap();
/// assert_eq!(pv, 3.72);
///
/// assert!(price_option(expiry, 100.0, "STRADDLE", 0.2, 0.3, 78.94, today).is_err());
/// ```
pub fn price_option(
    expiration_date: Date,
    strike: f64,
    option_type: &str,
    rate: f64,
    volatility: f64,
    spot: f64,
    today: Date,
) -> Result<f64, AnalyticalError> {
    let option_type: OptionType = option_type.parse()?;
    present_value(
        expiration_date,
        strike,
        option_type,
        rate,
        volatility,
        spot,
        today,
    )
}
