//! Integration tests for module exports.
//!
//! Verify that all public modules and types are reachable via absolute paths.

/// Rounding helpers are accessible via absolute path.
#[test]
fn test_math_module_exports() {
    use pricer_core::math::rounding::{round_quote, round_to_decimals, QUOTE_DECIMALS};
    use pricer_core::math::{round_quote as reexported_round_quote, round_to_decimals as rtd};

    assert_eq!(QUOTE_DECIMALS, 2);
    assert_eq!(round_quote(1.006_f64), 1.01);
    assert_eq!(reexported_round_quote(1.006_f64), 1.01);
    assert_eq!(round_to_decimals(1.06_f64, 1), rtd(1.06_f64, 1));
}

/// Time types are accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::time::BusinessDayConvention;
    use pricer_core::types::time::Date;
    use pricer_core::types::time::DayCountConvention;

    let start = Date::from_ymd(2024, 1, 1).unwrap();
    let end = Date::from_ymd(2024, 7, 1).unwrap();
    let yf = DayCountConvention::ActualActual365.year_fraction_dates(start, end);
    assert!((yf - 182.0 / 365.0).abs() < 1e-12);

    let adjusted = BusinessDayConvention::Preceding.adjust(end).unwrap();
    assert_eq!(adjusted, end); // Monday
}

/// Re-exports at `types` level match the originals.
#[test]
fn test_types_reexports() {
    use pricer_core::types::{BusinessDayConvention, Date, DateError, PricingError};

    let err: DateError = Date::from_ymd(2024, 2, 30).unwrap_err();
    assert_eq!(
        err,
        DateError::InvalidDate {
            year: 2024,
            month: 2,
            day: 30
        }
    );

    let pricing = PricingError::UnsupportedInstrument("STRADDLE".to_string());
    assert!(pricing.to_string().contains("STRADDLE"));

    let saturday = Date::from_ymd(2024, 6, 29).unwrap();
    assert_eq!(
        BusinessDayConvention::Preceding.adjust(saturday).unwrap(),
        Date::from_ymd(2024, 6, 28).unwrap()
    );
}
