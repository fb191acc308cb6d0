//! Decimal money helpers with explicit rounding strategies
//!
//! All monetary math in the system runs on `rust_decimal::Decimal`. Rounding is
//! never implicit: callers pick banker's rounding for intermediate values and
//! truncation when comparing audited totals.
//!
//! This module also owns the raw currency-input convention used by entry
//! surfaces: the user types digits only and the last two digits are cents, so
//! `"1050"` means `10.50`.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of fractional digits for currency amounts
pub const CURRENCY_SCALE: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow during calculation")]
    Overflow,
}

/// Rounds using banker's rounding (round half to even)
///
/// The result always carries exactly `dp` fractional digits, padding with
/// zeros when `value` has fewer. Downstream arithmetic depends on that scale:
/// `0.4 * 10000.0` is `4000.00` but `0.400 * 10000.0` is `4000.0000`.
///
/// # Example
///
/// ```rust
/// use core_kernel::round_half_even;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_half_even(dec!(2.0005), 3), dec!(2.000));
/// assert_eq!(round_half_even(dec!(2.0015), 3), dec!(2.002));
/// assert_eq!(round_half_even(dec!(0.4), 3).scale(), 3);
/// ```
pub fn round_half_even(value: Decimal, dp: u32) -> Decimal {
    with_scale(value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven), dp)
}

/// Truncates toward zero to exactly `dp` fractional digits
///
/// ```rust
/// use core_kernel::truncate;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(truncate(dec!(1012.009), 2), dec!(1012.00));
/// assert_eq!(truncate(dec!(-40.999), 2), dec!(-40.99));
/// ```
pub fn truncate(value: Decimal, dp: u32) -> Decimal {
    with_scale(value.round_dp_with_strategy(dp, RoundingStrategy::ToZero), dp)
}

/// Pads an already-rounded value with trailing zeros up to `dp` digits
fn with_scale(mut rounded: Decimal, dp: u32) -> Decimal {
    rounded.rescale(dp);
    rounded
}

/// Converts raw digit input into a currency amount
///
/// Every non-digit character is ignored and the last two digits are cents:
///
/// * `"7802391"` is `78023.91`
/// * `"10100"` is `101.00`
/// * `"1"` is `0.01`
/// * `""` is `0.00`
///
/// # Errors
///
/// Returns `MoneyError::Overflow` when the digits do not fit in a `Decimal`.
pub fn parse_raw_currency(raw: &str) -> Result<Decimal, MoneyError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Ok(Decimal::new(0, CURRENCY_SCALE));
    }

    let minor_units: i128 = digits.parse().map_err(|_| MoneyError::Overflow)?;
    Decimal::try_from_i128_with_scale(minor_units, CURRENCY_SCALE)
        .map_err(|_| MoneyError::Overflow)
}

/// Converts an amount back into the raw digit convention
///
/// The fraction is truncated to two digits and the sign is dropped, since the
/// raw convention carries neither.
///
/// ```rust
/// use core_kernel::to_raw_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(to_raw_currency(dec!(78023.91)), "7802391");
/// assert_eq!(to_raw_currency(dec!(101)), "10100");
/// ```
pub fn to_raw_currency(amount: Decimal) -> String {
    let truncated = truncate(amount.abs(), CURRENCY_SCALE);
    let whole = truncated.trunc();
    let cents = ((truncated - whole) * Decimal::ONE_HUNDRED).trunc();
    format!("{}{:0>2}", whole, cents)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn raw_currency_round_trips_minor_units(minor in 0i64..1_000_000_000_000i64) {
            let amount = Decimal::new(minor, CURRENCY_SCALE);
            let raw = to_raw_currency(amount);
            prop_assert_eq!(parse_raw_currency(&raw).unwrap(), amount);
        }

        #[test]
        fn truncation_is_bounded_by_one_cent(minor in -1_000_000_000i64..1_000_000_000i64) {
            let value = Decimal::new(minor, 4);
            let truncated = truncate(value, CURRENCY_SCALE);
            prop_assert!((value - truncated).abs() < Decimal::new(1, CURRENCY_SCALE));
        }
    }
}
