//! Unit tests for the money helpers
//!
//! Covers the rounding strategies used by the allocation engine and the raw
//! digit-entry convention.

use core_kernel::{
    parse_raw_currency, round_half_even, to_raw_currency, truncate, MoneyError, CURRENCY_SCALE,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod rounding {
    use super::*;

    #[test]
    fn test_half_even_rounds_ties_to_even_digit() {
        assert_eq!(round_half_even(dec!(0.5205), 3), dec!(0.520));
        assert_eq!(round_half_even(dec!(0.5215), 3), dec!(0.522));
    }

    #[test]
    fn test_half_even_rounds_non_ties_normally() {
        assert_eq!(round_half_even(dec!(0.33333), 3), dec!(0.333));
        assert_eq!(round_half_even(dec!(0.66666), 3), dec!(0.667));
    }

    #[test]
    fn test_half_even_keeps_shorter_values_untouched() {
        assert_eq!(round_half_even(dec!(1000), 3), dec!(1000));
    }

    #[test]
    fn test_truncate_drops_digits_toward_zero() {
        assert_eq!(truncate(dec!(1000.999), 2), dec!(1000.99));
        assert_eq!(truncate(dec!(-0.019), 2), dec!(-0.01));
    }

    #[test]
    fn test_truncate_to_currency_scale() {
        assert_eq!(truncate(dec!(13029.4556), CURRENCY_SCALE), dec!(13029.45));
    }
}

mod raw_currency_input {
    use super::*;

    #[test]
    fn test_last_two_digits_are_cents() {
        assert_eq!(parse_raw_currency("7802391").unwrap(), dec!(78023.91));
        assert_eq!(parse_raw_currency("10100").unwrap(), dec!(101.00));
        assert_eq!(parse_raw_currency("1").unwrap(), dec!(0.01));
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(parse_raw_currency("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_raw_currency("abc").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_leading_zeros_are_ignored() {
        assert_eq!(parse_raw_currency("0001050").unwrap(), dec!(10.50));
    }

    #[test]
    fn test_parsed_amount_has_currency_scale() {
        assert_eq!(parse_raw_currency("101200").unwrap().scale(), CURRENCY_SCALE);
    }

    #[test]
    fn test_overflow_is_reported() {
        let raw = "9".repeat(40);
        assert_eq!(parse_raw_currency(&raw), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_to_raw_currency_pads_cents() {
        assert_eq!(to_raw_currency(dec!(101)), "10100");
        assert_eq!(to_raw_currency(dec!(10.5)), "1050");
        assert_eq!(to_raw_currency(dec!(0.01)), "001");
    }

    #[test]
    fn test_to_raw_currency_truncates_fraction() {
        assert_eq!(to_raw_currency(dec!(10.509)), "1050");
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_formatted_amount_parses_back(cents in 0i64..10_000_000_000) {
            let amount = Decimal::new(cents, CURRENCY_SCALE);
            let typed = format!("${amount}");

            prop_assert_eq!(parse_raw_currency(&typed).unwrap(), amount);
        }

        #[test]
        fn prop_truncate_never_grows(units in -1_000_000_000i64..1_000_000_000, scale in 0u32..6) {
            let value = Decimal::new(units, 5);
            let truncated = truncate(value, scale);

            prop_assert!(truncated.abs() <= value.abs());
            prop_assert!((value - truncated).abs() < Decimal::new(1, scale));
        }
    }
}
