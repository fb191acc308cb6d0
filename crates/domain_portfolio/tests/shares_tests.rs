//! Tests for whole-share planning

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_portfolio::{calculate_shares_to_buy, ShareInfo};

mod quantizer_tests {
    use super::*;

    #[test]
    fn test_exact_multiple() {
        assert_eq!(calculate_shares_to_buy(dec!(2000.00), dec!(20.00)), 100);
    }

    #[test]
    fn test_remainder_is_dropped() {
        assert_eq!(calculate_shares_to_buy(dec!(105.00), dec!(10.00)), 10);
        assert_eq!(calculate_shares_to_buy(dec!(89.9999), dec!(10)), 8);
        assert_eq!(calculate_shares_to_buy(dec!(89.9999), dec!(9.99)), 9);
    }

    #[test]
    fn test_amount_below_one_share() {
        assert_eq!(calculate_shares_to_buy(dec!(9.99), dec!(10.00)), 0);
    }

    #[test]
    fn test_guarded_inputs() {
        assert_eq!(calculate_shares_to_buy(dec!(100), Decimal::ZERO), 0);
        assert_eq!(calculate_shares_to_buy(dec!(100), dec!(-4.99)), 0);
        assert_eq!(calculate_shares_to_buy(Decimal::ZERO, dec!(23.81)), 0);
        assert_eq!(calculate_shares_to_buy(dec!(-40.99), dec!(23.81)), 0);
        assert_eq!(calculate_shares_to_buy(dec!(-40.99), dec!(-23.81)), 0);
    }

    #[test]
    fn test_repeating_quotient() {
        // 100 / 3 carries 28 digits; the floor must still be 33
        assert_eq!(calculate_shares_to_buy(dec!(100), dec!(3)), 33);
        assert_eq!(calculate_shares_to_buy(dec!(99.999999999), dec!(33.333333333)), 3);
    }

    #[test]
    fn test_huge_quotient_saturates() {
        assert_eq!(calculate_shares_to_buy(Decimal::MAX, dec!(0.0000001)), u64::MAX);
    }
}

mod share_info_tests {
    use super::*;

    #[test]
    fn test_share_info_carries_price() {
        let info = ShareInfo::new(dec!(632.50), dec!(50.00));
        assert_eq!(info.market_price, dec!(50.00));
        assert_eq!(info.shares_to_buy, 12);
        assert_eq!(info.cost(), dec!(600.00));
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::{amount_strategy, price_strategy};

    proptest! {
        #[test]
        fn shares_never_cost_more_than_amount(
            amount in amount_strategy(),
            price in price_strategy(),
        ) {
            let shares = Decimal::from(calculate_shares_to_buy(amount, price));
            prop_assert!(shares * price <= amount);
            prop_assert!((shares + Decimal::ONE) * price > amount);
        }
    }
}
