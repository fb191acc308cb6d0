//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use domain_portfolio::Holding;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::holding;

/// Strategy for currency amounts from 0.00 to 10,000,000.00
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for amounts with sub-cent digits, from 0.0000 to 1,000,000.0000
pub fn fine_amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64, 3u32..=4).prop_map(|(units, scale)| Decimal::new(units, 4).round_dp(scale))
}

/// Strategy for market prices from 0.01 to 5,000.00
pub fn price_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..500_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for `n` desired percentages with one decimal that sum to exactly 100
pub fn percentage_split_strategy(n: usize) -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(0u32..=1000u32, n.saturating_sub(1)).prop_map(|mut cuts| {
        cuts.sort_unstable();
        let mut bounds = Vec::with_capacity(cuts.len() + 2);
        bounds.push(0u32);
        bounds.extend(cuts);
        bounds.push(1000u32);
        bounds
            .windows(2)
            .map(|w| Decimal::new(i64::from(w[1] - w[0]), 1))
            .collect()
    })
}

/// Strategy for a fully allocated portfolio of 1 to `max_holdings` holdings
///
/// Tickers are distinct (`T0`, `T1`, ...) and desired percentages sum to 100.
pub fn portfolio_strategy(max_holdings: usize) -> impl Strategy<Value = Vec<Holding>> {
    (1..=max_holdings.max(1))
        .prop_flat_map(|n| {
            (
                prop::collection::vec(amount_strategy(), n),
                percentage_split_strategy(n),
            )
        })
        .prop_map(|(amounts, percentages)| {
            amounts
                .into_iter()
                .zip(percentages)
                .enumerate()
                .map(|(i, (current, percentage))| holding(&format!("T{i}"), current, percentage))
                .collect()
        })
}

/// Strategy for a portfolio whose percentages are independent values in 0-100
///
/// The split may add up to less or more than 100 and current amounts carry
/// three decimals, which is everything the allocator accepts.
pub fn loose_portfolio_strategy(max_holdings: usize) -> impl Strategy<Value = Vec<Holding>> {
    prop::collection::vec(
        (0i64..1_000_000_000i64, 0i64..=10_000i64),
        1..=max_holdings.max(1),
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (mills, basis_points))| {
                holding(&format!("T{i}"), Decimal::new(mills, 3), Decimal::new(basis_points, 2))
            })
            .collect()
    })
}
