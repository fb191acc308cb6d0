//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for purchase plans that give more
//! meaningful error messages than standard assertions.

use core_kernel::{truncate, CURRENCY_SCALE};
use domain_portfolio::{Holding, PurchasePlan};
use rust_decimal::Decimal;

/// Asserts that a plan's total truncates to the invested amount
///
/// # Panics
///
/// Panics if the two differ at currency precision
pub fn assert_plan_sums_to(plan: &PurchasePlan, amount_to_invest: Decimal) {
    let expected = truncate(amount_to_invest, CURRENCY_SCALE);
    let actual = truncate(plan.total(), CURRENCY_SCALE);
    assert_eq!(
        actual, expected,
        "Plan total {} does not truncate to invested amount {} (entries: {:?})",
        plan.total(),
        amount_to_invest,
        plan.iter().map(|e| (e.holding.ticker.as_str(), e.amount)).collect::<Vec<_>>()
    );
}

/// Asserts the order in which the plan funds its holdings
pub fn assert_funding_order(plan: &PurchasePlan, expected: &[&str]) {
    let actual: Vec<&str> = plan.funding_order().iter().map(|t| t.as_str()).collect();
    assert_eq!(actual, expected, "Unexpected funding order");
}

/// Asserts the amount planned for a ticker
///
/// # Panics
///
/// Panics if the ticker is missing from the plan or its amount differs
pub fn assert_planned_amount(plan: &PurchasePlan, symbol: &str, expected: Decimal) {
    let entry = plan
        .iter()
        .find(|e| e.holding.ticker.as_str() == symbol)
        .unwrap_or_else(|| panic!("No plan entry for {symbol}"));
    assert_eq!(
        entry.amount, expected,
        "Planned amount for {symbol}: expected {expected}, got {}",
        entry.amount
    );
}

/// Asserts the plan has exactly one entry per holding
pub fn assert_plan_covers(plan: &PurchasePlan, holdings: &[Holding]) {
    assert_eq!(plan.len(), holdings.len(), "Plan entry count differs from holdings");
    for holding in holdings {
        assert!(
            plan.get(&holding.key()).is_some(),
            "Holding {} is missing from the plan",
            holding.key()
        );
    }
}
