//! Purchase allocation
//!
//! Spreads a new lump sum across holdings so the portfolio moves toward its
//! target allocation. Holdings furthest below their ideal amount, measured
//! relative to that ideal, are topped up first; each is funded up to its ideal
//! before money spills to the next one. Over-allocated holdings sort last and
//! only see money once everyone else has reached their ideal.
//!
//! A final reconciliation step forces the plan total to truncate to exactly the
//! requested amount, whatever drift the 3-digit intermediate rounding left.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use core_kernel::{round_half_even, truncate, CURRENCY_SCALE};
use crate::error::AllocationError;
use crate::holding::Holding;
use crate::plan::{PlannedPurchase, PurchasePlan};
use crate::shares::calculate_shares_to_buy;
use crate::{FULL_ALLOCATION, INTERMEDIATE_SCALE};

/// A policy for turning an amount to invest into a purchase plan
pub trait InvestmentCalculationStrategy: Send + Sync {
    /// Computes how much of `amount_to_invest` goes to each holding
    fn calculate_purchase_amounts(
        &self,
        holdings: &[Holding],
        amount_to_invest: Decimal,
    ) -> Result<PurchasePlan, AllocationError>;

    /// Whole shares `investment_amount` buys at `market_price`
    fn calculate_shares_to_buy(&self, investment_amount: Decimal, market_price: Decimal) -> u64 {
        calculate_shares_to_buy(investment_amount, market_price)
    }
}

/// Available allocation policies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Fund the largest relative shortfall first
    #[default]
    PriorityShortfall,
}

impl StrategyKind {
    /// Builds the strategy for this kind
    pub fn build(self) -> Box<dyn InvestmentCalculationStrategy> {
        match self {
            StrategyKind::PriorityShortfall => Box::new(PriorityShortfallStrategy),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::PriorityShortfall => "priority_shortfall",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "priority_shortfall" => Ok(StrategyKind::PriorityShortfall),
            other => Err(format!("unknown allocation strategy: {other}")),
        }
    }
}

/// Greedy allocation by relative shortfall
///
/// Ties in priority keep the order the holdings were given in.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityShortfallStrategy;

/// A holding with its precomputed ideal amount and priority
struct Ranked<'a> {
    holding: &'a Holding,
    ideal: Decimal,
    priority: Option<Decimal>,
}

impl InvestmentCalculationStrategy for PriorityShortfallStrategy {
    fn calculate_purchase_amounts(
        &self,
        holdings: &[Holding],
        amount_to_invest: Decimal,
    ) -> Result<PurchasePlan, AllocationError> {
        if holdings.is_empty() {
            return Ok(PurchasePlan::empty(amount_to_invest));
        }
        validate(holdings, amount_to_invest)?;

        let total_current: Decimal = holdings.iter().map(|h| h.current_invested_amount).sum();
        let total_after_investment = total_current + amount_to_invest;

        let mut ranked: Vec<Ranked<'_>> = holdings
            .iter()
            .map(|holding| {
                let ideal = holding.ideal_amount(total_after_investment);
                Ranked {
                    holding,
                    ideal,
                    priority: priority_score(ideal, holding.current_invested_amount),
                }
            })
            .collect();

        // Stable: equal priorities keep input order. `None` sorts below every score.
        ranked.sort_by(|a, b| b.priority.cmp(&a.priority));

        let mut amount_left = round_half_even(amount_to_invest, INTERMEDIATE_SCALE);
        let mut entries = Vec::with_capacity(ranked.len());
        for Ranked { holding, ideal, priority } in ranked {
            let amount = if amount_left <= Decimal::ZERO {
                Decimal::ZERO
            } else {
                let needed = round_half_even(ideal - holding.current_invested_amount, INTERMEDIATE_SCALE);
                if amount_left >= needed {
                    amount_left -= needed;
                    needed
                } else {
                    std::mem::replace(&mut amount_left, Decimal::ZERO)
                }
            };
            entries.push(PlannedPurchase {
                holding: holding.clone(),
                amount,
                priority,
            });
        }

        reconcile(&mut entries, amount_to_invest);
        Ok(PurchasePlan::new(amount_to_invest, entries))
    }
}

/// Computes a purchase plan with the default strategy
///
/// # Errors
///
/// * `AllocationError::InvalidAllocation` if a desired percentage is outside 0-100
/// * `AllocationError::NegativeInvestment` if `amount_to_invest` is negative
/// * `AllocationError::DuplicateHolding` if two holdings share a `HoldingKey`
///
/// An empty `holdings` slice yields an empty plan.
pub fn calculate_purchase_amounts(
    holdings: &[Holding],
    amount_to_invest: Decimal,
) -> Result<PurchasePlan, AllocationError> {
    PriorityShortfallStrategy.calculate_purchase_amounts(holdings, amount_to_invest)
}

fn validate(holdings: &[Holding], amount_to_invest: Decimal) -> Result<(), AllocationError> {
    if let Some(invalid) = holdings
        .iter()
        .find(|h| h.desired_percentage > FULL_ALLOCATION || h.desired_percentage < Decimal::ZERO)
    {
        return Err(AllocationError::InvalidAllocation {
            ticker: invalid.ticker.to_string(),
            percentage: invalid.desired_percentage,
        });
    }
    if amount_to_invest < Decimal::ZERO {
        return Err(AllocationError::NegativeInvestment(amount_to_invest));
    }
    let mut seen = HashSet::with_capacity(holdings.len());
    if let Some(duplicate) = holdings.iter().map(Holding::key).find(|key| !seen.insert(key.clone())) {
        return Err(AllocationError::DuplicateHolding(duplicate.to_string()));
    }
    Ok(())
}

/// Relative shortfall `(ideal - current) / ideal`
///
/// Rounded half-to-even at the shortfall's own scale, never fewer than 3
/// digits. A zero ideal has no score.
fn priority_score(ideal: Decimal, current: Decimal) -> Option<Decimal> {
    let shortfall = ideal - current;
    let scale = shortfall.scale().max(INTERMEDIATE_SCALE);
    shortfall
        .checked_div(ideal)
        .map(|score| round_half_even(score, scale))
}

/// Forces the plan total to truncate to the requested amount
///
/// A shortfall is added to the first entry. An excess is drawn from entries in
/// funding order without taking any of them below zero; whatever cannot be
/// absorbed that way comes off the first entry.
///
/// Over-allocated holdings can carry negative amounts when the desired
/// percentages add up to less than 100. A total in `(-0.01, 0)` truncates to
/// zero, so the cent-sized correction above can still leave the total one cent
/// short; the first entry then takes the exact remainder.
fn reconcile(entries: &mut [PlannedPurchase], amount_to_invest: Decimal) {
    if entries.is_empty() {
        return;
    }

    let requested = truncate(amount_to_invest, CURRENCY_SCALE);
    let calculated = truncate(plan_total(entries), CURRENCY_SCALE);

    match requested.cmp(&calculated) {
        Ordering::Equal => {}
        Ordering::Greater => {
            entries[0].amount += requested - calculated;
        }
        Ordering::Less => {
            let mut excess = calculated - requested;
            for entry in entries.iter_mut() {
                if excess.is_zero() {
                    break;
                }
                let taken = entry.amount.max(Decimal::ZERO).min(excess);
                entry.amount -= taken;
                excess -= taken;
            }
            if !excess.is_zero() {
                entries[0].amount -= excess;
            }
        }
    }

    let total = plan_total(entries);
    if truncate(total, CURRENCY_SCALE) != requested {
        entries[0].amount += requested - total;
    }
}

fn plan_total(entries: &[PlannedPurchase]) -> Decimal {
    entries.iter().map(|e| e.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holding::Ticker;
    use rust_decimal_macros::dec;

    fn holding(symbol: &str, current: Decimal, percentage: Decimal) -> Holding {
        Holding::new(Ticker::parse(symbol).unwrap(), percentage, current)
    }

    #[test]
    fn test_priority_score_is_relative() {
        // $100 short of $200 outranks $100 short of $10,000
        let small = priority_score(dec!(200), dec!(100)).unwrap();
        let large = priority_score(dec!(10000), dec!(9900)).unwrap();
        assert!(small > large);
        assert_eq!(small, dec!(0.500));
        assert_eq!(large, dec!(0.010));
    }

    #[test]
    fn test_priority_score_of_zero_ideal() {
        assert_eq!(priority_score(Decimal::ZERO, dec!(50)), None);
    }

    #[test]
    fn test_priority_score_keeps_shortfall_scale() {
        // (7752.43500 - 6141.30) / 7752.43500 at 5 digits
        assert_eq!(priority_score(dec!(7752.43500), dec!(6141.30)), Some(dec!(0.20782)));
    }

    #[test]
    fn test_zero_target_sorts_last() {
        let holdings = vec![
            holding("CASH", dec!(0), dec!(0)),
            holding("VTI", dec!(100), dec!(100)),
        ];

        let plan = calculate_purchase_amounts(&holdings, dec!(50)).unwrap();
        assert_eq!(plan.entries()[0].holding.ticker.as_str(), "VTI");
        assert_eq!(plan.entries()[0].amount, dec!(50));
        assert_eq!(plan.entries()[1].amount, Decimal::ZERO);
        assert_eq!(plan.entries()[1].priority, None);
    }

    #[test]
    fn test_reconcile_adds_shortfall_to_first_entry() {
        let mut entries = vec![
            PlannedPurchase { holding: holding("A", dec!(0), dec!(50)), amount: dec!(5.004), priority: None },
            PlannedPurchase { holding: holding("B", dec!(0), dec!(50)), amount: dec!(4.995), priority: None },
        ];
        reconcile(&mut entries, dec!(10.00));
        assert_eq!(entries[0].amount, dec!(5.014));
        assert_eq!(truncate(entries[0].amount + entries[1].amount, 2), dec!(10.00));
    }

    #[test]
    fn test_reconcile_never_drives_first_entry_negative() {
        let mut entries = vec![
            PlannedPurchase { holding: holding("A", dec!(0), dec!(50)), amount: dec!(0.005), priority: None },
            PlannedPurchase { holding: holding("B", dec!(0), dec!(50)), amount: dec!(0.005), priority: None },
        ];
        reconcile(&mut entries, dec!(0.0099999));
        assert_eq!(entries[0].amount, Decimal::ZERO);
        assert_eq!(entries[1].amount, Decimal::ZERO);
    }

    #[test]
    fn test_reconcile_recovers_from_negative_total() {
        // An over-allocated holding took -0.010, leaving the total at -0.005
        let mut entries = vec![
            PlannedPurchase { holding: holding("B", dec!(0), dec!(0.1)), amount: dec!(0.005), priority: None },
            PlannedPurchase { holding: holding("A", dec!(4.99), dec!(99.6)), amount: dec!(-0.010), priority: None },
        ];
        reconcile(&mut entries, dec!(0.01));
        assert_eq!(entries[0].amount, dec!(0.020));
        assert_eq!(entries[1].amount, dec!(-0.010));
        assert_eq!(truncate(plan_total(&entries), 2), dec!(0.01));
    }

    #[test]
    fn test_strategy_kind_parsing() {
        assert_eq!("priority-shortfall".parse::<StrategyKind>(), Ok(StrategyKind::PriorityShortfall));
        assert!("round_robin".parse::<StrategyKind>().is_err());
        assert_eq!(StrategyKind::default().to_string(), "priority_shortfall");
    }
}
