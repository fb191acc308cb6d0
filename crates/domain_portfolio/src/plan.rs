//! Purchase plans produced by the allocation engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holding::{Holding, HoldingKey, Ticker};

/// Amount planned for one holding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedPurchase {
    /// The holding as it was passed to the engine
    pub holding: Holding,
    /// Amount to invest in it
    pub amount: Decimal,
    /// Relative shortfall that ranked it; `None` when its ideal amount is zero
    pub priority: Option<Decimal>,
}

impl PlannedPurchase {
    pub fn key(&self) -> HoldingKey {
        self.holding.key()
    }
}

/// Per-holding purchase amounts, in funding-priority order
///
/// There is exactly one entry per holding handed to the engine, including
/// holdings that receive nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasePlan {
    amount_to_invest: Decimal,
    entries: Vec<PlannedPurchase>,
}

impl PurchasePlan {
    pub(crate) fn new(amount_to_invest: Decimal, entries: Vec<PlannedPurchase>) -> Self {
        Self {
            amount_to_invest,
            entries,
        }
    }

    /// A plan with no holdings
    pub fn empty(amount_to_invest: Decimal) -> Self {
        Self::new(amount_to_invest, Vec::new())
    }

    /// The amount the plan was computed for
    pub fn amount_to_invest(&self) -> Decimal {
        self.amount_to_invest
    }

    /// Entries in funding order, highest priority first
    pub fn entries(&self) -> &[PlannedPurchase] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlannedPurchase> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the entry planned for a holding
    pub fn get(&self, key: &HoldingKey) -> Option<&PlannedPurchase> {
        self.entries.iter().find(|entry| entry.holding.id == key.id && entry.holding.ticker == key.ticker)
    }

    /// Amount planned for a holding
    pub fn amount_for(&self, key: &HoldingKey) -> Option<Decimal> {
        self.get(key).map(|entry| entry.amount)
    }

    /// Sum of every planned amount
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|entry| entry.amount).sum()
    }

    /// Tickers in the order they are funded
    pub fn funding_order(&self) -> Vec<&Ticker> {
        self.entries.iter().map(|entry| &entry.holding.ticker).collect()
    }

    /// Merges the plan into `holdings`
    ///
    /// Each holding with a planned entry gets the planned amount added to its
    /// current invested amount; other holdings are returned unchanged. The
    /// input order is preserved.
    pub fn apply_to(&self, holdings: &[Holding]) -> Vec<Holding> {
        holdings
            .iter()
            .map(|holding| match self.amount_for(&holding.key()) {
                Some(amount) => holding.with_added_investment(amount),
                None => holding.clone(),
            })
            .collect()
    }

    pub fn into_entries(self) -> Vec<PlannedPurchase> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a PurchasePlan {
    type Item = &'a PlannedPurchase;
    type IntoIter = std::slice::Iter<'a, PlannedPurchase>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(symbol: &str, amount: Decimal) -> PlannedPurchase {
        PlannedPurchase {
            holding: Holding::new(Ticker::parse(symbol).unwrap(), dec!(50), dec!(100)),
            amount,
            priority: Some(dec!(0.5)),
        }
    }

    #[test]
    fn test_lookup_and_total() {
        let plan = PurchasePlan::new(dec!(30), vec![entry("A", dec!(20)), entry("B", dec!(10))]);
        let key = HoldingKey { id: None, ticker: Ticker::parse("B").unwrap() };

        assert_eq!(plan.amount_for(&key), Some(dec!(10)));
        assert_eq!(plan.total(), dec!(30));
        assert_eq!(plan.funding_order().len(), 2);
    }

    #[test]
    fn test_apply_to_adds_amounts() {
        let plan = PurchasePlan::new(dec!(20), vec![entry("A", dec!(20))]);
        let holdings = vec![
            Holding::new(Ticker::parse("A").unwrap(), dec!(50), dec!(100)),
            Holding::new(Ticker::parse("Z").unwrap(), dec!(50), dec!(100)),
        ];

        let updated = plan.apply_to(&holdings);
        assert_eq!(updated[0].current_invested_amount, dec!(120));
        assert_eq!(updated[1].current_invested_amount, dec!(100));
    }
}
