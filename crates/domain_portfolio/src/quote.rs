//! Investment quotes
//!
//! A quote is a purchase plan dressed up for display: lines ordered by amount
//! rather than by funding priority, each with a whole-share count when a market
//! price is known.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{HoldingId, PlanId};

use crate::holding::Ticker;
use crate::plan::PurchasePlan;
use crate::shares::ShareInfo;

/// One holding's share of a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub holding_id: Option<HoldingId>,
    pub ticker: Ticker,
    pub amount: Decimal,
    /// Present when the holding's market price is known and positive
    pub share_info: Option<ShareInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentQuote {
    pub id: PlanId,
    pub amount_to_invest: Decimal,
    /// Largest amount first
    pub lines: Vec<QuoteLine>,
    pub generated_at: DateTime<Utc>,
}

impl InvestmentQuote {
    /// Builds a quote from a plan and whatever prices are available
    pub fn from_plan(plan: &PurchasePlan, prices: &HashMap<Ticker, Decimal>) -> Self {
        let mut lines: Vec<QuoteLine> = plan
            .iter()
            .map(|entry| QuoteLine {
                holding_id: entry.holding.id,
                ticker: entry.holding.ticker.clone(),
                amount: entry.amount,
                share_info: prices
                    .get(&entry.holding.ticker)
                    .filter(|price| **price > Decimal::ZERO)
                    .map(|price| ShareInfo::new(entry.amount, *price)),
            })
            .collect();
        lines.sort_by(|a, b| b.amount.cmp(&a.amount));

        Self {
            id: PlanId::new_v7(),
            amount_to_invest: plan.amount_to_invest(),
            lines,
            generated_at: Utc::now(),
        }
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|line| line.amount).sum()
    }

    pub fn line(&self, ticker: &Ticker) -> Option<&QuoteLine> {
        self.lines.iter().find(|line| &line.ticker == ticker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::calculate_purchase_amounts;
    use crate::holding::Holding;
    use rust_decimal_macros::dec;

    #[test]
    fn test_lines_sorted_by_amount_with_shares() {
        let holdings = vec![
            Holding::new(Ticker::parse("A").unwrap(), dec!(50), dec!(1950.00)),
            Holding::new(Ticker::parse("B").unwrap(), dec!(25), dec!(600.00)),
            Holding::new(Ticker::parse("C").unwrap(), dec!(25), dec!(340.00)),
        ];
        let plan = calculate_purchase_amounts(&holdings, dec!(1000.00)).unwrap();
        let prices = HashMap::from([
            (Ticker::parse("C").unwrap(), dec!(50.00)),
            (Ticker::parse("B").unwrap(), dec!(0)),
        ]);

        let quote = InvestmentQuote::from_plan(&plan, &prices);
        let order: Vec<&str> = quote.lines.iter().map(|l| l.ticker.as_str()).collect();
        assert_eq!(order, vec!["C", "B", "A"]);
        assert_eq!(quote.lines[0].share_info.as_ref().map(|s| s.shares_to_buy), Some(12));
        assert!(quote.lines[1].share_info.is_none());
        assert_eq!(quote.total(), dec!(1000.00));
    }
}
