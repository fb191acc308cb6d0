//! Portfolio summary
//!
//! Totals and per-holding figures for the holdings overview. The summary also
//! decides whether investing is possible: only a portfolio whose desired
//! percentages add up to exactly 100 can be handed to the allocator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holding::{Holding, HoldingKey};
use crate::FULL_ALLOCATION;

/// One row of the overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingSummary {
    pub holding: Holding,
    /// Share of the portfolio the holding currently represents, out of 100
    pub actual_percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_invested: Decimal,
    pub total_desired_percentage: Decimal,
    /// Desired percentages add up to exactly 100
    pub is_invest_enabled: bool,
    /// Desired percentages leave room for another holding
    pub can_add_holding: bool,
    /// Highest desired percentage first
    pub holdings: Vec<HoldingSummary>,
}

impl PortfolioSummary {
    pub fn from_holdings(holdings: &[Holding]) -> Self {
        let total_invested: Decimal = holdings.iter().map(|h| h.current_invested_amount).sum();
        let total_desired_percentage: Decimal = holdings.iter().map(|h| h.desired_percentage).sum();

        let mut rows: Vec<HoldingSummary> = holdings
            .iter()
            .map(|holding| HoldingSummary {
                actual_percentage: holding.actual_percentage(total_invested),
                holding: holding.clone(),
            })
            .collect();
        rows.sort_by(|a, b| b.holding.desired_percentage.cmp(&a.holding.desired_percentage));

        Self {
            total_invested,
            total_desired_percentage,
            is_invest_enabled: total_desired_percentage == FULL_ALLOCATION,
            can_add_holding: total_desired_percentage < FULL_ALLOCATION,
            holdings: rows,
        }
    }

    /// Percentage still free for a holding being edited
    ///
    /// With `excluding` set, that holding's own share counts as free, which is
    /// what an edit form needs; with `None` it is the room left for a new one.
    pub fn available_percentage(&self, excluding: Option<&HoldingKey>) -> Decimal {
        let allocated: Decimal = self
            .holdings
            .iter()
            .filter(|row| excluding.map_or(true, |key| row.holding.key() != *key))
            .map(|row| row.holding.desired_percentage)
            .sum();
        FULL_ALLOCATION - allocated
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holding::Ticker;
    use rust_decimal_macros::dec;

    fn holding(symbol: &str, percentage: Decimal, current: Decimal) -> Holding {
        Holding::new(Ticker::parse(symbol).unwrap(), percentage, current)
    }

    #[test]
    fn test_totals_and_gating() {
        let summary = PortfolioSummary::from_holdings(&[
            holding("VTI", dec!(60), dec!(600)),
            holding("BND", dec!(40), dec!(400)),
        ]);

        assert_eq!(summary.total_invested, dec!(1000));
        assert_eq!(summary.total_desired_percentage, dec!(100));
        assert!(summary.is_invest_enabled);
        assert!(!summary.can_add_holding);
        assert_eq!(summary.holdings[0].actual_percentage, dec!(60));
    }

    #[test]
    fn test_partial_allocation_allows_adding() {
        let summary = PortfolioSummary::from_holdings(&[holding("VTI", dec!(70.5), dec!(0))]);

        assert!(!summary.is_invest_enabled);
        assert!(summary.can_add_holding);
        assert_eq!(summary.available_percentage(None), dec!(29.5));
        assert_eq!(summary.holdings[0].actual_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_sorted_by_desired_percentage() {
        let summary = PortfolioSummary::from_holdings(&[
            holding("BND", dec!(10), dec!(0)),
            holding("VTI", dec!(50), dec!(0)),
            holding("VXUS", dec!(10), dec!(0)),
        ]);
        let order: Vec<&str> = summary.holdings.iter().map(|r| r.holding.ticker.as_str()).collect();
        assert_eq!(order, vec!["VTI", "BND", "VXUS"]);
    }

    #[test]
    fn test_available_percentage_excluding_edited_holding() {
        let edited = holding("BND", dec!(30), dec!(0));
        let summary = PortfolioSummary::from_holdings(&[holding("VTI", dec!(60), dec!(0)), edited.clone()]);

        assert_eq!(summary.available_percentage(None), dec!(10));
        assert_eq!(summary.available_percentage(Some(&edited.key())), dec!(40));
    }
}
