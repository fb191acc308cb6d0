//! Investment service
//!
//! Orchestrates the investing flow around the allocator: load holdings,
//! optionally revise their current values, compute a plan, attach share counts
//! from the price feed, and finally commit the plan back to the store.
//!
//! All collaborator calls finish before the allocator runs; the allocator only
//! ever sees a materialized list of holdings and a resolved amount.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

use core_kernel::HoldingId;

use crate::allocation::{InvestmentCalculationStrategy, StrategyKind};
use crate::error::PortfolioError;
use crate::holding::{Holding, Ticker};
use crate::plan::PurchasePlan;
use crate::ports::{HoldingPort, HoldingUpdate, MarketPricePort, NewHolding};
use crate::quote::InvestmentQuote;
use crate::summary::PortfolioSummary;
use crate::FULL_ALLOCATION;

pub struct InvestmentService {
    holdings: Arc<dyn HoldingPort>,
    prices: Arc<dyn MarketPricePort>,
    strategy: Box<dyn InvestmentCalculationStrategy>,
}

impl InvestmentService {
    /// Creates a service using the default allocation strategy
    pub fn new(holdings: Arc<dyn HoldingPort>, prices: Arc<dyn MarketPricePort>) -> Self {
        Self {
            holdings,
            prices,
            strategy: StrategyKind::default().build(),
        }
    }

    pub fn with_strategy(mut self, strategy: Box<dyn InvestmentCalculationStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn holding_port(&self) -> &Arc<dyn HoldingPort> {
        &self.holdings
    }

    // ------------------------------------------------------------------
    // Holdings
    // ------------------------------------------------------------------

    pub async fn list_holdings(&self) -> Result<Vec<Holding>, PortfolioError> {
        Ok(self.holdings.list_holdings().await?)
    }

    pub async fn get_holding(&self, id: HoldingId) -> Result<Holding, PortfolioError> {
        Ok(self.holdings.get_holding(id).await?)
    }

    pub async fn create_holding(&self, request: NewHolding) -> Result<Holding, PortfolioError> {
        Ok(self.holdings.create_holding(request).await?)
    }

    pub async fn update_holding(&self, id: HoldingId, update: HoldingUpdate) -> Result<Holding, PortfolioError> {
        Ok(self.holdings.update_holding(id, update).await?)
    }

    pub async fn delete_holding(&self, id: HoldingId) -> Result<(), PortfolioError> {
        Ok(self.holdings.delete_holding(id).await?)
    }

    /// Overview of the stored portfolio
    pub async fn summary(&self) -> Result<PortfolioSummary, PortfolioError> {
        let holdings = self.holdings.list_holdings().await?;
        Ok(PortfolioSummary::from_holdings(&holdings))
    }

    /// Overwrites the current invested amount of the listed holdings
    ///
    /// Used right before investing, when the stored values have drifted from
    /// what the brokerage account shows. Nothing is written unless every id
    /// exists.
    #[instrument(skip(self, updates), fields(count = updates.len()))]
    pub async fn revise_current_amounts(
        &self,
        updates: Vec<(HoldingId, Decimal)>,
    ) -> Result<Vec<Holding>, PortfolioError> {
        let revised = self.holdings.set_current_amounts(&updates).await?;
        info!(count = revised.len(), "Current amounts revised");
        Ok(revised)
    }

    // ------------------------------------------------------------------
    // Investing
    // ------------------------------------------------------------------

    /// Computes the purchase plan for the stored holdings
    ///
    /// # Errors
    ///
    /// * `PortfolioError::IncompleteAllocation` if the desired percentages of a
    ///   non-empty portfolio do not add up to exactly 100
    /// * `PortfolioError::Allocation` if the allocator rejects the input
    pub async fn plan(&self, amount_to_invest: Decimal) -> Result<PurchasePlan, PortfolioError> {
        let holdings = self.holdings.list_holdings().await?;
        self.plan_for(&holdings, amount_to_invest)
    }

    fn plan_for(&self, holdings: &[Holding], amount_to_invest: Decimal) -> Result<PurchasePlan, PortfolioError> {
        let total_percentage: Decimal = holdings.iter().map(|h| h.desired_percentage).sum();
        if !holdings.is_empty() && total_percentage != FULL_ALLOCATION {
            return Err(PortfolioError::IncompleteAllocation(total_percentage));
        }
        Ok(self.strategy.calculate_purchase_amounts(holdings, amount_to_invest)?)
    }

    /// Computes a plan and attaches whole-share counts
    ///
    /// A failing price feed does not fail the quote; its lines simply carry no
    /// share information.
    #[instrument(skip(self))]
    pub async fn quote(&self, amount_to_invest: Decimal) -> Result<InvestmentQuote, PortfolioError> {
        let plan = self.plan(amount_to_invest).await?;

        let tickers: Vec<Ticker> = plan.iter().map(|entry| entry.holding.ticker.clone()).collect();
        let prices = match self.prices.current_prices(&tickers).await {
            Ok(prices) => prices,
            Err(error) => {
                warn!(error = %error, "Price feed unavailable, quoting without share counts");
                Default::default()
            }
        };

        let quote = InvestmentQuote::from_plan(&plan, &prices);
        info!(quote_id = %quote.id, lines = quote.lines.len(), priced = prices.len(), "Investment quoted");
        Ok(quote)
    }

    /// Computes a plan and adds every planned amount to the stored holdings
    ///
    /// Returns the holdings as stored afterwards, in funding order. The plan is
    /// written in one batch, so a failure (e.g. a holding deleted since the
    /// plan was computed) leaves every stored amount untouched.
    #[instrument(skip(self))]
    pub async fn commit(&self, amount_to_invest: Decimal) -> Result<Vec<Holding>, PortfolioError> {
        let plan = self.plan(amount_to_invest).await?;

        let new_amounts: Vec<(HoldingId, Decimal)> = plan
            .iter()
            .filter_map(|entry| {
                entry
                    .holding
                    .id
                    .map(|id| (id, entry.holding.current_invested_amount + entry.amount))
            })
            .collect();
        let committed = self.holdings.set_current_amounts(&new_amounts).await?;

        info!(holdings = committed.len(), "Investment committed");
        Ok(committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryHoldingStore, InMemoryPriceFeed};
    use rust_decimal_macros::dec;

    async fn service_with(holdings: Vec<(&str, Decimal, Decimal)>) -> InvestmentService {
        let store = InMemoryHoldingStore::new();
        for (symbol, percentage, current) in holdings {
            store
                .create_holding(NewHolding {
                    ticker: Ticker::parse(symbol).unwrap(),
                    desired_percentage: percentage,
                    current_invested_amount: current,
                })
                .await
                .unwrap();
        }
        InvestmentService::new(Arc::new(store), Arc::new(InMemoryPriceFeed::new()))
    }

    #[tokio::test]
    async fn test_plan_requires_full_allocation() {
        let service = service_with(vec![("VTI", dec!(60), dec!(100)), ("BND", dec!(30), dec!(100))]).await;

        let result = service.plan(dec!(100)).await;
        assert!(matches!(result, Err(PortfolioError::IncompleteAllocation(p)) if p == dec!(90)));
    }

    #[tokio::test]
    async fn test_empty_portfolio_plans_nothing() {
        let service = service_with(vec![]).await;
        assert!(service.plan(dec!(100)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_commit_updates_store() {
        let service = service_with(vec![("VTI", dec!(50), dec!(0)), ("BND", dec!(50), dec!(0))]).await;

        let committed = service.commit(dec!(100)).await.unwrap();
        assert_eq!(committed.len(), 2);

        let summary = service.summary().await.unwrap();
        assert_eq!(summary.total_invested, dec!(100));
        assert!(summary.holdings.iter().all(|row| row.holding.current_invested_amount == dec!(50)));
    }
}
