//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::HoldingId;
use domain_portfolio::{Holding, HoldingPort, InMemoryHoldingStore, NewHolding, Ticker};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::ticker;

/// Builder for holdings
pub struct HoldingBuilder {
    id: Option<HoldingId>,
    ticker: Ticker,
    desired_percentage: Decimal,
    current_invested_amount: Decimal,
}

impl Default for HoldingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HoldingBuilder {
    /// Creates a builder for an unsaved `VTI` holding at 100% with nothing invested
    pub fn new() -> Self {
        Self {
            id: None,
            ticker: ticker("VTI"),
            desired_percentage: dec!(100),
            current_invested_amount: Decimal::ZERO,
        }
    }

    pub fn ticker(mut self, symbol: &str) -> Self {
        self.ticker = ticker(symbol);
        self
    }

    pub fn desired_percentage(mut self, percentage: Decimal) -> Self {
        self.desired_percentage = percentage;
        self
    }

    pub fn current_invested_amount(mut self, amount: Decimal) -> Self {
        self.current_invested_amount = amount;
        self
    }

    /// Gives the holding a fresh persistence id
    pub fn saved(mut self) -> Self {
        self.id = Some(HoldingId::new_v7());
        self
    }

    pub fn build(self) -> Holding {
        let holding = Holding::new(self.ticker, self.desired_percentage, self.current_invested_amount);
        match self.id {
            Some(id) => holding.with_id(id),
            None => holding,
        }
    }
}

/// Converts a holding into the create request a store expects
pub fn new_holding_request(holding: &Holding) -> NewHolding {
    NewHolding {
        ticker: holding.ticker.clone(),
        desired_percentage: holding.desired_percentage,
        current_invested_amount: holding.current_invested_amount,
    }
}

/// Creates an in-memory store holding `holdings`, in order
///
/// # Panics
///
/// Panics if the store rejects any holding
pub async fn populated_store(holdings: &[Holding]) -> InMemoryHoldingStore {
    let store = InMemoryHoldingStore::new();
    for holding in holdings {
        store
            .create_holding(new_holding_request(holding))
            .await
            .unwrap_or_else(|e| panic!("fixture holding {} rejected: {e}", holding.ticker));
    }
    store
}
