//! In-memory adapters
//!
//! Back the holding and price ports with `tokio::sync::RwLock` collections. They are
//! what the API server runs on and what the test suites use.
//!
//! Stored holdings are normalized on every write: amounts keep 2 fractional
//! digits and desired percentages keep 1, both truncated.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::{debug, info};

use core_kernel::{
    truncate, DomainPort, HealthCheckResult, HealthCheckable, HoldingId, PortError, CURRENCY_SCALE,
};

use crate::holding::{Holding, Ticker};
use crate::ports::{HoldingPort, HoldingUpdate, MarketPricePort, NewHolding};
use crate::shares::MarketPrice;
use crate::PERCENTAGE_SCALE;

/// Holding store that keeps holdings in creation order
#[derive(Debug, Default, Clone)]
pub struct InMemoryHoldingStore {
    holdings: Arc<RwLock<Vec<Holding>>>,
}

impl InMemoryHoldingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `holdings`
    pub async fn with_holdings(holdings: Vec<NewHolding>) -> Result<Self, PortError> {
        let store = Self::new();
        for holding in holdings {
            store.create_holding(holding).await?;
        }
        Ok(store)
    }

    pub async fn len(&self) -> usize {
        self.holdings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.holdings.read().await.is_empty()
    }
}

fn normalize(mut holding: Holding) -> Result<Holding, PortError> {
    holding.current_invested_amount = truncate(holding.current_invested_amount, CURRENCY_SCALE);
    holding.desired_percentage = truncate(holding.desired_percentage, PERCENTAGE_SCALE);
    holding
        .validate()
        .map_err(|e| PortError::validation(e.to_string()))?;
    Ok(holding)
}

fn position(holdings: &[Holding], id: HoldingId) -> Result<usize, PortError> {
    holdings
        .iter()
        .position(|h| h.id == Some(id))
        .ok_or_else(|| PortError::not_found("Holding", id))
}

fn ensure_unique_ticker(
    holdings: &[Holding],
    ticker: &Ticker,
    except: Option<HoldingId>,
) -> Result<(), PortError> {
    let taken = holdings
        .iter()
        .any(|h| &h.ticker == ticker && h.id != except);
    if taken {
        return Err(PortError::conflict(format!("Ticker {ticker} already exists")));
    }
    Ok(())
}

impl DomainPort for InMemoryHoldingStore {}

#[async_trait]
impl HealthCheckable for InMemoryHoldingStore {
    async fn health_check(&self) -> HealthCheckResult {
        let count = self.holdings.read().await.len();
        HealthCheckResult::healthy("memory-holdings").with_message(format!("{count} holdings"))
    }
}

#[async_trait]
impl HoldingPort for InMemoryHoldingStore {
    async fn list_holdings(&self) -> Result<Vec<Holding>, PortError> {
        Ok(self.holdings.read().await.clone())
    }

    async fn get_holding(&self, id: HoldingId) -> Result<Holding, PortError> {
        let holdings = self.holdings.read().await;
        let index = position(&holdings, id)?;
        Ok(holdings[index].clone())
    }

    async fn create_holding(&self, request: NewHolding) -> Result<Holding, PortError> {
        let id = HoldingId::new_v7();
        let holding = normalize(
            Holding::new(request.ticker, request.desired_percentage, request.current_invested_amount)
                .with_id(id),
        )?;

        let mut holdings = self.holdings.write().await;
        ensure_unique_ticker(&holdings, &holding.ticker, None)?;
        holdings.push(holding.clone());

        info!(holding_id = %id, ticker = %holding.ticker, "Holding created");
        Ok(holding)
    }

    async fn update_holding(&self, id: HoldingId, update: HoldingUpdate) -> Result<Holding, PortError> {
        let mut holdings = self.holdings.write().await;
        let index = position(&holdings, id)?;
        let existing = holdings[index].clone();

        let updated = normalize(Holding {
            ticker: update.ticker.unwrap_or(existing.ticker),
            desired_percentage: update.desired_percentage.unwrap_or(existing.desired_percentage),
            current_invested_amount: update
                .current_invested_amount
                .unwrap_or(existing.current_invested_amount),
            ..existing
        })?;
        ensure_unique_ticker(&holdings, &updated.ticker, Some(id))?;
        holdings[index] = updated.clone();

        debug!(holding_id = %id, ticker = %updated.ticker, "Holding updated");
        Ok(updated)
    }

    async fn delete_holding(&self, id: HoldingId) -> Result<(), PortError> {
        let mut holdings = self.holdings.write().await;
        let index = position(&holdings, id)?;
        let removed = holdings.remove(index);

        info!(holding_id = %id, ticker = %removed.ticker, "Holding deleted");
        Ok(())
    }

    async fn set_current_amounts(&self, amounts: &[(HoldingId, Decimal)]) -> Result<Vec<Holding>, PortError> {
        let mut holdings = self.holdings.write().await;

        let staged = amounts
            .iter()
            .map(|&(id, amount)| {
                let index = position(&holdings, id)?;
                let updated = normalize(Holding {
                    current_invested_amount: amount,
                    ..holdings[index].clone()
                })?;
                Ok((index, updated))
            })
            .collect::<Result<Vec<_>, PortError>>()?;

        for (index, updated) in &staged {
            holdings[*index] = updated.clone();
        }

        debug!(count = staged.len(), "Current amounts updated");
        Ok(staged.into_iter().map(|(_, holding)| holding).collect())
    }
}

/// Price feed holding the last recorded quote per ticker
#[derive(Debug, Default, Clone)]
pub struct InMemoryPriceFeed {
    prices: Arc<RwLock<HashMap<Ticker, MarketPrice>>>,
}

impl InMemoryPriceFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_prices(prices: impl IntoIterator<Item = (Ticker, Decimal)>) -> Result<Self, PortError> {
        let feed = Self::new();
        for (ticker, price) in prices {
            feed.record_price(ticker, price).await?;
        }
        Ok(feed)
    }

    /// Records the latest price for a ticker, replacing any earlier one
    pub async fn record_price(&self, ticker: Ticker, price: Decimal) -> Result<MarketPrice, PortError> {
        if price <= Decimal::ZERO {
            return Err(PortError::validation_field(
                format!("Price for {ticker} must be positive, got {price}"),
                "price",
            ));
        }

        let quote = MarketPrice::new(ticker.clone(), price);
        self.prices.write().await.insert(ticker, quote.clone());
        debug!(ticker = %quote.ticker, price = %quote.price, "Market price recorded");
        Ok(quote)
    }

    pub async fn latest(&self, ticker: &Ticker) -> Option<MarketPrice> {
        self.prices.read().await.get(ticker).cloned()
    }
}

impl DomainPort for InMemoryPriceFeed {}

#[async_trait]
impl HealthCheckable for InMemoryPriceFeed {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("memory-prices")
    }
}

#[async_trait]
impl MarketPricePort for InMemoryPriceFeed {
    async fn current_prices(&self, tickers: &[Ticker]) -> Result<HashMap<Ticker, Decimal>, PortError> {
        let prices = self.prices.read().await;
        Ok(tickers
            .iter()
            .filter_map(|ticker| prices.get(ticker).map(|quote| (ticker.clone(), quote.price)))
            .collect())
    }
}
