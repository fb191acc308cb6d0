//! Portfolio Domain Ports
//!
//! The investment service talks to its data sources through these traits, so
//! a persistent store or a live quote provider can replace the in-memory
//! adapters without touching the service.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_portfolio::{HoldingPort, InMemoryHoldingStore};
//! use std::sync::Arc;
//!
//! let holdings: Arc<dyn HoldingPort> = Arc::new(InMemoryHoldingStore::new());
//! let all = holdings.list_holdings().await?;
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use core_kernel::{DomainPort, HealthCheckable, HoldingId, PortError};

use crate::holding::{Holding, Ticker};

/// Request for creating a holding
#[derive(Debug, Clone)]
pub struct NewHolding {
    pub ticker: Ticker,
    pub desired_percentage: Decimal,
    pub current_invested_amount: Decimal,
}

/// Request for updating a holding
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct HoldingUpdate {
    pub ticker: Option<Ticker>,
    pub desired_percentage: Option<Decimal>,
    pub current_invested_amount: Option<Decimal>,
}

impl HoldingUpdate {
    pub fn is_empty(&self) -> bool {
        self.ticker.is_none()
            && self.desired_percentage.is_none()
            && self.current_invested_amount.is_none()
    }
}

/// Storage for holdings
///
/// Tickers are unique across stored holdings. Implementations return
/// `PortError::NotFound` for unknown ids and `PortError::Conflict` when a
/// create or update would duplicate a ticker.
#[async_trait]
pub trait HoldingPort: DomainPort + HealthCheckable {
    /// Every stored holding, oldest first
    async fn list_holdings(&self) -> Result<Vec<Holding>, PortError>;

    async fn get_holding(&self, id: HoldingId) -> Result<Holding, PortError>;

    async fn create_holding(&self, request: NewHolding) -> Result<Holding, PortError>;

    async fn update_holding(&self, id: HoldingId, update: HoldingUpdate) -> Result<Holding, PortError>;

    async fn delete_holding(&self, id: HoldingId) -> Result<(), PortError>;

    /// Overwrites the current invested amount of several holdings at once
    ///
    /// All or nothing: if any id is unknown or any amount is rejected, no
    /// holding is changed. Returns the updated holdings in request order.
    async fn set_current_amounts(&self, amounts: &[(HoldingId, Decimal)]) -> Result<Vec<Holding>, PortError>;
}

/// Source of current market prices
#[async_trait]
pub trait MarketPricePort: DomainPort + HealthCheckable {
    /// Price per share for each requested ticker
    ///
    /// Tickers without a quote are absent from the returned map.
    async fn current_prices(&self, tickers: &[Ticker]) -> Result<HashMap<Ticker, Decimal>, PortError>;
}
