//! Portfolio Domain
//!
//! This crate implements the rebalancing side of the system: holdings with a
//! target allocation, the purchase allocator that spreads a new lump sum across
//! them, and whole-share planning once market prices are known.
//!
//! # Key Concepts
//!
//! - **Holding**: a ticker with a desired percentage and a current invested amount
//! - **Ideal amount**: what a holding should be worth right after the new investment
//! - **Priority score**: relative shortfall `(ideal - current) / ideal`, drives funding order
//! - **Purchase plan**: per-holding amounts, in funding order, summing to the invested amount
//!
//! # Precision
//!
//! Intermediate math keeps 3 fractional digits with banker's rounding; the final
//! audit against the requested amount truncates to 2 (currency) digits:
//! - Invest: $1,012.00
//! - Ideal ratio for 25%: 0.250
//! - Amount planned for a holding: 375.500
//!
//! # Example
//!
//! ```rust
//! use domain_portfolio::{calculate_purchase_amounts, Holding, Ticker};
//! use rust_decimal_macros::dec;
//!
//! let holdings = vec![
//!     Holding::new(Ticker::parse("A").unwrap(), dec!(50), dec!(1950.00)),
//!     Holding::new(Ticker::parse("B").unwrap(), dec!(25), dec!(600.00)),
//!     Holding::new(Ticker::parse("C").unwrap(), dec!(25), dec!(340.00)),
//! ];
//!
//! let plan = calculate_purchase_amounts(&holdings, dec!(1000.00)).unwrap();
//! assert_eq!(plan.len(), 3);
//! assert_eq!(plan.entries()[0].holding.ticker.as_str(), "C");
//! ```

pub mod holding;
pub mod allocation;
pub mod plan;
pub mod shares;
pub mod summary;
pub mod quote;
pub mod ports;
pub mod adapters;
pub mod service;
pub mod error;

pub use holding::{Holding, HoldingKey, Ticker};
pub use allocation::{
    calculate_purchase_amounts, InvestmentCalculationStrategy, PriorityShortfallStrategy,
    StrategyKind,
};
pub use plan::{PlannedPurchase, PurchasePlan};
pub use shares::{calculate_shares_to_buy, MarketPrice, ShareInfo};
pub use summary::{HoldingSummary, PortfolioSummary};
pub use quote::{InvestmentQuote, QuoteLine};
pub use ports::{HoldingPort, HoldingUpdate, MarketPricePort, NewHolding};
pub use adapters::{InMemoryHoldingStore, InMemoryPriceFeed};
pub use service::InvestmentService;
pub use error::{AllocationError, PortfolioError};

/// Fractional digits kept for intermediate allocation math
pub const INTERMEDIATE_SCALE: u32 = 3;

/// Fractional digits a stored desired percentage keeps
pub const PERCENTAGE_SCALE: u32 = 1;

/// Whole-portfolio percentage
pub const FULL_ALLOCATION: rust_decimal::Decimal = rust_decimal::Decimal::ONE_HUNDRED;
