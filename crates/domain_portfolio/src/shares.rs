//! Whole-share planning
//!
//! Turns a planned dollar amount into a count of shares at a quoted market
//! price. Fractional shares are never bought.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holding::Ticker;

/// A quoted price for one share of a ticker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketPrice {
    pub ticker: Ticker,
    /// Price per share
    pub price: Decimal,
    /// When the quote was taken
    pub recorded_at: DateTime<Utc>,
}

impl MarketPrice {
    /// Creates a price quoted now
    pub fn new(ticker: Ticker, price: Decimal) -> Self {
        Self {
            ticker,
            price,
            recorded_at: Utc::now(),
        }
    }

    /// Whole shares `investment_amount` buys at this price
    pub fn shares_for(&self, investment_amount: Decimal) -> u64 {
        calculate_shares_to_buy(investment_amount, self.price)
    }
}

/// Market price and share count attached to a planned purchase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareInfo {
    pub market_price: Decimal,
    pub shares_to_buy: u64,
}

impl ShareInfo {
    pub fn new(investment_amount: Decimal, market_price: Decimal) -> Self {
        Self {
            market_price,
            shares_to_buy: calculate_shares_to_buy(investment_amount, market_price),
        }
    }

    /// Cost of the whole shares at the quoted price
    pub fn cost(&self) -> Decimal {
        self.market_price * Decimal::from(self.shares_to_buy)
    }
}

/// Number of whole shares `investment_amount` buys at `market_price`
///
/// Returns 0 when either value is zero or negative. The result is the floor
/// of the exact quotient, so the shares never cost more than the amount.
///
/// # Example
///
/// ```rust
/// use domain_portfolio::calculate_shares_to_buy;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(calculate_shares_to_buy(dec!(89.9999), dec!(10)), 8);
/// assert_eq!(calculate_shares_to_buy(dec!(100), dec!(0)), 0);
/// ```
pub fn calculate_shares_to_buy(investment_amount: Decimal, market_price: Decimal) -> u64 {
    if investment_amount <= Decimal::ZERO || market_price <= Decimal::ZERO {
        return 0;
    }

    let Some(quotient) = investment_amount.checked_div(market_price) else {
        return u64::MAX;
    };

    // Division rounds at 28 digits; step back if that carried us over a whole share.
    let mut shares = quotient.trunc();
    if shares
        .checked_mul(market_price)
        .map_or(false, |cost| cost > investment_amount)
    {
        shares -= Decimal::ONE;
    }

    shares.to_u64().unwrap_or(u64::MAX)
}
