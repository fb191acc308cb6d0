//! Holdings and their target allocation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{round_half_even, HoldingId};
use crate::error::PortfolioError;
use crate::{FULL_ALLOCATION, INTERMEDIATE_SCALE};

/// A ticker symbol, trimmed and upper-cased
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Parses a ticker symbol
    ///
    /// Surrounding whitespace is dropped and letters are upper-cased, so
    /// `" vti "` and `"VTI"` name the same ticker.
    pub fn parse(symbol: &str) -> Result<Self, PortfolioError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(PortfolioError::InvalidTicker("ticker must not be empty".to_string()));
        }
        if symbol.chars().any(char::is_whitespace) {
            return Err(PortfolioError::InvalidTicker(format!(
                "ticker must not contain whitespace: {symbol:?}"
            )));
        }
        Ok(Self(symbol.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = PortfolioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> String {
        ticker.0
    }
}

/// Identity of a holding inside a purchase plan
///
/// Two holdings are distinct whenever their identity differs, even if their
/// amounts and percentages match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HoldingKey {
    pub id: Option<HoldingId>,
    pub ticker: Ticker,
}

impl fmt::Display for HoldingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{} ({})", self.ticker, id),
            None => write!(f, "{}", self.ticker),
        }
    }
}

/// A ticker's allocation record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// Persistence id, absent until the holding is stored
    pub id: Option<HoldingId>,
    /// Ticker symbol
    pub ticker: Ticker,
    /// Target share of the whole portfolio (0-100)
    pub desired_percentage: Decimal,
    /// Value currently held
    pub current_invested_amount: Decimal,
}

impl Holding {
    /// Creates an unsaved holding
    pub fn new(ticker: Ticker, desired_percentage: Decimal, current_invested_amount: Decimal) -> Self {
        Self {
            id: None,
            ticker,
            desired_percentage,
            current_invested_amount,
        }
    }

    /// Attaches a persistence id
    pub fn with_id(mut self, id: HoldingId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the identity used to key purchase plans
    pub fn key(&self) -> HoldingKey {
        HoldingKey {
            id: self.id,
            ticker: self.ticker.clone(),
        }
    }

    /// Checks the record invariants: percentage in 0-100, amount not negative
    pub fn validate(&self) -> Result<(), PortfolioError> {
        if self.desired_percentage < Decimal::ZERO || self.desired_percentage > FULL_ALLOCATION {
            return Err(PortfolioError::InvalidHolding(format!(
                "{}: desired percentage {} must be between 0 and 100",
                self.ticker, self.desired_percentage
            )));
        }
        if self.current_invested_amount < Decimal::ZERO {
            return Err(PortfolioError::InvalidHolding(format!(
                "{}: current invested amount {} cannot be negative",
                self.ticker, self.current_invested_amount
            )));
        }
        Ok(())
    }

    /// Desired percentage as a ratio with 3 fractional digits
    ///
    /// The percentage is first brought to 3 digits, then divided by 100 and
    /// rounded again, both half-to-even: 52% is `0.520`, 33.3333% is `0.333`.
    pub fn target_ratio(&self) -> Decimal {
        let percentage = round_half_even(self.desired_percentage, INTERMEDIATE_SCALE);
        round_half_even(percentage / FULL_ALLOCATION, INTERMEDIATE_SCALE)
    }

    /// What this holding should be worth once the portfolio totals `total_after_investment`
    pub fn ideal_amount(&self, total_after_investment: Decimal) -> Decimal {
        total_after_investment * self.target_ratio()
    }

    /// Distance to the ideal amount: positive when under-allocated
    pub fn amount_away_from_ideal(&self, total_after_investment: Decimal) -> Decimal {
        self.ideal_amount(total_after_investment) - self.current_invested_amount
    }

    /// Share of `portfolio_total` this holding currently represents, out of 100
    pub fn actual_percentage(&self, portfolio_total: Decimal) -> Decimal {
        if portfolio_total.is_zero() {
            return Decimal::ZERO;
        }
        self.current_invested_amount / portfolio_total * FULL_ALLOCATION
    }

    /// Returns a copy with `amount` added to the current invested amount
    pub fn with_added_investment(&self, amount: Decimal) -> Self {
        Self {
            current_invested_amount: self.current_invested_amount + amount,
            ..self.clone()
        }
    }
}
