//! Pre-built Test Fixtures
//!
//! Portfolios whose purchase plans have been worked out by hand. Each fixture
//! lists holdings in the order the allocator receives them; the comments give
//! the funding order the allocator should produce.

use domain_portfolio::{Holding, Ticker};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Creates an unsaved holding
///
/// # Panics
///
/// Panics if `symbol` is not a valid ticker
pub fn holding(symbol: &str, current_invested_amount: Decimal, desired_percentage: Decimal) -> Holding {
    Holding::new(ticker(symbol), desired_percentage, current_invested_amount)
}

/// Parses a ticker, panicking on invalid input
pub fn ticker(symbol: &str) -> Ticker {
    Ticker::parse(symbol).unwrap_or_else(|e| panic!("invalid fixture ticker {symbol:?}: {e}"))
}

/// Fixture for holding portfolios
pub struct HoldingFixtures;

impl HoldingFixtures {
    /// Five holdings with uneven drift, investing 4514.58
    ///
    /// Funding order C, D, A, E, B.
    pub fn default_portfolio() -> Vec<Holding> {
        vec![
            holding("A", dec!(38592.76), dec!(52.0)),
            holding("B", dec!(18700.05), dec!(25.0)),
            holding("C", dec!(6141.30), dec!(10.0)),
            holding("D", dec!(5861.52), dec!(8.0)),
            holding("E", dec!(3714.14), dec!(5.0)),
        ]
    }

    pub fn default_investment() -> Decimal {
        dec!(4514.58)
    }

    /// Four holdings slightly off their targets, investing 2345.00
    ///
    /// Funding order A, D, B, C; every holding lands exactly on its ideal.
    pub fn slightly_off_ideal() -> Vec<Holding> {
        vec![
            holding("A", dec!(1000.00), dec!(50)),
            holding("B", dec!(300.00), dec!(10)),
            holding("C", dec!(225.00), dec!(5)),
            holding("D", dec!(975.00), dec!(35)),
        ]
    }

    /// Four holdings exactly at their targets
    ///
    /// Every priority is equal, so funding order is input order.
    pub fn at_ideal() -> Vec<Holding> {
        vec![
            holding("A", dec!(1250.00), dec!(50)),
            holding("B", dec!(250.00), dec!(10)),
            holding("C", dec!(125.00), dec!(5)),
            holding("D", dec!(875.00), dec!(35)),
        ]
    }

    /// Three holdings where A is over-allocated
    ///
    /// Investing 1000.00 leaves A with nothing; 1012.00 leaves it 1.00.
    pub fn over_allocated_leader() -> Vec<Holding> {
        vec![
            holding("A", dec!(1950.00), dec!(50)),
            holding("B", dec!(600.00), dec!(25)),
            holding("C", dec!(340.00), dec!(25)),
        ]
    }

    /// Four holdings where the money runs out before B, investing 700.00
    ///
    /// Funding order D, C, A, B.
    pub fn runs_out_early() -> Vec<Holding> {
        vec![
            holding("A", dec!(1000.00), dec!(50)),
            holding("B", dec!(500.00), dec!(10)),
            holding("C", dec!(90.00), dec!(5)),
            holding("D", dec!(600.00), dec!(35)),
        ]
    }

    /// Two even holdings with nothing invested yet
    pub fn empty_even_split() -> Vec<Holding> {
        vec![
            holding("A", dec!(0), dec!(50)),
            holding("B", dec!(0), dec!(50)),
        ]
    }
}
