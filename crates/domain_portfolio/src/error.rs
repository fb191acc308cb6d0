//! Portfolio domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{MoneyError, PortError};

/// Errors raised by the allocation engine
///
/// These are precondition violations in the caller's data. They are never
/// transient and the engine produces no partial plan when returning one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("Invalid allocation for {ticker}: desired percentage {percentage} must be between 0 and 100")]
    InvalidAllocation { ticker: String, percentage: Decimal },

    #[error("Amount to invest cannot be negative, got {0}")]
    NegativeInvestment(Decimal),

    /// Two holdings share an identity, so their plan entries could not be told apart
    #[error("Holding {0} appears more than once")]
    DuplicateHolding(String),
}

/// Errors that can occur in the portfolio domain
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Invalid ticker: {0}")]
    InvalidTicker(String),

    #[error("Invalid holding: {0}")]
    InvalidHolding(String),

    #[error("Desired percentages add up to {0}, investing requires exactly 100")]
    IncompleteAllocation(Decimal),

    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error(transparent)]
    Port(#[from] PortError),

    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl PortfolioError {
    /// Returns true if this error comes from a missing stored record
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortfolioError::Port(port) if port.is_not_found())
    }
}
