//! Core Kernel - Foundational types and utilities for the rebalancing system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Decimal rounding helpers with explicit rounding strategies
//! - Raw currency input conversion ("digits only, last two digits are cents")
//! - Strongly-typed identifiers
//! - Port error vocabulary shared by every adapter

pub mod money;
pub mod identifiers;
pub mod ports;

pub use money::{
    round_half_even, truncate, parse_raw_currency, to_raw_currency, MoneyError,
    CURRENCY_SCALE,
};
pub use identifiers::{HoldingId, PlanId};
pub use ports::{PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth};
