//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! rebalancing test suites.
//!
//! # Modules
//!
//! - `fixtures`: Portfolios with hand-checked purchase plans
//! - `builders`: Builder patterns for holdings and populated stores
//! - `assertions`: Plan assertions with readable failure messages
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
