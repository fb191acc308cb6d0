//! Adapters for the portfolio ports

pub mod memory;

pub use memory::{InMemoryHoldingStore, InMemoryPriceFeed};
