//! Request handlers

pub mod health;
pub mod holdings;
pub mod plans;
pub mod portfolio;
pub mod prices;
