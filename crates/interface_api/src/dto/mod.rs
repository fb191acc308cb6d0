//! Request and response bodies

pub mod holdings;
pub mod plans;
pub mod portfolio;
pub mod prices;
