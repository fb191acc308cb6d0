//! Market price DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_portfolio::MarketPrice;

#[derive(Debug, Deserialize)]
pub struct RecordPriceRequest {
    pub price: Decimal,
}

#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub ticker: String,
    pub price: Decimal,
    pub recorded_at: DateTime<Utc>,
}

impl From<MarketPrice> for PriceResponse {
    fn from(price: MarketPrice) -> Self {
        Self {
            ticker: price.ticker.into(),
            price: price.price,
            recorded_at: price.recorded_at,
        }
    }
}
