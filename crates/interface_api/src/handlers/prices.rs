//! Market price handlers

use axum::{
    extract::{Path, State},
    Json,
};

use domain_portfolio::Ticker;

use crate::dto::prices::*;
use crate::{error::ApiError, AppState};

/// Records the latest market price for a ticker
pub async fn record_price(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    Json(request): Json<RecordPriceRequest>,
) -> Result<Json<PriceResponse>, ApiError> {
    let ticker = Ticker::parse(&ticker)?;
    let price = state.prices.record_price(ticker, request.price).await?;
    Ok(Json(price.into()))
}
