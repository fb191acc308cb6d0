//! Holding DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{parse_raw_currency, HoldingId};
use domain_portfolio::{Holding, HoldingUpdate, NewHolding, Ticker};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreateHoldingRequest {
    pub ticker: String,
    pub desired_percentage: Decimal,
    /// Defaults to zero when neither amount field is given
    pub current_invested_amount: Option<Decimal>,
    /// Digits-only entry, last two digits are cents
    pub raw_current_amount: Option<String>,
}

impl CreateHoldingRequest {
    pub fn into_new_holding(self) -> Result<NewHolding, ApiError> {
        let current_invested_amount =
            resolve_amount(self.current_invested_amount, self.raw_current_amount.as_deref())?
                .unwrap_or(Decimal::ZERO);
        Ok(NewHolding {
            ticker: Ticker::parse(&self.ticker)?,
            desired_percentage: self.desired_percentage,
            current_invested_amount,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateHoldingRequest {
    pub ticker: Option<String>,
    pub desired_percentage: Option<Decimal>,
    pub current_invested_amount: Option<Decimal>,
    pub raw_current_amount: Option<String>,
}

impl UpdateHoldingRequest {
    pub fn into_update(self) -> Result<HoldingUpdate, ApiError> {
        Ok(HoldingUpdate {
            ticker: self.ticker.as_deref().map(Ticker::parse).transpose()?,
            desired_percentage: self.desired_percentage,
            current_invested_amount: resolve_amount(
                self.current_invested_amount,
                self.raw_current_amount.as_deref(),
            )?,
        })
    }
}

/// Picks a decimal amount or its raw digit form; giving both is an error
pub fn resolve_amount(amount: Option<Decimal>, raw: Option<&str>) -> Result<Option<Decimal>, ApiError> {
    match (amount, raw) {
        (Some(_), Some(_)) => Err(ApiError::BadRequest(
            "Provide either a decimal amount or a raw amount, not both".to_string(),
        )),
        (Some(amount), None) => Ok(Some(amount)),
        (None, Some(raw)) => Ok(Some(parse_raw_currency(raw)?)),
        (None, None) => Ok(None),
    }
}

#[derive(Debug, Serialize)]
pub struct HoldingResponse {
    pub id: Option<HoldingId>,
    pub ticker: String,
    pub desired_percentage: Decimal,
    pub current_invested_amount: Decimal,
}

impl From<Holding> for HoldingResponse {
    fn from(holding: Holding) -> Self {
        Self {
            id: holding.id,
            ticker: holding.ticker.into(),
            desired_percentage: holding.desired_percentage,
            current_invested_amount: holding.current_invested_amount,
        }
    }
}

/// A holding with the percentage its edit form may assign
#[derive(Debug, Serialize)]
pub struct HoldingDetailResponse {
    #[serde(flatten)]
    pub holding: HoldingResponse,
    pub available_percentage: Decimal,
}
