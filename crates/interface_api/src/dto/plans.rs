//! Investment plan DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{HoldingId, PlanId};
use domain_portfolio::{InvestmentQuote, QuoteLine, ShareInfo};

use crate::dto::holdings::{resolve_amount, HoldingResponse};
use crate::error::ApiError;

/// Amount to invest, as a decimal or in raw digit form
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub amount: Option<Decimal>,
    pub raw_amount: Option<String>,
}

impl PlanRequest {
    pub fn amount_to_invest(&self) -> Result<Decimal, ApiError> {
        resolve_amount(self.amount, self.raw_amount.as_deref())?
            .ok_or_else(|| ApiError::BadRequest("An amount or raw amount is required".to_string()))
    }
}

#[derive(Debug, Serialize)]
pub struct ShareInfoResponse {
    pub market_price: Decimal,
    pub shares_to_buy: u64,
}

impl From<ShareInfo> for ShareInfoResponse {
    fn from(info: ShareInfo) -> Self {
        Self {
            market_price: info.market_price,
            shares_to_buy: info.shares_to_buy,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuoteLineResponse {
    pub holding_id: Option<HoldingId>,
    pub ticker: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_info: Option<ShareInfoResponse>,
}

impl From<QuoteLine> for QuoteLineResponse {
    fn from(line: QuoteLine) -> Self {
        Self {
            holding_id: line.holding_id,
            ticker: line.ticker.into(),
            amount: line.amount,
            share_info: line.share_info.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub id: PlanId,
    pub amount_to_invest: Decimal,
    pub total: Decimal,
    pub lines: Vec<QuoteLineResponse>,
    pub generated_at: DateTime<Utc>,
}

impl From<InvestmentQuote> for QuoteResponse {
    fn from(quote: InvestmentQuote) -> Self {
        Self {
            total: quote.total(),
            id: quote.id,
            amount_to_invest: quote.amount_to_invest,
            lines: quote.lines.into_iter().map(Into::into).collect(),
            generated_at: quote.generated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommitResponse {
    pub amount_to_invest: Decimal,
    pub holdings: Vec<HoldingResponse>,
}
