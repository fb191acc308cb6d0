//! Portfolio DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_portfolio::PortfolioSummary;

use crate::dto::holdings::HoldingResponse;

#[derive(Debug, Serialize)]
pub struct HoldingSummaryResponse {
    #[serde(flatten)]
    pub holding: HoldingResponse,
    pub actual_percentage: Decimal,
}

#[derive(Debug, Serialize)]
pub struct PortfolioSummaryResponse {
    pub total_invested: Decimal,
    pub total_desired_percentage: Decimal,
    pub available_percentage: Decimal,
    pub is_invest_enabled: bool,
    pub can_add_holding: bool,
    pub holdings: Vec<HoldingSummaryResponse>,
}

impl From<PortfolioSummary> for PortfolioSummaryResponse {
    fn from(summary: PortfolioSummary) -> Self {
        Self {
            available_percentage: summary.available_percentage(None),
            total_invested: summary.total_invested,
            total_desired_percentage: summary.total_desired_percentage,
            is_invest_enabled: summary.is_invest_enabled,
            can_add_holding: summary.can_add_holding,
            holdings: summary
                .holdings
                .into_iter()
                .map(|row| HoldingSummaryResponse {
                    holding: row.holding.into(),
                    actual_percentage: row.actual_percentage,
                })
                .collect(),
        }
    }
}

/// New current value for one holding
#[derive(Debug, Deserialize)]
pub struct CurrentAmountEntry {
    pub id: String,
    pub current_invested_amount: Option<Decimal>,
    pub raw_current_amount: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReviseCurrentAmountsRequest {
    pub updates: Vec<CurrentAmountEntry>,
}
