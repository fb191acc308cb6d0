//! Portfolio handlers

use axum::{extract::State, Json};

use crate::dto::holdings::{resolve_amount, HoldingResponse};
use crate::dto::portfolio::*;
use crate::handlers::holdings::parse_holding_id;
use crate::{error::ApiError, AppState};

/// Portfolio totals and invest gating
pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<PortfolioSummaryResponse>, ApiError> {
    let summary = state.service.summary().await?;
    Ok(Json(summary.into()))
}

/// Overwrites current invested amounts before investing
pub async fn revise_current_amounts(
    State(state): State<AppState>,
    Json(request): Json<ReviseCurrentAmountsRequest>,
) -> Result<Json<Vec<HoldingResponse>>, ApiError> {
    let updates = request
        .updates
        .into_iter()
        .map(|entry| -> Result<_, ApiError> {
            let id = parse_holding_id(&entry.id)?;
            let amount = resolve_amount(entry.current_invested_amount, entry.raw_current_amount.as_deref())?
                .ok_or_else(|| ApiError::BadRequest(format!("No amount given for {}", entry.id)))?;
            Ok((id, amount))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let revised = state.service.revise_current_amounts(updates).await?;
    Ok(Json(revised.into_iter().map(Into::into).collect()))
}
