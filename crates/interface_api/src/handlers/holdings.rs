//! Holding handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::HoldingId;
use domain_portfolio::PortfolioSummary;

use crate::dto::holdings::*;
use crate::{error::ApiError, AppState};

/// Parses a holding id, with or without its `HLD-` prefix
pub(crate) fn parse_holding_id(raw: &str) -> Result<HoldingId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid holding id: {raw}")))
}

/// Lists holdings
pub async fn list_holdings(
    State(state): State<AppState>,
) -> Result<Json<Vec<HoldingResponse>>, ApiError> {
    let holdings = state.service.list_holdings().await?;
    Ok(Json(holdings.into_iter().map(Into::into).collect()))
}

/// Creates a holding
pub async fn create_holding(
    State(state): State<AppState>,
    Json(request): Json<CreateHoldingRequest>,
) -> Result<(StatusCode, Json<HoldingResponse>), ApiError> {
    let holding = state.service.create_holding(request.into_new_holding()?).await?;
    Ok((StatusCode::CREATED, Json(holding.into())))
}

/// Gets a holding by ID, with the percentage its edit form may assign
pub async fn get_holding(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HoldingDetailResponse>, ApiError> {
    let id = parse_holding_id(&id)?;
    let holding = state.service.get_holding(id).await?;
    let summary = PortfolioSummary::from_holdings(&state.service.list_holdings().await?);

    Ok(Json(HoldingDetailResponse {
        available_percentage: summary.available_percentage(Some(&holding.key())),
        holding: holding.into(),
    }))
}

/// Updates a holding
pub async fn update_holding(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateHoldingRequest>,
) -> Result<Json<HoldingResponse>, ApiError> {
    let id = parse_holding_id(&id)?;
    let update = request.into_update()?;
    if update.is_empty() {
        return Err(ApiError::BadRequest("Nothing to update".to_string()));
    }
    let holding = state.service.update_holding(id, update).await?;
    Ok(Json(holding.into()))
}

/// Deletes a holding
pub async fn delete_holding(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_holding(parse_holding_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
