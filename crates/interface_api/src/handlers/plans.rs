//! Investment plan handlers

use axum::{extract::State, Json};

use crate::dto::plans::*;
use crate::{error::ApiError, AppState};

/// Computes a purchase plan with whole-share counts
pub async fn quote(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let quote = state.service.quote(request.amount_to_invest()?).await?;
    Ok(Json(quote.into()))
}

/// Adds the purchase plan to the stored holdings
pub async fn commit(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<CommitResponse>, ApiError> {
    let amount_to_invest = request.amount_to_invest()?;
    let holdings = state.service.commit(amount_to_invest).await?;

    Ok(Json(CommitResponse {
        amount_to_invest,
        holdings: holdings.into_iter().map(Into::into).collect(),
    }))
}
