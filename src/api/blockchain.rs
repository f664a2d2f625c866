//! Renewable-energy ledger endpoints

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use super::{error::ApiError, params::LimitQuery};
use crate::{dashboard, state::AppState};

/// GET /api/blockchain/transactions?limit=
pub async fn get_transactions(
    State(st): State<AppState>,
    Query(q): Query<LimitQuery>,
) -> Result<impl IntoResponse, ApiError> {
    q.validate()?;
    Ok(Json(dashboard::transactions(&mut st.rng(), q.limit)))
}

/// GET /api/blockchain/summary
pub async fn get_summary(State(st): State<AppState>) -> impl IntoResponse {
    Json(dashboard::ledger::summary(&mut st.rng()))
}
