//! Grid metrics endpoints

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use tracing::debug;
use validator::Validate;

use super::{error::ApiError, params::HoursQuery};
use crate::{dashboard, state::AppState};

/// GET /api/grid/metrics?hours=
pub async fn get_metrics(
    State(st): State<AppState>,
    Query(q): Query<HoursQuery>,
) -> Result<impl IntoResponse, ApiError> {
    q.validate()?;
    let metrics = dashboard::grid_metrics(&mut st.rng(), q.hours);
    debug!(hours = q.hours, records = metrics.len(), "grid metrics generated");
    Ok(Json(metrics))
}

/// GET /api/grid/realtime
pub async fn get_realtime(State(st): State<AppState>) -> impl IntoResponse {
    Json(dashboard::realtime_snapshot(&mut st.rng()))
}
