use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use super::{error::ApiError, params::HoursQuery};
use crate::{
    dashboard,
    simulation::{HeatmapBuilder, ZoneGrid},
    state::AppState,
};

/// GET /api/heatmap/data?hours=
pub async fn get_data(
    State(st): State<AppState>,
    Query(q): Query<HoursQuery>,
) -> Result<impl IntoResponse, ApiError> {
    q.validate()?;
    let matrix = HeatmapBuilder::default().build(&mut st.rng(), ZoneGrid::COUNT, q.hours);
    Ok(Json(matrix))
}

/// GET /api/heatmap/realtime
pub async fn get_realtime(State(st): State<AppState>) -> impl IntoResponse {
    Json(dashboard::realtime_heatmap(&mut st.rng()))
}
