use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use super::params::DateRangeQuery;
use crate::{dashboard, state::AppState};

/// GET /api/kpi/summary
pub async fn get_summary(State(st): State<AppState>) -> impl IntoResponse {
    Json(dashboard::kpi_summary(&mut st.rng()))
}

/// GET /api/kpi/aggregations?date_range=
pub async fn get_aggregations(
    State(st): State<AppState>,
    Query(q): Query<DateRangeQuery>,
) -> impl IntoResponse {
    Json(dashboard::kpi_aggregations(&mut st.rng(), &q.date_range))
}
