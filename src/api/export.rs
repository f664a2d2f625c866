//! Export endpoints

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use super::params::ExportQuery;
use crate::{dashboard, state::AppState};

/// GET /api/export/csv?data_type=
pub async fn get_csv(
    State(st): State<AppState>,
    Query(q): Query<ExportQuery>,
) -> impl IntoResponse {
    Json(dashboard::csv_export(&mut st.rng(), &q.data_type))
}

/// GET /api/export/report
pub async fn get_report() -> impl IntoResponse {
    Json(dashboard::report())
}
