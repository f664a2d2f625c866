use axum::{extract::State, response::IntoResponse, Json};
use tracing::info;

use crate::{query::QueryRequest, state::AppState};

/// POST /api/query/execute
///
/// Unknown `query_type` values still answer 200 with a sentinel record.
pub async fn execute(
    State(st): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> impl IntoResponse {
    let response = st.queries.execute(&mut st.rng(), &request);
    info!(
        query_type = %request.query_type,
        records = response.results.len(),
        elapsed_ms = response.query_time_ms,
        "query executed"
    );
    Json(response)
}
