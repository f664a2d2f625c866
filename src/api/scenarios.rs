//! What-if scenario endpoints

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::info;

use super::{error::ApiError, params::SimulateQuery};
use crate::{scenario::ScenarioProfile, state::AppState};

#[derive(Debug, Serialize)]
pub struct ScenarioList {
    scenarios: &'static [ScenarioProfile],
}

/// GET /api/scenarios/list
pub async fn list(State(st): State<AppState>) -> impl IntoResponse {
    Json(ScenarioList {
        scenarios: st.scenarios.list(),
    })
}

/// POST /api/scenarios/simulate?scenario_id=
pub async fn simulate(
    State(st): State<AppState>,
    Query(q): Query<SimulateQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let scenario_id = q
        .scenario_id
        .ok_or_else(|| ApiError::BadRequest("scenario_id is required".to_string()))?;

    let outcome = st.scenarios.simulate(&mut st.rng(), &scenario_id)?;
    info!(scenario_id = %outcome.scenario_id, "scenario simulation completed");
    Ok(Json(outcome))
}
