//! Spiking-network prediction endpoints

use axum::{extract::State, response::IntoResponse, Json};

use crate::{dashboard, state::AppState};

pub async fn get_predictions(State(st): State<AppState>) -> impl IntoResponse {
    Json(dashboard::predictions(&mut st.rng()))
}

pub async fn get_neuron_activity(State(st): State<AppState>) -> impl IntoResponse {
    Json(dashboard::neuron_activity(&mut st.rng()))
}
