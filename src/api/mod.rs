pub mod blockchain;
pub mod error;
pub mod export;
pub mod grid;
pub mod health;
pub mod heatmap;
pub mod kpi;
pub mod params;
pub mod query;
pub mod scenarios;
pub mod snn;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::{config::ServerConfig, state::AppState};

/// 1 MiB is far above any JSON body this service accepts.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

pub fn router(state: AppState) -> Router {
    let server = state.cfg.server.clone();

    Router::new()
        .route("/api/", get(health::root))
        .nest("/api", api_routes(state))
        .layer(cors_layer(&server))
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(BODY_LIMIT_BYTES))
                .layer(TimeoutLayer::new(server.request_timeout())),
        )
        .layer(TraceLayer::new_for_http())
}

fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/grid/metrics", get(grid::get_metrics))
        .route("/grid/realtime", get(grid::get_realtime))
        .route("/kpi/summary", get(kpi::get_summary))
        .route("/kpi/aggregations", get(kpi::get_aggregations))
        .route("/snn/predictions", get(snn::get_predictions))
        .route("/snn/neuron-activity", get(snn::get_neuron_activity))
        .route("/blockchain/transactions", get(blockchain::get_transactions))
        .route("/blockchain/summary", get(blockchain::get_summary))
        .route("/heatmap/data", get(heatmap::get_data))
        .route("/heatmap/realtime", get(heatmap::get_realtime))
        .route("/query/execute", post(query::execute))
        .route("/export/csv", get(export::get_csv))
        .route("/export/report", get(export::get_report))
        .route("/scenarios/list", get(scenarios::list))
        .route("/scenarios/simulate", post(scenarios::simulate))
        .with_state(state)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if server.allows_any_origin() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}
