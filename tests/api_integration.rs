//! Drives the router in-process, one request per test.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::util::ServiceExt;

use energy_morph::api::router;
use energy_morph::config::{Config, SimulationConfig};
use energy_morph::state::AppState;

fn app() -> Router {
    let cfg = Config {
        simulation: SimulationConfig {
            random_seed: Some(42),
        },
        ..Config::default()
    };
    router(AppState::new(cfg))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let resp = app().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn test_health() {
    let (status, json) = get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_root_banner() {
    for uri in ["/api", "/api/"] {
        let (status, json) = get(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(json["message"], "Energy-Morph API");
    }
}

#[tokio::test]
async fn test_grid_metrics_default_and_ceiling() {
    let (status, json) = get("/api/grid/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 24 * 6);

    let (status, json) = get("/api/grid/metrics?hours=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["zone"], "Zone_A");
    assert_eq!(json.as_array().unwrap().len(), 12);

    let (status, json) = get("/api/grid/metrics?hours=169").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], "ValidationError");
}

#[tokio::test]
async fn test_realtime_endpoints() {
    let (status, json) = get("/api/grid/realtime").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["zones"].as_object().unwrap().len(), 6);

    let (status, json) = get("/api/heatmap/realtime").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["zones"]["Zone_F"]["color_intensity"].is_number());
}

#[tokio::test]
async fn test_heatmap_data_shape() {
    let (status, json) = get("/api/heatmap/data?hours=12").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["zones"].as_array().unwrap().len(), 6);
    assert_eq!(json["timestamps"].as_array().unwrap().len(), 12);
    assert_eq!(json["power_values"][5].as_array().unwrap().len(), 12);
    assert_eq!(json["efficiency_values"][0].as_array().unwrap().len(), 12);

    let (status, _) = get("/api/heatmap/data?hours=500").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_kpi_endpoints() {
    let (status, json) = get("/api/kpi/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sparkline_data"].as_array().unwrap().len(), 24);

    let (status, json) = get("/api/kpi/aggregations?date_range=7d").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["date_range"], "7d");
    assert_eq!(json["time_series"]["demand"].as_array().unwrap().len(), 48);
}

#[tokio::test]
async fn test_snn_endpoints() {
    let (status, json) = get("/api/snn/predictions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["spike_patterns"].as_array().unwrap().len(), 5);
    assert_eq!(json["spike_patterns"][0]["neuron_group"], "solar_input");

    let (status, json) = get("/api/snn/neuron-activity").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["network_state"], "active");
    assert_eq!(json["neuron_groups"]["grid_balance"]["neurons"], 200);
}

#[tokio::test]
async fn test_blockchain_endpoints() {
    let (status, json) = get("/api/blockchain/transactions").await;
    assert_eq!(status, StatusCode::OK);
    let txs = json.as_array().unwrap();
    assert_eq!(txs.len(), 20);
    let hash = txs[0]["tx_hash"].as_str().unwrap();
    assert_eq!(hash.len(), 66);
    assert!(hash.starts_with("0x"));

    let (status, _) = get("/api/blockchain/transactions?limit=101").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, json) = get("/api/blockchain/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["network_hash_rate"].as_str().unwrap().ends_with("TH/s"));
}

#[tokio::test]
async fn test_query_demand_capped() {
    let (status, json) = post_json(
        "/api/query/execute",
        serde_json::json!({"query_type": "demand", "date_range": "7d"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["results"].as_array().unwrap().len(), 48);
    assert_eq!(json["aggregations"]["peak_demand"], 550.0);
    assert_eq!(json["aggregations"]["min_demand"], 250.0);
    assert_eq!(json["aggregations"]["avg_demand"], 400.0);
    assert!(json["query_time_ms"].is_number());
}

#[tokio::test]
async fn test_query_unknown_kind_is_not_an_error() {
    let (status, json) = post_json(
        "/api/query/execute",
        serde_json::json!({"query_type": "forecast"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["results"], serde_json::json!([{"message": "Unknown query type"}]));
    assert_eq!(json["aggregations"], serde_json::json!({}));
}

#[tokio::test]
async fn test_export_csv_and_report() {
    let (status, json) = get("/api/export/csv").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rows"].as_array().unwrap().len(), 72);
    assert!(json["filename"].as_str().unwrap().starts_with("metrics_export_"));

    let (status, json) = get("/api/export/csv?data_type=alerts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({"error": "Unknown data type"}));

    let (status, json) = get("/api/export/report").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["period"], "Last 24 Hours");
}

#[tokio::test]
async fn test_scenarios() {
    let (status, json) = get("/api/scenarios/list").await;
    assert_eq!(status, StatusCode::OK);
    let scenarios = json["scenarios"].as_array().unwrap();
    assert_eq!(scenarios.len(), 5);
    assert_eq!(scenarios[0]["id"], "peak_ai");

    let req = Request::builder()
        .method("POST")
        .uri("/api/scenarios/simulate?scenario_id=grid_outage")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["simulation_result"], "success");
    assert_eq!(
        json["parameters"],
        serde_json::json!({"megapack_discharge": 90, "islanding_mode": true, "recovery_time_sec": 0.2})
    );
    let stability = json["impact"]["grid_stability"].as_f64().unwrap();
    assert!((0.9..=1.0).contains(&stability));
}

#[tokio::test]
async fn test_unknown_scenario_is_404() {
    let req = Request::builder()
        .method("POST")
        .uri("/api/scenarios/simulate?scenario_id=Grid_Outage")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "NotFound");

    let req = Request::builder()
        .method("POST")
        .uri("/api/scenarios/simulate")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_seeded_responses_repeat() {
    let (_, a) = get("/api/kpi/summary").await;
    let (_, b) = get("/api/kpi/summary").await;
    assert_eq!(a["sparkline_data"], b["sparkline_data"]);
}
