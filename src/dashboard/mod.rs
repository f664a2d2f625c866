//! Payload generators behind the dashboard endpoints.
//!
//! Every function takes the caller's random source, so a seeded `StdRng`
//! reproduces a response exactly (timestamps aside).

pub mod export;
pub mod grid;
pub mod kpi;
pub mod ledger;
pub mod snn;

use rand::Rng;
use uuid::Uuid;

pub use export::{csv_export, report, CsvExport, CsvRow, ExportKind, Report};
pub use grid::{grid_metrics, realtime_heatmap, realtime_snapshot, GridMetrics};
pub use kpi::{kpi_aggregations, kpi_summary, KpiAggregations, KpiSummary};
pub use ledger::{transaction_hash, transactions, LedgerSummary, Transaction};
pub use snn::{neuron_activity, predictions, NeuronActivity, Prediction};

/// v4 UUID drawn from `rng` rather than the OS
pub fn random_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}
