//! Ad-hoc aggregation queries over the synthetic grid state.
//!
//! Unknown query kinds are not errors: they produce a single sentinel record
//! and empty aggregations.

pub mod engine;
pub mod types;

pub use engine::{QueryEngine, MAX_HOURLY_ROWS, UNKNOWN_QUERY_MESSAGE};
pub use types::*;
