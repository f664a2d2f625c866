//! Energy-Morph: synthetic multi-zone grid telemetry behind a small HTTP API.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod query;
pub mod scenario;
pub mod simulation;
pub mod state;
pub mod telemetry;
pub mod utils;
