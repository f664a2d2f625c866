//! Synthetic renewable-energy ledger ("blockchain" tracking).

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::random_id;
use crate::domain::EnergySource;
use crate::utils::{round2, round_to};

pub const SOURCES: [&str; 5] = [
    "GigaFactory_1",
    "GigaFactory_2",
    "Solar_Farm_A",
    "Wind_Farm_B",
    "Hydro_Plant_C",
];

pub const DESTINATIONS: [&str; 5] = [
    "Grid_Main",
    "Megapack_Bank_1",
    "Megapack_Bank_2",
    "Industrial_Zone",
    "Residential_Zone",
];

pub const BASE_BLOCK: u64 = 15_000_000;
const BLOCK_SPREAD: u64 = 100_000;
const TX_SPACING_MINUTES: i64 = 5;
/// Share of transactions reported as unverified
const UNVERIFIED_RATE: f64 = 0.05;

#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub id: Uuid,
    pub tx_hash: String,
    pub timestamp: DateTime<Utc>,
    pub energy_type: EnergySource,
    pub amount_kwh: f64,
    pub source: &'static str,
    pub destination: &'static str,
    pub verified: bool,
    pub block_number: u64,
}

/// `0x` + SHA-256 of a random float concatenated with the current epoch time
pub fn transaction_hash<R: Rng + ?Sized>(rng: &mut R) -> String {
    let epoch = Utc::now().timestamp_micros() as f64 / 1_000_000.0;
    let seed = format!("{}{}", rng.gen::<f64>(), epoch);

    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    format!("0x{:x}", hasher.finalize())
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items[rng.gen_range(0..items.len())]
}

/// `limit` transactions, newest first, spaced five minutes apart
pub fn transactions<R: Rng + ?Sized>(rng: &mut R, limit: usize) -> Vec<Transaction> {
    let now = Utc::now();
    (0..limit)
        .map(|i| Transaction {
            id: random_id(rng),
            tx_hash: transaction_hash(rng),
            timestamp: now - Duration::minutes(i as i64 * TX_SPACING_MINUTES),
            energy_type: EnergySource::random(rng),
            amount_kwh: round2(rng.gen_range(50.0..500.0)),
            source: pick(rng, &SOURCES),
            destination: pick(rng, &DESTINATIONS),
            verified: rng.gen::<f64>() > UNVERIFIED_RATE,
            block_number: BASE_BLOCK + rng.gen_range(0..=BLOCK_SPREAD),
        })
        .collect()
}

/// Percentage share per source, one decimal
#[derive(Debug, Clone, Serialize)]
pub struct SourceBreakdown {
    pub solar: f64,
    pub wind: f64,
    pub hydro: f64,
    pub geothermal: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LedgerSummary {
    pub total_tracked_kwh: f64,
    pub verified_transactions: u32,
    pub pending_transactions: u32,
    pub renewable_percentage: f64,
    pub by_source: SourceBreakdown,
    pub last_block: u64,
    pub network_hash_rate: String,
}

pub fn summary<R: Rng + ?Sized>(rng: &mut R) -> LedgerSummary {
    LedgerSummary {
        total_tracked_kwh: round2(rng.gen_range(50_000.0..100_000.0)),
        verified_transactions: rng.gen_range(900..=1000),
        pending_transactions: rng.gen_range(0..=10),
        renewable_percentage: round2(rng.gen_range(85.0..98.0)),
        by_source: SourceBreakdown {
            solar: round_to(rng.gen_range(30.0..40.0), 1),
            wind: round_to(rng.gen_range(25.0..35.0), 1),
            hydro: round_to(rng.gen_range(15.0..25.0), 1),
            geothermal: round_to(rng.gen_range(5.0..15.0), 1),
        },
        last_block: BASE_BLOCK + rng.gen_range(0..=BLOCK_SPREAD),
        network_hash_rate: format!("{} TH/s", round2(rng.gen_range(100.0..200.0))),
    }
}
