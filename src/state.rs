use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;

use crate::{config::Config, query::QueryEngine, scenario::ScenarioEngine};

/// Shared, read-only request state. Nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub scenarios: ScenarioEngine,
    pub queries: QueryEngine,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg: Arc::new(cfg),
            scenarios: ScenarioEngine::new(),
            queries: QueryEngine::new(),
        }
    }

    /// Fresh generator per request; seeded when `simulation.random_seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.cfg.simulation.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
