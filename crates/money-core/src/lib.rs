//! Emergent Money Simulation Engine
//!
//! A Kiyotaki-Wright search economy: agents that each produce one good and
//! consume another meet in random pairs and decide whether to trade. Some
//! goods come to be accepted purely to be traded on, as a medium of exchange.

use rand::rngs::SmallRng;
use rand::SeedableRng;

pub mod components;
pub mod config;
pub mod economy;
pub mod output;
pub mod setup;
pub mod state;
pub mod systems;

pub use components::{AdaptiveAgent, Agent, RandomAgent, Trader};
pub use config::{AgentModel, CognitiveParameters, ConfigError, EconomyConfig};
pub use economy::{launch, Economy};
pub use output::{OutputError, RunRecord};
pub use setup::Population;
pub use state::{PeriodTally, SimulationState};

pub use money_events::{AgentRole, ExchangeShare, ExchangeType, Good, PeriodStatistics};

/// Seeded random number generator driving matching and agent decisions
#[derive(Debug, Clone)]
pub struct SimRng(pub SmallRng);

impl SimRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}
