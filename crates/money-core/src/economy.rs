//! Economy
//!
//! The time-step loop. Each period runs, in order:
//!
//! 1. proportions: who holds what, per agent type
//! 2. matching: random disjoint pairs
//! 3. encounters: each pair decides, and trades on mutual agreement
//! 4. consumption: every agent consumes if it can, then learns
//! 5. aggregation: tallies are normalized and frozen into the history

use money_events::PeriodStatistics;
use tracing::{debug, info};

use crate::config::{ConfigError, EconomyConfig};
use crate::output::RunRecord;
use crate::setup::Population;
use crate::state::SimulationState;
use crate::systems::{
    aggregate_period, apply_consumption, compute_proportions, draw_pairs, resolve_encounter,
};
use crate::SimRng;

pub struct Economy {
    config: EconomyConfig,
    state: SimulationState,
    rng: SimRng,
    history: Vec<PeriodStatistics>,
}

impl Economy {
    /// Validate `config` and spawn the population. Fails before any period runs.
    pub fn new(config: EconomyConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, SimRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: EconomyConfig, rng: SimRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let population = Population::new(&config);
        info!(
            agents = population.len(),
            goods = config.n_goods(),
            model = config.agent_model.name(),
            periods = config.t_max,
            "economy created"
        );

        Ok(Self {
            history: Vec::new(),
            state: SimulationState::new(population),
            rng,
            config,
        })
    }

    pub fn config(&self) -> &EconomyConfig {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn population(&self) -> &Population {
        &self.state.population
    }

    /// Statistics of every completed period, in order.
    pub fn history(&self) -> &[PeriodStatistics] {
        &self.history
    }

    /// Index of the next period to run.
    pub fn current_period(&self) -> u64 {
        self.history.len() as u64
    }

    pub fn is_finished(&self) -> bool {
        self.current_period() >= self.config.t_max
    }

    /// Run one period. Returns `None` once all `t_max` periods have run.
    pub fn step(&mut self) -> Option<&PeriodStatistics> {
        if self.is_finished() {
            return None;
        }
        let period = self.current_period();
        let stats = self.time_step(period);

        debug!(
            period,
            exchanges = stats.n_exchanges,
            consumption = stats.consumption,
            "period complete"
        );
        self.history.push(stats);
        self.history.last()
    }

    /// Run every remaining period.
    pub fn run(&mut self) -> &[PeriodStatistics] {
        while self.step().is_some() {}

        let total_exchanges: u64 = self.history.iter().map(|s| s.n_exchanges).sum();
        info!(
            periods = self.history.len(),
            total_exchanges,
            "simulation complete"
        );
        &self.history
    }

    /// Run to completion and keep the statistics with the configuration that produced them.
    pub fn into_record(mut self, seed: u64) -> RunRecord {
        self.run();
        RunRecord {
            seed,
            parameters: self.config,
            periods: self.history,
        }
    }

    fn time_step(&mut self, period: u64) -> PeriodStatistics {
        self.state.tally.reset();

        compute_proportions(&mut self.state);

        let pairs = draw_pairs(self.state.population.len(), &mut self.rng.0);
        for (first, second) in pairs {
            resolve_encounter(&mut self.state, first, second, &mut self.rng.0);
        }

        apply_consumption(&mut self.state);

        aggregate_period(&self.state, period)
    }
}

/// Build, run, and record an economy in one call.
pub fn launch(config: EconomyConfig, seed: u64) -> Result<RunRecord, ConfigError> {
    Ok(Economy::new(config, seed)?.into_record(seed))
}
