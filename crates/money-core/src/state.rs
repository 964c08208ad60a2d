//! Simulation State
//!
//! Everything a period reads and writes: the population and the per-period
//! tallies the phase systems accumulate before they are normalized into a
//! [`PeriodStatistics`](money_events::PeriodStatistics) snapshot.

use std::collections::BTreeMap;

use money_events::{ExchangeType, Good};

use crate::setup::Population;

/// Raw counts for the current period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodTally {
    /// Completed exchanges by type
    pub exchanges: BTreeMap<ExchangeType, u64>,
    pub n_exchanges: u64,
    pub n_consumed: u64,
    /// Per good: times accepted when offered as a medium
    pub accepted_as_medium: Vec<u64>,
    /// Per good: times offered as a medium
    pub proposition_of_medium: Vec<u64>,
    /// Rows: consumption good. Columns: held good.
    pub holdings: Vec<Vec<u64>>,
}

impl PeriodTally {
    pub fn new(n_goods: usize) -> Self {
        Self {
            exchanges: ExchangeType::all(n_goods).into_iter().map(|t| (t, 0)).collect(),
            n_exchanges: 0,
            n_consumed: 0,
            accepted_as_medium: vec![0; n_goods],
            proposition_of_medium: vec![0; n_goods],
            holdings: vec![vec![0; n_goods]; n_goods],
        }
    }

    pub fn n_goods(&self) -> usize {
        self.accepted_as_medium.len()
    }

    /// Zero every counter, keeping every exchange type present.
    pub fn reset(&mut self) {
        self.exchanges.values_mut().for_each(|count| *count = 0);
        self.n_exchanges = 0;
        self.n_consumed = 0;
        self.accepted_as_medium.iter_mut().for_each(|c| *c = 0);
        self.proposition_of_medium.iter_mut().for_each(|c| *c = 0);
        for row in &mut self.holdings {
            row.iter_mut().for_each(|c| *c = 0);
        }
    }

    pub fn record_holding(&mut self, consumption: Good, held: Good) {
        self.holdings[consumption.index()][held.index()] += 1;
    }

    pub fn record_medium_offer(&mut self, offered: Good, accepted: bool) {
        self.proposition_of_medium[offered.index()] += 1;
        if accepted {
            self.accepted_as_medium[offered.index()] += 1;
        }
    }

    /// Count a completed trade. Swaps of identical goods are not exchanges
    /// and are ignored; returns whether the trade was counted.
    pub fn record_exchange(&mut self, a: Good, b: Good) -> bool {
        match ExchangeType::new(a, b) {
            Some(exchange) => {
                *self.exchanges.entry(exchange).or_insert(0) += 1;
                self.n_exchanges += 1;
                true
            }
            None => false,
        }
    }

    pub fn record_consumption(&mut self) {
        self.n_consumed += 1;
    }
}

/// Mutable state threaded through every phase of a period.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub population: Population,
    pub tally: PeriodTally,
}

impl SimulationState {
    pub fn new(population: Population) -> Self {
        let tally = PeriodTally::new(population.n_goods());
        Self { population, tally }
    }

    pub fn n_goods(&self) -> usize {
        self.population.n_goods()
    }
}
