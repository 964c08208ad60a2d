//! Consumption System
//!
//! At the end of every period each agent, matched or not, consumes if it
//! holds its consumption good and then updates what it has learned.

use crate::components::Trader;
use crate::state::SimulationState;

/// System: every agent consumes and learns from its last decision
pub fn apply_consumption(state: &mut SimulationState) {
    let SimulationState { population, tally } = state;
    for agent in population.iter_mut() {
        if agent.consume() {
            tally.record_consumption();
        }
    }
}
