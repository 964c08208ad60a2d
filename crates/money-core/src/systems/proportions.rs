//! Holding Proportions
//!
//! Cross-sectional snapshot of who holds what, taken at the start of each
//! period before any trade.

use crate::components::Trader;
use crate::setup::Population;
use crate::state::{PeriodTally, SimulationState};

/// System: count, per agent type, the good each agent holds
pub fn compute_proportions(state: &mut SimulationState) {
    let SimulationState { population, tally } = state;
    for agent in population.agents() {
        tally.record_holding(agent.consumption_good(), agent.held_good());
    }
}

/// Normalize each row of the holding counts by that role's population.
///
/// Rows of roles with no agents stay at zero.
pub fn normalized_proportions(tally: &PeriodTally, population: &Population) -> Vec<Vec<f64>> {
    tally
        .holdings
        .iter()
        .enumerate()
        .map(|(consumption, row)| {
            let count = population.role_count(consumption.into());
            row.iter()
                .map(|&held| if count > 0 { held as f64 / count as f64 } else { 0.0 })
                .collect()
        })
        .collect()
}
