//! Period Aggregation
//!
//! Normalizes the period's tallies into a frozen [`PeriodStatistics`].
//! Every ratio with a zero denominator is reported as zero.

use money_events::{ExchangeShare, PeriodStatistics};

use super::proportions::normalized_proportions;
use crate::state::SimulationState;

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}

/// System: freeze the current tallies into the statistics of `period`
pub fn aggregate_period(state: &SimulationState, period: u64) -> PeriodStatistics {
    let tally = &state.tally;

    let exchanges = tally
        .exchanges
        .iter()
        .map(|(&exchange, &count)| ExchangeShare {
            exchange,
            frequency: ratio(count, tally.n_exchanges),
        })
        .collect();

    let good_accepted_as_medium = tally
        .accepted_as_medium
        .iter()
        .zip(&tally.proposition_of_medium)
        .map(|(&accepted, &proposed)| ratio(accepted, proposed))
        .collect();

    PeriodStatistics {
        period,
        exchanges,
        consumption: ratio(tally.n_consumed, state.population.len() as u64),
        n_exchanges: tally.n_exchanges,
        good_accepted_as_medium,
        proportions: normalized_proportions(tally, &state.population),
    }
}
