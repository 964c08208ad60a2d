//! Encounter Resolution
//!
//! A matched pair shows each other what they hold. Each side decides on its
//! own; the goods change hands only if both agree.

use money_events::Good;
use rand::Rng;

use crate::components::Trader;
use crate::state::SimulationState;

/// Outcome of one encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncounterOutcome {
    pub first_accepts: bool,
    pub second_accepts: bool,
    /// Both agreed and the goods differed
    pub exchanged: bool,
}

/// Is the agent being asked to take a good it only wants as a go-between?
///
/// True when it still holds its own production and the offered good is
/// neither what it consumes nor what it already holds.
fn faces_medium<T: Trader>(agent: &T, offered: Good) -> bool {
    let held = agent.held_good();
    offered != agent.consumption_good() && offered != held && held == agent.production_good()
}

/// System: resolve the encounter between agents `first` and `second`
///
/// Both indices must name distinct members of the population, as produced
/// by [`draw_pairs`](super::draw_pairs).
pub fn resolve_encounter<R: Rng + ?Sized>(
    state: &mut SimulationState,
    first: usize,
    second: usize,
    rng: &mut R,
) -> EncounterOutcome {
    debug_assert_ne!(first, second, "an agent cannot meet itself");
    let SimulationState { population, tally } = state;

    let (first_good, second_good) = (population[first].held_good(), population[second].held_good());
    let first_faces_medium = faces_medium(&population[first], second_good);
    let second_faces_medium = faces_medium(&population[second], first_good);

    let first_accepts = population[first].decide(second_good, rng);
    let second_accepts = population[second].decide(first_good, rng);

    if first_faces_medium {
        tally.record_medium_offer(second_good, first_accepts);
    }
    if second_faces_medium {
        tally.record_medium_offer(first_good, second_accepts);
    }

    let mut exchanged = false;
    if first_accepts && second_accepts {
        population[first].record_exchange(second_good);
        population[second].record_exchange(first_good);
        exchanged = tally.record_exchange(first_good, second_good);
    }

    EncounterOutcome {
        first_accepts,
        second_accepts,
        exchanged,
    }
}
