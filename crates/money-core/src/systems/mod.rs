//! Simulation Systems
//!
//! The phases of a period, in order: proportions, matching, encounters,
//! consumption, aggregation. Each takes the [`SimulationState`](crate::state::SimulationState)
//! explicitly; the random ones also take the generator.

pub mod aggregate;
pub mod choice;
pub mod consumption;
pub mod encounter;
pub mod matching;
pub mod proportions;

// Re-export commonly used systems
pub use aggregate::aggregate_period;
pub use choice::{softmax, squash, weighted_choice};
pub use consumption::apply_consumption;
pub use encounter::{resolve_encounter, EncounterOutcome};
pub use matching::draw_pairs;
pub use proportions::{compute_proportions, normalized_proportions};
