//! Agent Components
//!
//! Trading agents, their bounded memories, and the pair estimates the
//! frequentist learner keeps.

pub mod adaptive;
pub mod agent;
pub mod beliefs;
pub mod memory;
pub mod random;

pub use adaptive::AdaptiveAgent;
pub use agent::{Agent, Trader};
pub use beliefs::{PairEstimates, PRIOR_RATE};
pub use memory::BoundedMemory;
pub use random::RandomAgent;
