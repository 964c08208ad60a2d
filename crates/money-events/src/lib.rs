//! Shared data types for the emergent-money simulation.
//!
//! This crate contains pure data structures with no simulation logic: goods,
//! agent roles, and the per-period statistics produced by the engine.

pub mod good;
pub mod statistics;

// Re-export good types
pub use good::{AgentRole, ExchangeType, Good};

// Re-export statistics types
pub use statistics::{ExchangeShare, PeriodStatistics};
