//! Economy Setup
//!
//! Population construction from a role repartition.

pub mod population;

pub use population::Population;
