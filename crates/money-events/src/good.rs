//! Goods and Roles
//!
//! Goods are opaque indices in `0..n_goods`. A role pairs the good an agent
//! produces with the good it consumes.
//!
//! # Example
//!
//! ```
//! use money_events::{AgentRole, Good};
//!
//! let role = AgentRole::cyclic(2, 3);
//! assert_eq!(role.production, Good(0));
//! assert_eq!(role.consumption, Good(2));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tradeable good, identified by its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Good(pub usize);

impl Good {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for Good {
    fn from(index: usize) -> Self {
        Good(index)
    }
}

impl fmt::Display for Good {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "good_{}", self.0)
    }
}

/// The fixed specialization of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentRole {
    pub production: Good,
    pub consumption: Good,
}

impl AgentRole {
    /// Role `index` of an economy with `n_goods` goods.
    ///
    /// Role `i` consumes good `i` and produces good `(i + 1) % n_goods`, so
    /// every good is both produced and consumed and no role consumes its own
    /// output (for `n_goods >= 2`).
    pub fn cyclic(index: usize, n_goods: usize) -> Self {
        Self {
            production: Good((index + 1) % n_goods),
            consumption: Good(index),
        }
    }

    /// All roles of an economy, in role order.
    pub fn all(n_goods: usize) -> Vec<Self> {
        (0..n_goods).map(|i| Self::cyclic(i, n_goods)).collect()
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.production, self.consumption)
    }
}

/// Unordered pair of distinct goods changing hands in a trade.
///
/// Stored low good first, so `ExchangeType::new(a, b) == ExchangeType::new(b, a)`
/// and the derived ordering is lexicographic on `(low, high)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExchangeType {
    low: Good,
    high: Good,
}

impl ExchangeType {
    /// Returns `None` when both goods are the same: swapping identical goods
    /// is not an exchange.
    pub fn new(a: Good, b: Good) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn low(&self) -> Good {
        self.low
    }

    pub fn high(&self) -> Good {
        self.high
    }

    /// Every exchange type of an economy, in lexicographic order.
    pub fn all(n_goods: usize) -> Vec<Self> {
        let mut types = Vec::with_capacity(n_goods * n_goods.saturating_sub(1) / 2);
        for low in 0..n_goods {
            for high in (low + 1)..n_goods {
                types.push(Self {
                    low: Good(low),
                    high: Good(high),
                });
            }
        }
        types
    }
}

impl fmt::Display for ExchangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low.0, self.high.0)
    }
}
