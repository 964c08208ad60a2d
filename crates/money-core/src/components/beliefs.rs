//! Pair Estimates
//!
//! One bounded-memory frequency estimate per ordered pair of distinct goods.
//! A frequentist agent keeps two tables: how often it meets each
//! (held, offered) situation, and how often accepting in that situation
//! actually changed the good in its hands.

use money_events::Good;

use super::memory::BoundedMemory;

/// Rate reported for a pair that has not been observed yet.
pub const PRIOR_RATE: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct PairEstimates {
    n_goods: usize,
    memories: Vec<BoundedMemory>,
}

impl PairEstimates {
    pub fn new(n_goods: usize, memory_span: usize) -> Self {
        let n_pairs = n_goods * n_goods.saturating_sub(1);
        Self {
            n_goods,
            memories: vec![BoundedMemory::new(memory_span); n_pairs],
        }
    }

    /// Dense slot of the ordered pair `(from, to)`, skipping the diagonal.
    fn slot(&self, from: Good, to: Good) -> Option<usize> {
        let (from, to) = (from.index(), to.index());
        if from == to || from >= self.n_goods || to >= self.n_goods {
            return None;
        }
        let column = if to < from { to } else { to - 1 };
        Some(from * (self.n_goods - 1) + column)
    }

    /// Current estimate for `(from, to)`.
    ///
    /// Unobserved pairs report [`PRIOR_RATE`]; pairs of identical goods carry
    /// no estimate and report zero.
    pub fn rate(&self, from: Good, to: Good) -> f64 {
        match self.slot(from, to) {
            Some(slot) => self.memories[slot].mean().unwrap_or(PRIOR_RATE),
            None => 0.0,
        }
    }

    /// Record one observation for a single pair.
    pub fn observe(&mut self, from: Good, to: Good, hit: bool) {
        if let Some(slot) = self.slot(from, to) {
            self.memories[slot].record(hit);
        }
    }

    /// Record that `situation` occurred: a hit for that pair, a miss for every other.
    pub fn observe_exclusive(&mut self, situation: (Good, Good)) {
        let target = self.slot(situation.0, situation.1);
        for (slot, memory) in self.memories.iter_mut().enumerate() {
            memory.record(Some(slot) == target);
        }
    }

    /// Number of observations currently remembered for `(from, to)`.
    pub fn history_len(&self, from: Good, to: Good) -> usize {
        self.slot(from, to)
            .map(|slot| self.memories[slot].len())
            .unwrap_or(0)
    }

    /// Every ordered pair of distinct goods.
    pub fn pairs(&self) -> impl Iterator<Item = (Good, Good)> + '_ {
        (0..self.n_goods).flat_map(move |from| {
            (0..self.n_goods)
                .filter(move |&to| to != from)
                .map(move |to| (Good(from), Good(to)))
        })
    }

    pub fn len(&self) -> usize {
        self.memories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }
}
