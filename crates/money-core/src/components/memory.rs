//! Bounded Memory
//!
//! Fixed-capacity window of yes/no observations. The oldest observation is
//! evicted once the window is full, and the count of positive observations
//! is maintained incrementally so the mean costs O(1).

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedMemory {
    samples: VecDeque<bool>,
    capacity: usize,
    hits: usize,
}

impl BoundedMemory {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            hits: 0,
        }
    }

    /// Append an observation, evicting the oldest one if the window is full.
    pub fn record(&mut self, hit: bool) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity && self.samples.pop_front() == Some(true) {
            self.hits -= 1;
        }
        self.samples.push_back(hit);
        if hit {
            self.hits += 1;
        }
    }

    /// Fraction of positive observations, `None` before the first one.
    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            None
        } else {
            Some(self.hits as f64 / self.samples.len() as f64)
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_memory_has_no_mean() {
        let memory = BoundedMemory::new(3);
        assert!(memory.is_empty());
        assert_eq!(memory.mean(), None);
    }

    #[test]
    fn test_window_evicts_oldest() {
        let mut memory = BoundedMemory::new(3);
        memory.record(true);
        memory.record(false);
        memory.record(false);
        assert_eq!(memory.len(), 3);
        assert_eq!(memory.mean(), Some(1.0 / 3.0));

        // Evicts the leading `true`
        memory.record(false);
        assert_eq!(memory.len(), 3);
        assert_eq!(memory.mean(), Some(0.0));

        memory.record(true);
        assert_eq!(memory.mean(), Some(1.0 / 3.0));
    }

    #[test]
    fn test_matches_trim_then_mean() {
        let observations = [true, false, true, true, false, false, true, false, true, true, true];
        let capacity = 4;
        let mut memory = BoundedMemory::new(capacity);
        let mut naive: Vec<bool> = Vec::new();

        for &hit in &observations {
            memory.record(hit);
            naive.push(hit);
            if naive.len() > capacity {
                naive.remove(0);
            }
            let expected = naive.iter().filter(|&&h| h).count() as f64 / naive.len() as f64;
            assert_eq!(memory.mean(), Some(expected));
        }
    }
}
